//! WAV reading and writing through `hound`.

use std::io::Cursor;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

use crate::error::MiddlewareError;

/// 16-bit PCM audio read from a WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct WavClip {
    pub spec: WavSpec,
    /// Interleaved samples.
    pub samples: Vec<i16>,
}

impl WavClip {
    /// Samples as little-endian bytes, the layout of the WAV data chunk.
    pub fn pcm_bytes(&self) -> Vec<u8> {
        self.samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    /// Number of sample frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.spec.channels.max(1))
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / f64::from(self.spec.sample_rate)
    }
}

/// Read a 16-bit integer PCM WAV file.
pub fn read_wav_i16(data: &[u8]) -> Result<WavClip, MiddlewareError> {
    let mut reader = WavReader::new(Cursor::new(data))?;
    let spec = reader.spec();
    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(MiddlewareError::Missing(format!(
            "expected 16-bit integer PCM, got {}-bit {:?}",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    let samples = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(WavClip { spec, samples })
}

/// Write samples as a WAV file in memory.
pub fn write_wav_i16(spec: WavSpec, samples: &[i16]) -> Result<Vec<u8>, MiddlewareError> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        for &sample in samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}
