//! Macros for declaring golden tests.

/// Declare a test comparing an expression's output against a golden value.
///
/// The expression must evaluate to something implementing `AsRef<[u8]>`.
///
/// # Example
///
/// ```rust,ignore
/// use golden_harness::golden_test;
///
/// golden_test!(compress_block_bc1, hex = "0000fffffafaa9a2", {
///     compress_block(&SIMPLE_BLOCK, Format::Bc1)
/// });
///
/// golden_test!(cooked_convex_mesh, blake3 = "d74981ef...", {
///     cook_convex(&VERTICES)
/// });
/// ```
#[macro_export]
macro_rules! golden_test {
    ($name:ident, hex = $expected:expr, $output:expr) => {
        #[test]
        fn $name() {
            let output = $output;
            $crate::golden::assert_golden_hex($expected, &output);
        }
    };

    ($name:ident, blake3 = $expected:expr, $output:expr) => {
        #[test]
        fn $name() {
            let output = $output;
            $crate::golden::assert_golden_hash($expected, &output);
        }
    };

    ($name:ident, file = $golden:expr, $output:expr) => {
        #[test]
        fn $name() {
            let output = $output;
            $crate::golden::assert_golden_file($golden, &output);
        }
    };
}
