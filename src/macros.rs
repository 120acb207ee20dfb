/// Compile a fixed pattern once and hand out a `&'static Regex`.
///
/// Only literals are accepted, so a failure here is a bug in the crate rather
/// than bad input.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).expect(concat!("built-in pattern: ", $pat)));
        &*RE
    }};
}
