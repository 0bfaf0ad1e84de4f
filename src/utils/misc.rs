/// `Err` holding an [`eyre::Report`] built from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {{
        use eyre::eyre;

        Err(eyre!($($arg)*))
    }};
}
