// src/macros.rs

/// `s!()` for an empty `String`, `s!(x)` for `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($from:expr) => {
        ::std::string::String::from($from)
    };
}
