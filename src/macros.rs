// src/macros.rs

/// `String` shorthand: `s!()` for an empty string, `s!(x)` for
/// `String::from(x)`. Works on literals, consts and vars alike.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($e:expr) => {
        ::std::string::String::from($e)
    };
}
