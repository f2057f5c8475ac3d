// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg form: String::new()
    () => {
        ::std::string::String::new()
    };
    // Single expression: literals, consts or vars alike
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenation shorthand for string-ish parts
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
