/// Adds an owning `new` constructor to a tuple struct wrapping a `String`,
/// so identifiers can be built from `&str` and `String` alike.
#[macro_export]
macro_rules! impl_string_newtype {
    ($name:ty) => {
        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug, PartialEq)]
    struct Tag(String);
    impl_string_newtype!(Tag);

    #[test]
    fn accepts_str_and_string() {
        assert_eq!(Tag::new("a"), Tag::new(String::from("a")));
    }
}
