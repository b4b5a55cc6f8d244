//! Type labels for reported values
//!
//! Maps each reported value's declared type to a fixed label instead of
//! asking the runtime for a type name.

use std::fmt::Display;

/// A value with a fixed, human-facing type label
pub trait TypeLabel {
    fn type_label() -> &'static str;
}

impl TypeLabel for u8 {
    fn type_label() -> &'static str {
        "uint8"
    }
}

impl TypeLabel for String {
    fn type_label() -> &'static str {
        "string"
    }
}

impl TypeLabel for str {
    fn type_label() -> &'static str {
        "string"
    }
}

/// Format a value as `<type>, <value>`
pub fn labeled<T: TypeLabel + Display + ?Sized>(value: &T) -> String {
    format!("{}, {}", T::type_label(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(u8::type_label(), "uint8");
        assert_eq!(String::type_label(), "string");
        assert_eq!(str::type_label(), "string");
    }

    #[test]
    fn test_labeled_formats_type_then_value() {
        assert_eq!(labeled(&101u8), "uint8, 101");
        assert_eq!(labeled(&"e".to_string()), "string, e");
        assert_eq!(labeled("H"), "string, H");
    }
}
