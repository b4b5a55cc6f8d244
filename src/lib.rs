//! closure-bytes library
//!
//! Two small, independent demonstrations:
//! - a counter whose state is owned by the closure (or struct) returned to the caller
//! - byte-level indexing into a string, and converting that byte back into a string
//!
//! # Example
//!
//! ```
//! use closure_bytes::{create_counter, inspect};
//!
//! let mut i = create_counter();
//! assert_eq!(i(), 1);
//! assert_eq!(i(), 2);
//!
//! let result = inspect("Hello, World!", 1).unwrap();
//! assert_eq!(result.byte, 101);
//! assert_eq!(result.converted, "e");
//! ```

pub mod types;
pub mod error;
pub mod counter;
pub mod inspect;
pub mod cli;

pub use counter::{create_counter, Counter, SharedCounter};
pub use error::InspectError;
pub use inspect::{byte_to_text, inspect, inspect_signed, Inspection};
pub use types::{labeled, TypeLabel};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get the library info
pub fn info() -> String {
    format!("{} v{} - closure counter and byte inspector demos", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_names_crate_and_version() {
        let info = info();
        assert!(info.starts_with("closure_bytes v"));
        assert!(info.contains(VERSION));
    }
}
