//! When I say "runtime", I mean "helpful Rust package that is linked to the compiled program"
//!
//! Compiled programs get their console I/O from here: printing text and numbers to standard
//! output, and reading lines or single characters from standard input. The C ABI lives in
//! [`ffi`]; the rest of the crate is the same behaviour for Rust callers, with the standard
//! streams swappable for any reader or writer.
//!
//! Texts produced by the input functions are owned by whoever receives them. End of input is
//! `None` (a null pointer over the C ABI), so an empty text always means a blank line.

pub mod error;
pub mod ffi;
pub mod input;
pub mod length;
pub mod output;
pub mod symbols;
pub mod text;

pub use error::RuntimeError;
pub use input::{read_char, read_line, Input};
pub use length::length;
pub use output::{print, print_with_number, print_with_string, println, Output};
pub use text::Text;
