//! I define the parsers of this crate, and their common [`Error`] type.

mod _error;
pub use self::_error::*;

pub mod nt;
