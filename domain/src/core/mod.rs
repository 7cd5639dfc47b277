//! Core domain primitives

pub mod error;
pub mod util;

pub use error::DomainError;
pub use util::truncate_str;
