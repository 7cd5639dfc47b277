//! Use cases

pub mod handle_message;
