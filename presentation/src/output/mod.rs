//! Reply formatting

pub mod console;

pub use console::ConsoleFormatter;
