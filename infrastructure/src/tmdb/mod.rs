//! TMDb movie metadata adapter

pub mod provider;

pub use provider::TmdbProvider;
