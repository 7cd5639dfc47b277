//! Movie records and recommendation ranking.

pub mod entities;

pub use entities::{rank_similar, MovieRecord};
