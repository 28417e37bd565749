// src/physics/mod.rs
pub mod sampler;

pub use sampler::{Grid, GridPoint};
