// src/stage/mod.rs
pub mod finalize;
pub mod naming;
pub mod sweep;
pub mod workdir;

pub use sweep::{StagedSample, Sweep};
