//! # Core models for sigsax
//!
//! Shared building blocks for the rest of the workspace: genomic [models::Region]s,
//! per-base [models::Signal]s loaded over them, and a few small reading utilities.
//!
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::RegionError;
pub use models::{Region, Section, Signal};
