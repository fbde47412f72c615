//! # Signal track input for sigsax
//!
//! Everything needed to turn a track file on disk into per-base [sigsax_core::Signal]s:
//! the [Track] trait, a bedGraph reader, a bigWig reader (behind the `bigwig` feature),
//! parsing of `path[:chrom[:start-end]]` track specifications and the region source
//! that decides which regions of a track are processed.
//!
pub mod bedgraph;
#[cfg(feature = "bigwig")]
pub mod bigwig;
pub mod error;
pub mod regions;
pub mod track;

// re-expose core functions
pub use bedgraph::*;
#[cfg(feature = "bigwig")]
pub use bigwig::*;
pub use error::*;
pub use regions::*;
pub use track::*;
