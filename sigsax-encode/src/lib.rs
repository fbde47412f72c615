//! # SAX encoding of genomic signal
//!
//! Converts per-base signal into symbol strings with the SAX transform: values are
//! smoothed over fixed windows, z-normalized, and quantized against breakpoints that cut
//! the standard normal distribution into equiprobable buckets.
//!
//! A run encodes every region of a track either at one alphabet size, written as
//! FASTA-like wrapped text, or across a range of alphabet sizes, written as one
//! tab-separated row per base.
//!
//! # Example
//!
//! ```
//! use sigsax_encode::{AlphabetSize, NormalizationParams, WindowSize, encode};
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let alphabet = AlphabetSize::new(4).unwrap();
//! let sax = encode(&values, alphabet, WindowSize::NONE, &NormalizationParams::FromData).unwrap();
//!
//! assert_eq!(sax.as_str(), "aabbccdd");
//! ```
pub mod alphabet;
pub mod breakpoints;
pub mod config;
pub mod consts;
pub mod encoder;
pub mod errors;
pub mod normalize;
pub mod pipeline;
pub mod render;
pub mod sweep;
pub mod window;

// re-exports
pub use alphabet::{AlphaRange, AlphabetSize};
pub use breakpoints::{breakpoints, breakpoints_for};
pub use config::{SaxConfig, SaxOptions};
pub use encoder::{PreparedSignal, SaxString, encode};
pub use errors::SaxError;
pub use normalize::{NormalizationParams, Normalizer};
pub use pipeline::{RunSummary, run_sax};
pub use render::{SaxRenderer, SequentialRenderer, TabularRenderer};
pub use sweep::{SweepMatrix, sweep};
pub use window::{WindowSize, smooth};
