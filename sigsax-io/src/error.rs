use thiserror::Error;

use sigsax_core::RegionError;

/// Error type for sigsax-io operations.
#[derive(Error, Debug)]
pub enum TrackError {
    /// The track file could not be opened or read.
    #[error("Can't read track file: {0}")]
    FileReadError(String),

    /// A data line of a text track could not be parsed.
    #[error("Malformed track line {line}: {content}")]
    ParseError { line: usize, content: String },

    /// The file extension does not name a supported track format.
    #[error("Unsupported track format: {0}")]
    UnsupportedFormat(String),

    /// The track format is known but support was not compiled in.
    #[error("Track format '{0}' requires the '{1}' feature")]
    FeatureDisabled(String, &'static str),

    /// A requested chromosome is not present in the track.
    #[error("Chromosome not found in track: {0}")]
    UnknownChromosome(String),

    /// A requested region lies beyond the end of its chromosome.
    #[error("Region {region} is outside chromosome bounds (length {length})")]
    RegionOutOfBounds { region: String, length: u32 },

    /// The track specification string is not of the form `path[:chrom[:start-end]]`.
    #[error("Invalid track specification: {0}")]
    InvalidTrackSpec(String),

    #[error("BigWig error: {0}")]
    BigWigError(String),

    #[error(transparent)]
    Region(#[from] RegionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for sigsax-io operations.
pub type Result<T> = std::result::Result<T, TrackError>;
