use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RegionError {
    #[error("Error parsing region: {0}")]
    RegionParseError(String),

    #[error("Region end must be greater than start: {chr}:{start}-{end}")]
    EmptyRegion { chr: String, start: u32, end: u32 },

    #[error("Signal length {values} does not match region width {width}")]
    SignalLengthMismatch { width: u32, values: usize },
}
