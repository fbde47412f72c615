/// Symbols per line in sequential (FASTA-like) output.
pub const FASTA_LINE_WIDTH: usize = 60;

/// Decimal digits of the original value column in tabular output.
pub const ORIGINAL_VALUE_PRECISION: usize = 4;

pub const COMMENT_PREFIX: &str = "#";
pub const FIELD_DELIMITER: char = '\t';

/// Regions loaded per worker thread before a parallel batch is encoded.
pub const REGIONS_PER_THREAD: usize = 4;

/// Upper bound on the bases loaded for one parallel batch. A single region larger
/// than this still forms a batch on its own.
pub const MAX_BATCH_BASES: u64 = 50_000_000;
