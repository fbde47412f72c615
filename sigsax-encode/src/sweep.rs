use crate::alphabet::AlphaRange;
use crate::encoder::PreparedSignal;
use crate::errors::SaxError;
use crate::normalize::NormalizationParams;
use crate::window::WindowSize;

///
/// Symbols for every position at every alphabet size of a range.
///
/// Stored row-major in one preallocated buffer: the row for a position holds one
/// symbol per alphabet size, ascending.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SweepMatrix {
    range: AlphaRange,
    rows: usize,
    cells: Vec<u8>,
}

impl SweepMatrix {
    pub(crate) fn new(range: AlphaRange, rows: usize) -> Self {
        SweepMatrix {
            range,
            rows,
            cells: vec![0; rows * range.len()],
        }
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, symbol: u8) {
        let width = self.width();
        self.cells[row * width + column] = symbol;
    }

    /// Number of positions.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of alphabet sizes.
    pub fn width(&self) -> usize {
        self.range.len()
    }

    pub fn row(&self, row: usize) -> &[u8] {
        let width = self.width();
        &self.cells[row * width..(row + 1) * width]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.width())
    }

    ///
    /// All symbols of one column, i.e. the SAX string at one alphabet size.
    ///
    pub fn column(&self, column: usize) -> Vec<u8> {
        self.iter_rows().map(|row| row[column]).collect()
    }
}

///
/// SAX-encode a series at every alphabet size in `range`.
///
/// Smoothing and normalization run once; only the breakpoints change per column.
///
/// # Arguments
/// - values: raw per-base values, all finite
/// - range: alphabet sizes to encode, ascending
/// - window: smoothing window
/// - params: normalization parameters
pub fn sweep(
    values: &[f64],
    range: AlphaRange,
    window: WindowSize,
    params: &NormalizationParams,
) -> Result<SweepMatrix, SaxError> {
    Ok(PreparedSignal::new(values, window, params)?.sweep(range))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::alphabet::AlphabetSize;
    use crate::encoder::encode;

    #[fixture]
    fn values() -> Vec<f64> {
        vec![0.3, 5.1, -2.0, 7.7, 1.2, 3.3, 3.3, -0.4, 9.0, 2.2]
    }

    #[rstest]
    fn test_sweep_rows_hold_one_symbol_per_alphabet(values: Vec<f64>) {
        let range = AlphaRange::new(2, 4).unwrap();
        let matrix = sweep(&values, range, WindowSize::NONE, &NormalizationParams::FromData)
            .unwrap();

        assert_eq!(matrix.rows(), values.len());
        assert_eq!(matrix.width(), 3);
        for row in matrix.iter_rows() {
            assert_eq!(row.len(), 3);
        }
    }

    #[rstest]
    fn test_sweep_columns_match_single_encodings(values: Vec<f64>) {
        let range = AlphaRange::new(3, 9).unwrap();
        let window = WindowSize::forced(2);
        let params = NormalizationParams::FromData;
        let matrix = sweep(&values, range, window, &params).unwrap();

        for (column, alphabet) in range.iter().enumerate() {
            let single = encode(&values, alphabet, window, &params).unwrap();
            assert_eq!(matrix.column(column), single.as_bytes());
        }
    }

    #[rstest]
    fn test_sweep_ramp_rows() {
        let ramp: Vec<f64> = (1..=8).map(|v| v as f64).collect();
        let range = AlphaRange::new(2, 4).unwrap();
        let matrix = sweep(&ramp, range, WindowSize::NONE, &NormalizationParams::FromData)
            .unwrap();

        assert_eq!(matrix.row(0), b"aaa");
        assert_eq!(matrix.row(3), b"abb");
        assert_eq!(matrix.row(4), b"bbc");
        assert_eq!(matrix.row(7), b"bcd");
    }

    #[rstest]
    fn test_sweep_single_alphabet_range() {
        let range = AlphaRange::single(AlphabetSize::new(5).unwrap());
        let matrix = sweep(&[1.0, 2.0], range, WindowSize::NONE, &NormalizationParams::FromData)
            .unwrap();
        assert_eq!(matrix.width(), 1);
        assert_eq!(matrix.column(0), b"ae");
    }
}
