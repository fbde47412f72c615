use std::fmt::{self, Display};

use crate::alphabet::{AlphaRange, AlphabetSize};
use crate::breakpoints::{breakpoints, bucket};
use crate::errors::SaxError;
use crate::normalize::{NormalizationParams, Normalizer};
use crate::sweep::SweepMatrix;
use crate::window::{WindowSize, smooth};

///
/// A series that has been smoothed and z-normalized once, ready to be quantized at
/// any number of alphabet sizes.
///
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSignal {
    normalized: Vec<f64>,
}

impl PreparedSignal {
    ///
    /// Smooth `values` and normalize the smoothed series.
    ///
    /// Data-derived statistics are taken over the smoothed series. An empty input
    /// produces an empty prepared signal without consulting `params`. A single buffer
    /// holds the smoothed values and is then normalized in place.
    ///
    /// # Arguments
    /// - values: raw per-base values, all finite
    /// - window: smoothing window
    /// - params: normalization parameters
    pub fn new(
        values: &[f64],
        window: WindowSize,
        params: &NormalizationParams,
    ) -> Result<Self, SaxError> {
        if values.is_empty() {
            return Ok(PreparedSignal { normalized: vec![] });
        }

        let mut normalized = smooth(values, window).into_owned();
        let normalizer: Normalizer = params.normalizer_for(&normalized)?;
        for value in normalized.iter_mut() {
            *value = normalizer.normalize(*value);
        }

        Ok(PreparedSignal { normalized })
    }

    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn normalized(&self) -> &[f64] {
        &self.normalized
    }

    ///
    /// Quantize every position at one alphabet size.
    ///
    pub fn quantize(&self, alphabet: AlphabetSize) -> SaxString {
        let cuts = breakpoints(alphabet);
        SaxString(
            self.normalized
                .iter()
                .map(|z| alphabet.symbol(bucket(*z, cuts)) as char)
                .collect(),
        )
    }

    ///
    /// Quantize every position at every alphabet size of `range`.
    ///
    pub fn sweep(&self, range: AlphaRange) -> SweepMatrix {
        let mut matrix = SweepMatrix::new(range, self.len());
        for (column, alphabet) in range.iter().enumerate() {
            let cuts = breakpoints(alphabet);
            for (row, z) in self.normalized.iter().enumerate() {
                matrix.set(row, column, alphabet.symbol(bucket(*z, cuts)));
            }
        }
        matrix
    }
}

///
/// One symbol per input position, for one alphabet size.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaxString(String);

impl SaxString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for SaxString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// SAX-encode a series at a single alphabet size.
///
/// # Arguments
/// - values: raw per-base values, all finite
/// - alphabet: number of symbols
/// - window: smoothing window
/// - params: normalization parameters
pub fn encode(
    values: &[f64],
    alphabet: AlphabetSize,
    window: WindowSize,
    params: &NormalizationParams,
) -> Result<SaxString, SaxError> {
    Ok(PreparedSignal::new(values, window, params)?.quantize(alphabet))
}
