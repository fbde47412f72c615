use std::fmt::{self, Display};

use crate::errors::SaxError;

const SYMBOLS: &[u8; AlphabetSize::MAX] = b"abcdefghijklmnopqrst";

///
/// Number of quantization buckets, always within `[2, 20]`.
///
/// Bucket `i` is written as the `i`-th lowercase letter, so an alphabet of size 4
/// uses `a`, `b`, `c`, `d` from the lowest bucket to the highest.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlphabetSize(usize);

impl AlphabetSize {
    pub const MIN: usize = 2;
    pub const MAX: usize = 20;

    pub fn new(size: usize) -> Result<Self, SaxError> {
        if !(Self::MIN..=Self::MAX).contains(&size) {
            return Err(SaxError::InvalidAlphabetSize(size));
        }
        Ok(AlphabetSize(size))
    }

    pub fn get(self) -> usize {
        self.0
    }

    ///
    /// Symbol for a bucket index. Indices past the alphabet are clamped to the last symbol.
    ///
    pub fn symbol(self, bucket: usize) -> u8 {
        SYMBOLS[bucket.min(self.0 - 1)]
    }

    pub fn symbols(self) -> &'static [u8] {
        &SYMBOLS[..self.0]
    }
}

impl Display for AlphabetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// Inclusive range of alphabet sizes swept in one run, in ascending order.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaRange {
    start: AlphabetSize,
    end: AlphabetSize,
}

impl AlphaRange {
    pub fn new(start: usize, end: usize) -> Result<Self, SaxError> {
        let start = AlphabetSize::new(start)?;
        let end = AlphabetSize::new(end)?;
        if start > end {
            return Err(SaxError::InvalidRange {
                start: start.get(),
                end: end.get(),
            });
        }
        Ok(AlphaRange { start, end })
    }

    pub fn single(size: AlphabetSize) -> Self {
        AlphaRange {
            start: size,
            end: size,
        }
    }

    pub fn start(&self) -> AlphabetSize {
        self.start
    }

    pub fn end(&self) -> AlphabetSize {
        self.end
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of alphabet sizes in the range.
    pub fn len(&self) -> usize {
        self.end.get() - self.start.get() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = AlphabetSize> + use<> {
        (self.start.get()..=self.end.get()).map(AlphabetSize)
    }
}

impl Display for AlphaRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(21)]
    #[case(100)]
    fn test_alphabet_size_out_of_range(#[case] size: usize) {
        assert!(matches!(
            AlphabetSize::new(size),
            Err(SaxError::InvalidAlphabetSize(s)) if s == size
        ));
    }

    #[rstest]
    fn test_alphabet_symbols_are_distinct_and_ordered() {
        for size in AlphabetSize::MIN..=AlphabetSize::MAX {
            let symbols = AlphabetSize::new(size).unwrap().symbols();
            assert_eq!(symbols.len(), size);
            assert!(symbols.windows(2).all(|w| w[0] < w[1]));
            assert!(symbols.iter().all(|s| s.is_ascii_graphic()));
        }
    }

    #[rstest]
    fn test_symbol_mapping() {
        let alphabet = AlphabetSize::new(4).unwrap();
        assert_eq!(alphabet.symbol(0), b'a');
        assert_eq!(alphabet.symbol(3), b'd');
        assert_eq!(alphabet.symbol(9), b'd');
    }

    #[rstest]
    fn test_alpha_range_iterates_ascending() {
        let range = AlphaRange::new(2, 5).unwrap();
        let sizes: Vec<usize> = range.iter().map(|a| a.get()).collect();
        assert_eq!(sizes, vec![2, 3, 4, 5]);
        assert_eq!(range.len(), 4);
        assert!(!range.is_single());
        assert_eq!(range.to_string(), "2-5");
    }

    #[rstest]
    fn test_alpha_range_rejects_reversed_bounds() {
        assert!(matches!(
            AlphaRange::new(6, 3),
            Err(SaxError::InvalidRange { start: 6, end: 3 })
        ));
    }

    #[rstest]
    fn test_alpha_range_rejects_bad_bounds() {
        assert!(matches!(
            AlphaRange::new(2, 25),
            Err(SaxError::InvalidAlphabetSize(25))
        ));
    }
}
