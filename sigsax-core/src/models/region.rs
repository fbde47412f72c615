use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::RegionError;

///
/// Region struct, a named half-open interval `[start, end)` on one chromosome
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub chr: String,
    pub start: u32,
    pub end: u32,
}

impl Region {
    pub fn new(chr: impl Into<String>, start: u32, end: u32) -> Result<Self, RegionError> {
        let chr = chr.into();
        if end <= start {
            return Err(RegionError::EmptyRegion { chr, start, end });
        }
        Ok(Region { chr, start, end })
    }

    ///
    /// Get the number of bases covered by the region
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chr, self.start, self.end)
    }
}

impl FromStr for Region {
    type Err = RegionError;

    ///
    /// Parse a region string of the form `chr:start-end`.
    ///
    /// The split happens on the last `:` so chromosome names containing a colon
    /// are still accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chr, range) = s
            .rsplit_once(':')
            .ok_or_else(|| RegionError::RegionParseError(s.to_string()))?;

        let (start, end) = range
            .split_once('-')
            .ok_or_else(|| RegionError::RegionParseError(s.to_string()))?;

        if chr.is_empty() {
            return Err(RegionError::RegionParseError(s.to_string()));
        }

        let start = start
            .replace(',', "")
            .parse::<u32>()
            .map_err(|_| RegionError::RegionParseError(s.to_string()))?;
        let end = end
            .replace(',', "")
            .parse::<u32>()
            .map_err(|_| RegionError::RegionParseError(s.to_string()))?;

        Region::new(chr, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("chr1:100-200", "chr1", 100, 200)]
    #[case("chrX:0-1", "chrX", 0, 1)]
    #[case("chr2:1,000-2,000", "chr2", 1000, 2000)]
    #[case("HLA-A*01:01:5-10", "HLA-A*01:01", 5, 10)]
    fn test_parse_region(
        #[case] input: &str,
        #[case] chr: &str,
        #[case] start: u32,
        #[case] end: u32,
    ) {
        let region = Region::from_str(input).unwrap();
        assert_eq!(region, Region::new(chr, start, end).unwrap());
    }

    #[rstest]
    #[case("chr1")]
    #[case("chr1:100")]
    #[case(":1-2")]
    #[case("chr1:a-b")]
    fn test_parse_region_malformed(#[case] input: &str) {
        assert!(matches!(
            Region::from_str(input),
            Err(RegionError::RegionParseError(_))
        ));
    }

    #[rstest]
    fn test_parse_region_empty() {
        assert_eq!(
            Region::from_str("chr1:10-10"),
            Err(RegionError::EmptyRegion {
                chr: "chr1".to_string(),
                start: 10,
                end: 10
            })
        );
    }

    #[rstest]
    fn test_region_display_round_trips() {
        let region = Region::new("chr3", 5, 42).unwrap();
        assert_eq!(region.to_string(), "chr3:5-42");
        assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        assert_eq!(region.width(), 37);
    }
}
