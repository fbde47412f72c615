use log::warn;

use sigsax_core::Region;

use crate::error::{Result, TrackError};
use crate::track::{RegionSelection, Track};

///
/// Resolve a [RegionSelection] against a track into the ordered list of regions to process.
///
/// `All` yields every non-empty chromosome in track order. An explicit region that runs
/// past the end of its chromosome is clipped to the chromosome length.
///
/// # Arguments
/// - track: the track the regions are read from
/// - selection: which part of the track to cover
pub fn regions_for(track: &dyn Track, selection: &RegionSelection) -> Result<Vec<Region>> {
    let chromosomes = track.chromosomes();
    let length_of = |chrom: &str| {
        chromosomes
            .iter()
            .find(|(name, _)| name == chrom)
            .map(|(_, length)| *length)
            .ok_or_else(|| TrackError::UnknownChromosome(chrom.to_string()))
    };

    match selection {
        RegionSelection::All => Ok(chromosomes
            .iter()
            .filter(|(_, length)| *length > 0)
            .map(|(name, length)| Region {
                chr: name.clone(),
                start: 0,
                end: *length,
            })
            .collect()),

        RegionSelection::Chromosome(chrom) => {
            let length = length_of(chrom)?;
            Ok(vec![Region::new(chrom.as_str(), 0, length)?])
        }

        RegionSelection::Region(region) => {
            let length = length_of(&region.chr)?;
            if region.start >= length {
                return Err(TrackError::RegionOutOfBounds {
                    region: region.to_string(),
                    length,
                });
            }
            if region.end > length {
                warn!(
                    "Region {} extends past the end of {} ({}); clipping",
                    region, region.chr, length
                );
            }
            Ok(vec![Region::new(
                region.chr.as_str(),
                region.start,
                region.end.min(length),
            )?])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use sigsax_core::Signal;

    struct FixedTrack;

    impl Track for FixedTrack {
        fn chromosomes(&self) -> Vec<(String, u32)> {
            vec![
                ("chr2".to_string(), 50),
                ("chrEmpty".to_string(), 0),
                ("chr1".to_string(), 100),
            ]
        }

        fn values(&mut self, region: &Region) -> Result<Signal> {
            Ok(Signal::new(region.clone(), vec![0.0; region.width() as usize])?)
        }
    }

    #[rstest]
    fn test_regions_for_all_keeps_track_order() {
        let regions = regions_for(&FixedTrack, &RegionSelection::All).unwrap();
        let names: Vec<String> = regions.iter().map(|r| r.to_string()).collect();
        assert_eq!(names, vec!["chr2:0-50", "chr1:0-100"]);
    }

    #[rstest]
    fn test_regions_for_chromosome() {
        let selection = RegionSelection::Chromosome("chr1".to_string());
        let regions = regions_for(&FixedTrack, &selection).unwrap();
        assert_eq!(regions, vec![Region::new("chr1", 0, 100).unwrap()]);
    }

    #[rstest]
    fn test_regions_for_region_is_clipped() {
        let selection = RegionSelection::Region(Region::new("chr2", 40, 80).unwrap());
        let regions = regions_for(&FixedTrack, &selection).unwrap();
        assert_eq!(regions, vec![Region::new("chr2", 40, 50).unwrap()]);
    }

    #[rstest]
    fn test_regions_for_region_out_of_bounds() {
        let selection = RegionSelection::Region(Region::new("chr2", 60, 80).unwrap());
        assert!(matches!(
            regions_for(&FixedTrack, &selection),
            Err(TrackError::RegionOutOfBounds { length: 50, .. })
        ));
    }

    #[rstest]
    fn test_regions_for_unknown_chromosome() {
        let selection = RegionSelection::Chromosome("chrZ".to_string());
        assert!(matches!(
            regions_for(&FixedTrack, &selection),
            Err(TrackError::UnknownChromosome(_))
        ));
    }
}
