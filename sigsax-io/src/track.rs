use std::path::{Path, PathBuf};
use std::str::FromStr;

use sigsax_core::utils::base_extension;
use sigsax_core::{Region, Signal};

use crate::bedgraph::BedGraphTrack;
use crate::error::{Result, TrackError};

///
/// A source of per-base signal values.
///
pub trait Track {
    ///
    /// Chromosomes in the track with their lengths, in a stable track order.
    ///
    fn chromosomes(&self) -> Vec<(String, u32)>;

    ///
    /// Load one value per base of `region`. Bases without data are `NaN`.
    ///
    /// # Arguments
    /// - region: the region to load, which must lie on a chromosome of the track
    fn values(&mut self, region: &Region) -> Result<Signal>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackFormat {
    BedGraph,
    BigWig,
}

impl TrackFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match base_extension(path).as_deref() {
            Some("bedgraph") | Some("bg") | Some("bdg") => Ok(TrackFormat::BedGraph),
            Some("bw") | Some("bigwig") => Ok(TrackFormat::BigWig),
            _ => Err(TrackError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

///
/// Open a track file, choosing the reader from the file extension.
///
/// # Arguments
/// - path: path to a `.bedGraph[.gz]`, `.bg`, `.bdg`, `.bw` or `.bigWig` file
pub fn open_track(path: &Path) -> Result<Box<dyn Track>> {
    match TrackFormat::from_path(path)? {
        TrackFormat::BedGraph => Ok(Box::new(BedGraphTrack::from_path(path)?)),
        #[cfg(feature = "bigwig")]
        TrackFormat::BigWig => Ok(Box::new(crate::bigwig::BigWigTrack::open(path)?)),
        #[cfg(not(feature = "bigwig"))]
        TrackFormat::BigWig => Err(TrackError::FeatureDisabled(
            path.display().to_string(),
            "bigwig",
        )),
    }
}

///
/// Which part of a track a run covers.
///
#[derive(Debug, Clone, PartialEq)]
pub enum RegionSelection {
    /// Every chromosome, over its full length.
    All,
    /// One whole chromosome.
    Chromosome(String),
    /// One explicit region.
    Region(Region),
}

///
/// A track path with an optional region selection, written `path[:chrom[:start-end]]`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSpec {
    pub path: PathBuf,
    pub selection: RegionSelection,
}

impl FromStr for TrackSpec {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self> {
        let (path, selection) = match s.split_once(':') {
            None => (s, RegionSelection::All),
            Some((path, rest)) if rest.contains(':') => {
                (path, RegionSelection::Region(Region::from_str(rest)?))
            }
            Some((path, chrom)) => (path, RegionSelection::Chromosome(chrom.to_string())),
        };

        if path.is_empty() {
            return Err(TrackError::InvalidTrackSpec(s.to_string()));
        }
        if matches!(&selection, RegionSelection::Chromosome(chrom) if chrom.is_empty()) {
            return Err(TrackError::InvalidTrackSpec(s.to_string()));
        }

        Ok(TrackSpec {
            path: PathBuf::from(path),
            selection,
        })
    }
}
