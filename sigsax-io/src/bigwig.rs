use std::path::Path;

use bigtools::BigWigRead;
use bigtools::utils::reopen::ReopenableFile;
use log::debug;

use sigsax_core::{Region, Signal};

use crate::error::{Result, TrackError};
use crate::track::Track;

///
/// A bigWig track read through `bigtools`.
///
pub struct BigWigTrack {
    reader: BigWigRead<ReopenableFile>,
    chroms: Vec<(String, u32)>,
}

impl BigWigTrack {
    pub fn open(path: &Path) -> Result<Self> {
        let path_str = path
            .to_str()
            .ok_or_else(|| TrackError::FileReadError(format!("{:?}", path)))?;

        let reader = BigWigRead::open_file(path_str).map_err(|e| {
            TrackError::BigWigError(format!("Error when opening bigwig {}: {:?}", path_str, e))
        })?;

        let chroms: Vec<(String, u32)> = reader
            .chroms()
            .iter()
            .map(|c| (c.name.clone(), c.length))
            .collect();

        debug!("Opened bigWig {} with {} chromosome(s)", path_str, chroms.len());

        Ok(BigWigTrack { reader, chroms })
    }
}

impl Track for BigWigTrack {
    fn chromosomes(&self) -> Vec<(String, u32)> {
        self.chroms.clone()
    }

    fn values(&mut self, region: &Region) -> Result<Signal> {
        if !self.chroms.iter().any(|(name, _)| *name == region.chr) {
            return Err(TrackError::UnknownChromosome(region.chr.clone()));
        }

        // missing bases come back as NaN
        let values: Vec<f64> = self
            .reader
            .values(&region.chr, region.start, region.end)
            .map_err(|e| TrackError::BigWigError(format!("{}: {:?}", region, e)))?
            .into_iter()
            .map(f64::from)
            .collect();

        Ok(Signal::new(region.clone(), values)?)
    }
}
