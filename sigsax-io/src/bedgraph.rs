use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use log::debug;

use sigsax_core::utils::get_dynamic_reader;
use sigsax_core::{Region, Signal};

use crate::error::{Result, TrackError};
use crate::track::Track;

#[derive(Debug, Clone, PartialEq)]
struct BedGraphEntry {
    start: u32,
    end: u32,
    value: f64,
}

///
/// An in-memory bedGraph track (`chrom start end value`, 0-based half-open).
///
/// Chromosome order is the order of first appearance in the file; a chromosome's
/// length is the largest end coordinate seen for it.
///
#[derive(Debug, Default)]
pub struct BedGraphTrack {
    order: Vec<String>,
    entries: HashMap<String, Vec<BedGraphEntry>>,
}

impl BedGraphTrack {
    ///
    /// Read a bedGraph file (optionally gzipped) from disk.
    ///
    /// `track`, `browser` and `#` lines are skipped, as are blank lines.
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader =
            get_dynamic_reader(path).map_err(|e| TrackError::FileReadError(format!("{:#}", e)))?;
        let track = Self::from_reader(reader)?;
        debug!(
            "Loaded bedGraph {} with {} chromosome(s)",
            path.display(),
            track.order.len()
        );
        Ok(track)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut track = BedGraphTrack::default();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();

            if trimmed.is_empty()
                || trimmed.starts_with("track")
                || trimmed.starts_with("browser")
                || trimmed.starts_with('#')
            {
                continue;
            }

            let (chrom, entry) =
                parse_bedgraph_line(trimmed).ok_or_else(|| TrackError::ParseError {
                    line: line_num + 1,
                    content: line.clone(),
                })?;

            if !track.entries.contains_key(chrom) {
                track.order.push(chrom.to_string());
            }
            track.entries.entry(chrom.to_string()).or_default().push(entry);
        }

        for entries in track.entries.values_mut() {
            entries.sort_by_key(|e| (e.start, e.end));
        }

        Ok(track)
    }
}

fn parse_bedgraph_line(line: &str) -> Option<(&str, BedGraphEntry)> {
    let mut fields = line.split_whitespace();
    let chrom = fields.next()?;
    let start = fields.next()?.parse::<u32>().ok()?;
    let end = fields.next()?.parse::<u32>().ok()?;
    let value = fields.next()?.parse::<f64>().ok()?;

    if end <= start {
        return None;
    }

    Some((chrom, BedGraphEntry { start, end, value }))
}

impl Track for BedGraphTrack {
    fn chromosomes(&self) -> Vec<(String, u32)> {
        self.order
            .iter()
            .map(|chrom| {
                let length = self.entries[chrom].iter().map(|e| e.end).max().unwrap_or(0);
                (chrom.clone(), length)
            })
            .collect()
    }

    fn values(&mut self, region: &Region) -> Result<Signal> {
        let entries = self
            .entries
            .get(&region.chr)
            .ok_or_else(|| TrackError::UnknownChromosome(region.chr.clone()))?;

        let mut values = vec![f64::NAN; region.width() as usize];

        // sorted by start; stop at the first entry past the region
        for entry in entries.iter().take_while(|e| e.start < region.end) {
            if entry.end <= region.start {
                continue;
            }
            let from = entry.start.max(region.start) - region.start;
            let to = entry.end.min(region.end) - region.start;
            values[from as usize..to as usize].fill(entry.value);
        }

        Ok(Signal::new(region.clone(), values)?)
    }
}
