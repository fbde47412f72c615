use std::io::Write;

use log::warn;

use sigsax_core::{Region, Section, Signal};

use crate::alphabet::{AlphaRange, AlphabetSize};
use crate::consts::{COMMENT_PREFIX, FASTA_LINE_WIDTH, FIELD_DELIMITER, ORIGINAL_VALUE_PRECISION};
use crate::encoder::PreparedSignal;
use crate::errors::SaxError;
use crate::normalize::NormalizationParams;
use crate::sweep::SweepMatrix;
use crate::window::WindowSize;

/// What one region contributed to the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub sections: usize,
    pub positions: usize,
}

///
/// Writes encoded signal to an output stream in one layout.
///
pub trait SaxRenderer: Sync {
    ///
    /// Write the leading `#` comment line of a run.
    ///
    fn write_header(&self, out: &mut dyn Write) -> Result<(), SaxError>;

    ///
    /// Write one continuous section, given its prepared (smoothed, normalized) values.
    ///
    fn write_section(
        &self,
        out: &mut dyn Write,
        section: &Section,
        prepared: &PreparedSignal,
    ) -> Result<(), SaxError>;

    ///
    /// Encode and write every continuous section of a region's signal.
    ///
    /// Each section is prepared in full before anything of it is written, so a
    /// normalization failure leaves no partial section in the output. Such a failure
    /// names the section it happened in.
    fn write_signal(
        &self,
        out: &mut dyn Write,
        signal: &Signal,
        window: WindowSize,
        params: &NormalizationParams,
    ) -> Result<RenderStats, SaxError> {
        let sections = signal.continuous_sections();
        if sections.is_empty() {
            warn!("No data in region {}; skipping", signal.region);
        }

        let mut stats = RenderStats::default();
        for section in sections.iter() {
            let prepared =
                PreparedSignal::new(section.values, window, params).map_err(|e| match e {
                    SaxError::InvalidParams(reason) => SaxError::InvalidParams(format!(
                        "{} in section {}; fixed mean and std are needed to encode it",
                        reason, section.region
                    )),
                    other => other,
                })?;
            self.write_section(out, section, &prepared)?;
            stats.sections += 1;
            stats.positions += section.len();
        }

        Ok(stats)
    }
}

///
/// FASTA-like output for a single alphabet size: `>chrom:start-end` followed by the
/// symbols wrapped at [FASTA_LINE_WIDTH] per line.
///
#[derive(Debug, Clone, Copy)]
pub struct SequentialRenderer {
    pub alphabet: AlphabetSize,
}

impl SaxRenderer for SequentialRenderer {
    fn write_header(&self, out: &mut dyn Write) -> Result<(), SaxError> {
        writeln!(out, "{} alphabet size = {}", COMMENT_PREFIX, self.alphabet)?;
        Ok(())
    }

    fn write_section(
        &self,
        out: &mut dyn Write,
        section: &Section,
        prepared: &PreparedSignal,
    ) -> Result<(), SaxError> {
        let sax = prepared.quantize(self.alphabet);
        writeln!(out, ">{}", section.region)?;
        write_wrapped(out, sax.as_bytes(), FASTA_LINE_WIDTH)?;
        Ok(())
    }
}

///
/// Write `symbols` as lines of at most `width` symbols each.
///
pub fn write_wrapped(out: &mut dyn Write, symbols: &[u8], width: usize) -> std::io::Result<()> {
    for line in symbols.chunks(width) {
        out.write_all(line)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

///
/// Tab-separated output, one row per base:
/// `chrom  start  end  symbols[  original_value]`, where `symbols` holds one symbol
/// per alphabet size of the range in ascending order.
///
#[derive(Debug, Clone, Copy)]
pub struct TabularRenderer {
    pub range: AlphaRange,
    pub original_values: bool,
}

impl SaxRenderer for TabularRenderer {
    fn write_header(&self, out: &mut dyn Write) -> Result<(), SaxError> {
        writeln!(out, "{} alphabet size = {}", COMMENT_PREFIX, self.range)?;
        Ok(())
    }

    fn write_section(
        &self,
        out: &mut dyn Write,
        section: &Section,
        prepared: &PreparedSignal,
    ) -> Result<(), SaxError> {
        let matrix = prepared.sweep(self.range);
        let originals = self.original_values.then_some(section.values);
        write_rows(out, &section.region, &matrix, originals)
    }
}

///
/// Write one row per position of `matrix`, optionally followed by the original values.
///
/// # Arguments
/// - out: output stream
/// - region: region the rows belong to; row `i` covers base `region.start + i`
/// - matrix: symbols per position
/// - originals: original per-base values, one per row
pub fn write_rows(
    out: &mut dyn Write,
    region: &Region,
    matrix: &SweepMatrix,
    originals: Option<&[f64]>,
) -> Result<(), SaxError> {
    if let Some(values) = originals {
        if values.len() != matrix.rows() {
            return Err(SaxError::DataInconsistency {
                symbols: matrix.rows(),
                values: values.len(),
            });
        }
    }

    for (i, symbols) in matrix.iter_rows().enumerate() {
        let start = region.start + i as u32;
        write!(
            out,
            "{chr}{d}{start}{d}{end}{d}",
            chr = region.chr,
            start = start,
            end = start + 1,
            d = FIELD_DELIMITER
        )?;
        out.write_all(symbols)?;
        if let Some(values) = originals {
            write!(
                out,
                "{}{:.*}",
                FIELD_DELIMITER, ORIGINAL_VALUE_PRECISION, values[i]
            )?;
        }
        out.write_all(b"\n")?;
    }

    Ok(())
}
