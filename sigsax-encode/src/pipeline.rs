use std::io::Write;

use indicatif::ProgressBar;
use log::{debug, info};
use rayon::prelude::*;

use sigsax_core::{Region, Signal};
use sigsax_io::Track;

use crate::config::SaxConfig;
use crate::consts::{MAX_BATCH_BASES, REGIONS_PER_THREAD};
use crate::errors::SaxError;
use crate::render::{RenderStats, SaxRenderer};

/// Totals for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub regions: usize,
    pub sections: usize,
    pub positions: usize,
}

impl RunSummary {
    fn add(&mut self, stats: RenderStats) {
        self.regions += 1;
        self.sections += stats.sections;
        self.positions += stats.positions;
    }
}

///
/// SAX-encode every region of a track and write the result to `out`.
///
/// Regions are written in the order given. The `#` header line is written before the
/// first region; an empty region list writes nothing. With more than one thread,
/// regions are loaded in batches and encoded in parallel, but still written in order,
/// so the output does not depend on the thread count. A batch holds at most
/// `threads * REGIONS_PER_THREAD` regions and [MAX_BATCH_BASES] bases. The first error
/// ends the run.
///
/// # Arguments
/// - track: source of per-base values
/// - regions: regions to process, in output order
/// - out: output stream
/// - config: validated run configuration
/// - bar: progress bar advanced once per region
pub fn run_sax<W: Write>(
    track: &mut dyn Track,
    regions: &[Region],
    out: &mut W,
    config: &SaxConfig,
    bar: &ProgressBar,
) -> Result<RunSummary, SaxError> {
    let renderer = config.renderer();
    let mut summary = RunSummary::default();

    if regions.is_empty() {
        info!("No regions to process");
        return Ok(summary);
    }

    info!(
        "Encoding {} region(s) with {:?}, window {}",
        regions.len(),
        config.layout,
        config.window
    );

    renderer.write_header(out)?;

    if config.threads == 1 {
        for region in regions {
            let signal = track.values(region)?;
            debug!("Encoding {} ({} bases)", region, signal.len());
            let stats = renderer.write_signal(out, &signal, config.window, &config.params)?;
            summary.add(stats);
            bar.inc(1);
        }
    } else {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
            .map_err(|e| SaxError::ThreadPool(e.to_string()))?;

        let max_regions = config.threads * REGIONS_PER_THREAD;
        for batch in batches(regions, max_regions, MAX_BATCH_BASES) {
            debug!("Loading batch of {} region(s)", batch.len());
            let signals = batch
                .iter()
                .map(|region| track.values(region))
                .collect::<Result<Vec<Signal>, _>>()?;

            let rendered: Vec<Result<(Vec<u8>, RenderStats), SaxError>> = pool.install(|| {
                signals
                    .par_iter()
                    .map(|signal| render_to_buffer(renderer.as_ref(), signal, config))
                    .collect()
            });

            for result in rendered {
                let (buffer, stats) = result?;
                out.write_all(&buffer)?;
                summary.add(stats);
                bar.inc(1);
            }
        }
    }

    out.flush()?;

    info!(
        "Wrote {} section(s) covering {} base(s) from {} region(s)",
        summary.sections, summary.positions, summary.regions
    );

    Ok(summary)
}

///
/// Split `regions` into consecutive batches of at most `max_regions` regions and
/// `max_bases` total width. A region wider than `max_bases` is a batch by itself.
///
fn batches(regions: &[Region], max_regions: usize, max_bases: u64) -> Vec<&[Region]> {
    let mut batches = Vec::new();
    let mut start = 0;
    let mut bases = 0u64;

    for (i, region) in regions.iter().enumerate() {
        let width = u64::from(region.width());
        let full = i - start == max_regions.max(1) || bases + width > max_bases;
        if i > start && full {
            batches.push(&regions[start..i]);
            start = i;
            bases = 0;
        }
        bases += width;
    }
    if start < regions.len() {
        batches.push(&regions[start..]);
    }

    batches
}

fn render_to_buffer(
    renderer: &dyn SaxRenderer,
    signal: &Signal,
    config: &SaxConfig,
) -> Result<(Vec<u8>, RenderStats), SaxError> {
    debug!("Encoding {} ({} bases)", signal.region, signal.len());
    let mut buffer: Vec<u8> = Vec::new();
    let stats = renderer.write_signal(&mut buffer, signal, config.window, &config.params)?;
    Ok((buffer, stats))
}
