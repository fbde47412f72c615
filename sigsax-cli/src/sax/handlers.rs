use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use sigsax_encode::{SaxOptions, run_sax as encode_track};
use sigsax_io::{TrackSpec, open_track, regions_for};

use crate::consts::PROGRESS_TEMPLATE;

pub fn options_from_matches(matches: &ArgMatches) -> Result<SaxOptions> {
    let alphabet_size = *matches
        .get_one::<usize>("alphabet_size")
        .context("An alphabet size is required.")?;

    let mut options = SaxOptions::new(alphabet_size);
    options.iterate_start = matches.get_one::<usize>("iterate-start").copied();
    options.iterate_end = matches.get_one::<usize>("iterate-end").copied();
    options.window = matches.get_one::<usize>("window").copied().unwrap_or(0);
    options.mean = matches.get_one::<f64>("mean").copied();
    options.std = matches.get_one::<f64>("std").copied();
    options.force_tabular = matches.get_flag("force-tabular");
    options.add_original_value = matches.get_flag("add-original-value");
    options.threads = matches.get_one::<usize>("threads").copied().unwrap_or(1);

    Ok(options)
}

pub fn run_sax(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("An input track is required.")?;
    let output = matches
        .get_one::<String>("output")
        .context("An output path is required.")?;

    // every option is checked before the output file exists
    let config = options_from_matches(matches)?
        .validate()
        .context("Invalid sax options")?;

    let spec = TrackSpec::from_str(input)?;
    let mut track =
        open_track(&spec.path).with_context(|| format!("Failed to open {}", spec.path.display()))?;
    let regions = regions_for(track.as_ref(), &spec.selection)?;

    let output_path = Path::new(output);
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    let bar = ProgressBar::new(regions.len() as u64);
    bar.set_style(ProgressStyle::with_template(PROGRESS_TEMPLATE)?.progress_chars("##-"));

    let result = encode_track(track.as_mut(), &regions, &mut writer, &config, &bar)
        .map_err(anyhow::Error::from)
        .and_then(|summary| {
            writer.flush()?;
            Ok(summary)
        });
    bar.finish_and_clear();

    match result {
        Ok(summary) => {
            info!(
                "Wrote {} ({} region(s), {} section(s), {} base(s))",
                output_path.display(),
                summary.regions,
                summary.sections,
                summary.positions
            );
            Ok(())
        }
        Err(e) => {
            drop(writer);
            if let Err(remove_err) = fs::remove_file(output_path) {
                warn!(
                    "Could not remove partial output {}: {}",
                    output_path.display(),
                    remove_err
                );
            }
            Err(e.context(format!("Failed to encode {}", input)))
        }
    }
}
