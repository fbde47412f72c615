use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indicatif::ProgressBar;
use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::TempDir;

use sigsax_encode::{SaxError, SaxOptions, run_sax};
use sigsax_io::{TrackSpec, open_track, regions_for};

#[fixture]
fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let mut file = fs::File::create(dir.path().join("signal.bedGraph")).unwrap();

    writeln!(file, "track type=bedGraph name=test").unwrap();
    for i in 0..8 {
        writeln!(file, "chr1\t{}\t{}\t{}", i, i + 1, i + 1).unwrap();
    }
    writeln!(file, "chr2\t0\t1\t1.0").unwrap();
    writeln!(file, "chr2\t1\t2\t2.0").unwrap();
    writeln!(file, "chr2\t4\t5\t5.0").unwrap();
    writeln!(file, "chr2\t5\t6\t1.0").unwrap();
    writeln!(file, "chr2\t6\t7\t3.0").unwrap();
    writeln!(file, "chr3\t0\t5\t2.5").unwrap();

    dir
}

fn track_path(dir: &TempDir) -> PathBuf {
    dir.path().join("signal.bedGraph")
}

fn run_to_string(spec: &str, options: &SaxOptions) -> Result<String, SaxError> {
    let spec = TrackSpec::from_str(spec)?;
    let mut track = open_track(&spec.path)?;
    let regions = regions_for(track.as_ref(), &spec.selection)?;
    let config = options.validate()?;

    let mut out: Vec<u8> = Vec::new();
    run_sax(track.as_mut(), &regions, &mut out, &config, &ProgressBar::hidden())?;
    Ok(String::from_utf8(out).unwrap())
}

fn spec_for(path: &Path, selection: &str) -> String {
    format!("{}{}", path.display(), selection)
}

#[rstest]
fn test_sequential_chromosome_with_gap(data_dir: TempDir) {
    let spec = spec_for(&track_path(&data_dir), ":chr2");
    let text = run_to_string(&spec, &SaxOptions::new(3)).unwrap();

    assert_eq!(
        text,
        "# alphabet size = 3\n>chr2:0-2\nac\n>chr2:4-7\ncab\n"
    );
}

#[rstest]
fn test_sequential_ramp(data_dir: TempDir) {
    let spec = spec_for(&track_path(&data_dir), ":chr1");
    let text = run_to_string(&spec, &SaxOptions::new(3)).unwrap();

    assert_eq!(text, "# alphabet size = 3\n>chr1:0-8\naaabbccc\n");
}

#[rstest]
fn test_tabular_region_with_original_values(data_dir: TempDir) {
    let spec = spec_for(&track_path(&data_dir), ":chr1:2-6");
    let mut options = SaxOptions::new(4);
    options.iterate_start = Some(2);
    options.add_original_value = true;

    let text = run_to_string(&spec, &options).unwrap();

    assert_eq!(
        text,
        "# alphabet size = 2-4\n\
         chr1\t2\t3\taaa\t3.0000\n\
         chr1\t3\t4\taab\t4.0000\n\
         chr1\t4\t5\tbcc\t5.0000\n\
         chr1\t5\t6\tbcd\t6.0000\n"
    );
}

#[rstest]
fn test_constant_chromosome_fails_normalization(data_dir: TempDir) {
    let spec = spec_for(&track_path(&data_dir), ":chr3");
    let result = run_to_string(&spec, &SaxOptions::new(4));
    assert!(matches!(result, Err(SaxError::InvalidParams(_))));
}

#[rstest]
fn test_constant_chromosome_with_fixed_params(data_dir: TempDir) {
    let spec = spec_for(&track_path(&data_dir), ":chr3");
    let mut options = SaxOptions::new(4);
    options.mean = Some(0.0);
    options.std = Some(1.0);

    let text = run_to_string(&spec, &options).unwrap();
    assert_eq!(text, "# alphabet size = 4\n>chr3:0-5\nddddd\n");
}

#[rstest]
fn test_whole_track_in_file_order(data_dir: TempDir) {
    let spec = spec_for(&track_path(&data_dir), "");
    let mut options = SaxOptions::new(4);
    options.mean = Some(3.0);
    options.std = Some(2.0);

    let text = run_to_string(&spec, &options).unwrap();
    let headers: Vec<&str> = text.lines().filter(|l| l.starts_with('>')).collect();

    assert_eq!(
        headers,
        vec![">chr1:0-8", ">chr2:0-2", ">chr2:4-7", ">chr3:0-5"]
    );
}

#[rstest]
fn test_threads_do_not_change_output(data_dir: TempDir) {
    let spec = spec_for(&track_path(&data_dir), "");
    let mut options = SaxOptions::new(5);
    options.iterate_start = Some(2);
    options.mean = Some(3.0);
    options.std = Some(2.0);

    let single = run_to_string(&spec, &options).unwrap();
    options.threads = 4;
    let parallel = run_to_string(&spec, &options).unwrap();

    assert_eq!(single, parallel);
}

#[rstest]
fn test_unknown_chromosome(data_dir: TempDir) {
    let spec = spec_for(&track_path(&data_dir), ":chrX");
    assert!(matches!(
        run_to_string(&spec, &SaxOptions::new(4)),
        Err(SaxError::Track(_))
    ));
}
