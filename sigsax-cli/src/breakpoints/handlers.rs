use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::ArgMatches;

use sigsax_encode::alphabet::{AlphaRange, AlphabetSize};
use sigsax_encode::breakpoints;

///
/// Write one tab-separated line per alphabet size: the size, then its breakpoints.
///
pub fn write_breakpoint_table<W: Write>(out: &mut W, range: AlphaRange) -> io::Result<()> {
    for alphabet in range.iter() {
        write!(out, "{}", alphabet)?;
        for cut in breakpoints(alphabet) {
            write!(out, "\t{:.4}", cut)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn run_breakpoints(matches: &ArgMatches) -> Result<()> {
    let range = match matches.get_one::<usize>("alphabet-size") {
        Some(size) => AlphaRange::single(AlphabetSize::new(*size)?),
        None => AlphaRange::new(AlphabetSize::MIN, AlphabetSize::MAX)?,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_breakpoint_table(&mut out, range)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn table(range: AlphaRange) -> String {
        let mut out: Vec<u8> = Vec::new();
        write_breakpoint_table(&mut out, range).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[rstest]
    fn test_single_alphabet_line() {
        let range = AlphaRange::single(AlphabetSize::new(4).unwrap());
        assert_eq!(table(range), "4\t-0.6745\t0.0000\t0.6745\n");
    }

    #[rstest]
    fn test_full_table_has_a_line_per_size() {
        let text = table(AlphaRange::new(AlphabetSize::MIN, AlphabetSize::MAX).unwrap());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 19);
        assert_eq!(lines[0], "2\t0.0000");
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.split('\t').count(), i + 2);
        }
    }
}
