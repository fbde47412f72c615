mod breakpoints;
mod sax;

use anyhow::Result;
use clap::{ArgAction, ArgMatches, Command, arg};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "sigsax";
    pub const PROGRESS_TEMPLATE: &str =
        "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Symbolic Aggregate approXimation (SAX) of genomic signal tracks.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Log run progress (RUST_LOG overrides)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(sax::cli::create_sax_cli())
        .subcommand(breakpoints::cli::create_breakpoints_cli())
}

fn init_logging(matches: &ArgMatches) {
    let level = if matches.get_flag("verbose") {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(&matches);

    match matches.subcommand() {
        //
        // SAX
        //
        Some((sax::cli::SAX_CMD, matches)) => {
            sax::handlers::run_sax(matches)?;
        }

        //
        // BREAKPOINTS
        //
        Some((breakpoints::cli::BREAKPOINTS_CMD, matches)) => {
            breakpoints::handlers::run_breakpoints(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
