use clap::{Arg, Command, value_parser};

pub const BREAKPOINTS_CMD: &str = "breakpoints";

pub fn create_breakpoints_cli() -> Command {
    Command::new(BREAKPOINTS_CMD)
        .about("Print the normal-distribution breakpoints used to quantize each alphabet size.")
        .arg(
            Arg::new("alphabet-size")
                .long("alphabet-size")
                .short('a')
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Only print the breakpoints for this alphabet size (default: all, 2 to 20)"),
        )
}
