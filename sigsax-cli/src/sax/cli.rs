use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const SAX_CMD: &str = "sax";

pub fn create_sax_cli() -> Command {
    Command::new(SAX_CMD)
        .about("SAX-encode a signal track at one alphabet size or across a range of sizes.")
        .arg(
            arg!(<alphabet_size> "Number of symbols, 2 to 20")
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(<input> "Track to encode: path[:chrom[:start-end]] (bigWig or bedGraph)"))
        .arg(arg!(<output> "Output file"))
        .arg(
            Arg::new("iterate-start")
                .long("iterate-start")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Smallest alphabet size of a sweep (default: alphabet_size)"),
        )
        .arg(
            Arg::new("iterate-end")
                .long("iterate-end")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Largest alphabet size of a sweep (default: alphabet_size)"),
        )
        .arg(
            arg!(--window <WINDOW>)
                .required(false)
                .default_value("0")
                .value_parser(value_parser!(usize))
                .help("Average the signal over windows of this many bases, rounded down to a power of two"),
        )
        .arg(
            arg!(--mean <MEAN>)
                .required(false)
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .requires("std")
                .help("Normalize with this mean instead of the data mean (requires --std)"),
        )
        .arg(
            arg!(--std <STD>)
                .required(false)
                .value_parser(value_parser!(f64))
                .allow_negative_numbers(true)
                .requires("mean")
                .help("Normalize with this standard deviation instead of the data's (requires --mean)"),
        )
        .arg(
            Arg::new("force-tabular")
                .long("force-tabular")
                .action(ArgAction::SetTrue)
                .help("Write tabular rows even for a single alphabet size"),
        )
        .arg(
            Arg::new("add-original-value")
                .long("add-original-value")
                .action(ArgAction::SetTrue)
                .help("Append the original value to each tabular row"),
        )
        .arg(
            arg!(-t --threads <THREADS>)
                .required(false)
                .default_value("1")
                .value_parser(value_parser!(usize))
                .help("Number of threads used to encode regions"),
        )
}
