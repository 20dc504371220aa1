use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use csvtojson::options::{parse_comment, parse_delimiter};
use csvtojson::{Converter, Error, HeaderSource, Options};
use log::LevelFilter;

/// Exit code for invalid or missing flags
const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code when the input root can't be walked
const EXIT_DISCOVERY_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "csvtojson",
    about = "csvtojson is a tool to convert CSV files into JSON files",
    disable_version_flag = true
)]
struct Args {
    /// Print the version
    #[arg(short = 'v', long)]
    version: bool,

    /// The input dir of CSV files, e.g. "."
    #[arg(short, long, value_name = "DIR")]
    input: Option<PathBuf>,

    /// The output dir of JSON files, e.g. "."
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Enable verbose mode
    #[arg(short = 'V', long)]
    verbose: bool,

    /// Enable debug mode (implies verbose)
    #[arg(short = 'D', long)]
    debug: bool,

    /// The CSV delimiter character
    #[arg(short, long, default_value = ",")]
    delimiter: String,

    /// The CSV comment character
    #[arg(short, long, default_value = "")]
    comment: String,

    /// Use this as the CSV header instead of the first line of each CSV file
    #[arg(short = 'H', long, default_value = "")]
    header: String,

    /// The JSON indent
    #[arg(short = 't', long, default_value = "")]
    indent: String,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else if self.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Error
        }
    }

    fn converter(&self) -> csvtojson::Result<Converter> {
        let options = Options {
            delimiter: parse_delimiter(&self.delimiter)?,
            comment: parse_comment(&self.comment)?,
            header: HeaderSource::from_line(&self.header),
            indent: self.indent.clone(),
        };
        Converter::new(
            self.input.clone().unwrap_or_default(),
            self.output.clone().unwrap_or_default(),
            options,
        )
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    if args.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let converter = match args.converter() {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("Error: {}\n", e);
            eprintln!("{}", Args::command().render_help());
            return Ok(ExitCode::from(EXIT_CONFIG_ERROR));
        }
    };

    let report = match converter.run() {
        Ok(report) => report,
        Err(e @ Error::Discovery { .. }) => {
            eprintln!("Error: {}\n", e);
            eprintln!("{}", Args::command().render_help());
            return Ok(ExitCode::from(EXIT_DISCOVERY_ERROR));
        }
        Err(e) => return Err(e.into()),
    };

    for failure in &report.failures {
        eprintln!(
            "Failed to convert {:?}: {}, ignored",
            failure.input, failure.error
        );
    }

    Ok(ExitCode::SUCCESS)
}
