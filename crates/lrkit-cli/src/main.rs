use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::{Path, PathBuf};

use lrkit_cli::describe::describe_file;
use lrkit_cli::fit::input::FitConfig;
use lrkit_cli::fit::run::{run_fit, write_fit_report};
use lrkit_cli::util::{validate_data_file, write_text_output};
use lrkit_engine::config::{Delimiter, LoaderConfig};

fn delimiter_arg() -> Arg {
    Arg::new("delimiter")
        .long("delimiter")
        .help("Column delimiter. Inferred from the file extension by default.")
        .value_parser(["auto", "comma", "tab", "semicolon"])
        .value_hint(ValueHint::Other)
}

fn header_arg() -> Arg {
    Arg::new("header")
        .long("header")
        .help("Skip the first line of the data file.")
        .action(ArgAction::SetTrue)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LRKIT_LOG", "error,lrkit=info"))
        .init();

    let matches = Command::new("lrkit")
        .version(clap::crate_version!())
        .about("Linear regression by gradient descent on delimited numeric data")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("fit")
                .about("Fit a linear regression model and report its parameters as JSON")
                .arg(
                    Arg::new("data")
                        .help("Path to the data file (*.csv or *.tsv). Overrides the data file in the configuration file.")
                        .required_unless_present("config")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Path to a JSON fit configuration file")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("label_column")
                        .short('l')
                        .long("label-column")
                        .help("0-based index of the label column. Defaults to the last column.")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("alpha")
                        .short('a')
                        .long("alpha")
                        .help("Learning rate")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("iterations")
                        .short('n')
                        .long("iterations")
                        .help("Maximum number of gradient descent iterations")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("seed")
                        .short('s')
                        .long("seed")
                        .help("Seed for the train/test split. Random when omitted.")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("test_fraction")
                        .short('t')
                        .long("test-fraction")
                        .help("Fraction of rows held out for evaluation")
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("scale")
                        .long("scale")
                        .help("Standardize features using the training rows")
                        .action(ArgAction::SetTrue),
                )
                .arg(delimiter_arg())
                .arg(header_arg())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the JSON report here instead of stdout")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("describe")
                .about("Print per-column summary statistics as TSV")
                .arg(
                    Arg::new("data")
                        .help("Path to the data file")
                        .required(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::FilePath),
                )
                .arg(delimiter_arg())
                .arg(header_arg()),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("fit", sub_m)) => handle_fit(sub_m),
        Some(("describe", sub_m)) => handle_describe(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_fit(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    if let Some(path) = config_path {
        log::info!("[lrkit::fit] Using config: {:?}", path);
    }
    let config = FitConfig::from_arguments(config_path, matches)?;
    log::debug!("[lrkit::fit] {:?}", config);

    match run_fit(&config) {
        Ok(report) => write_fit_report(&report, config.output.as_deref().map(Path::new)),
        Err(e) => {
            log::error!("Fit failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_describe(matches: &ArgMatches) -> Result<()> {
    let data: &String = matches
        .get_one("data")
        .ok_or_else(|| anyhow::anyhow!("No data file given"))?;
    let mut loader = LoaderConfig::default();
    if let Some(delimiter) = matches.get_one::<String>("delimiter") {
        loader.delimiter = delimiter.parse::<Delimiter>().map_err(anyhow::Error::msg)?;
    }
    loader.has_header = matches.get_flag("header");
    validate_data_file(data, loader.delimiter)?;

    let table = describe_file(data, &loader)?;
    write_text_output(None, &table)
}
