// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::{LevelFilter, debug};

use mrmr::io::{read_dataset, write_dataset};
use mrmr::report::write_report;
use mrmr::timing::Timings;
use mrmr::{Dataset, Discretization, Method, SelectionConfig, Selector};

fn cli() -> Command {
    Command::new("mrmr")
        .version(clap::crate_version!())
        .about(
            "Compute mRMR values for attributes in a data set, taking input either from a \
             file or from standard input.",
        )
        .arg(
            Arg::new("class")
                .short('c')
                .long("class")
                .help("1-indexed class attribute")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("1"),
        )
        .arg(
            Arg::new("discretize")
                .short('d')
                .long("discretize")
                .help("Discretization applied to every value before counting")
                .value_parser(["round", "floor", "ceiling", "truncate"])
                .default_value("round"),
        )
        .arg(
            Arg::new("number")
                .short('n')
                .long("number")
                .help("Max number of attributes to rank; 0 ranks all of them")
                .value_parser(clap::value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            Arg::new("method")
                .short('m')
                .long("method")
                .help("mRMR scoring criterion")
                .value_parser(["mid", "miq"])
                .default_value("mid"),
        )
        .arg(
            Arg::new("verbosity")
                .short('l')
                .long("verbosity")
                .help("Logging verbosity")
                .value_parser(["0", "1", "2", "quiet", "info", "debug"])
                .default_value("quiet"),
        )
        .arg(
            Arg::new("write")
                .short('w')
                .long("write")
                .help("Write the discretized data set to standard output and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .help("Input file; standard input when omitted")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
}

fn level_filter(verbosity: &str) -> LevelFilter {
    match verbosity {
        "1" | "info" => LevelFilter::Info,
        "2" | "debug" => LevelFilter::Debug,
        _ => LevelFilter::Error,
    }
}

fn selection_config(matches: &ArgMatches) -> Result<SelectionConfig> {
    let class = *matches.get_one::<u64>("class").context("missing class attribute")?;
    let class = usize::try_from(class - 1).context("class attribute out of range")?;
    let num_features = *matches.get_one::<usize>("number").context("missing number")?;
    let method: Method = matches
        .get_one::<String>("method")
        .context("missing method")?
        .parse()?;
    Ok(SelectionConfig::default()
        .with_class_attribute(class)
        .with_num_features(num_features)
        .with_method(method))
}

/// Read the data set from `input`, then either echo it discretized or write
/// the ranking report to `output`.
fn execute<R: BufRead, W: Write>(matches: &ArgMatches, input: R, mut output: W) -> Result<()> {
    let policy: Discretization = matches
        .get_one::<String>("discretize")
        .context("missing discretization")?
        .parse()?;
    let config = selection_config(matches)?;

    let mut timings = Timings::new();
    let stage = timings.stage("Reading and transforming dataset and computing attribute information");
    let data: Dataset<u8> = read_dataset(input, policy).context("failed to read data set")?;
    stage.finish();

    if matches.get_flag("write") {
        write_dataset(&data, &mut output)?;
        return Ok(());
    }

    if config.class_attribute >= data.num_attributes() {
        bail!(
            "-c, --class=NUM  class attribute {} out of range for {} attributes",
            config.class_attribute + 1,
            data.num_attributes()
        );
    }

    let rows = Selector::new(config).select_timed(&data, &mut timings)?;
    write_report(&rows, data.names(), &mut output)?;

    debug!("finished in {:e} seconds", timings.total().as_secs_f64());
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let verbosity = matches
        .get_one::<String>("verbosity")
        .map_or("quiet", String::as_str);
    env_logger::Builder::default()
        .filter_level(level_filter(verbosity))
        .parse_env(env_logger::Env::default().filter("MRMR_LOG"))
        .init();

    let stdout = io::stdout().lock();
    match matches.get_one::<PathBuf>("file") {
        Some(path) => {
            debug!("reading from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            execute(&matches, BufReader::new(file), stdout)
        }
        None => {
            debug!("reading from standard input");
            execute(&matches, io::stdin().lock(), stdout)
        }
    }
}
