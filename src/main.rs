mod input;
mod logging;
mod lookup;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::input::{InputError, load_dataset};
use crate::lookup::MarketIndex;
use crate::model::metrics::{MetricSet, WeightVector};
use crate::model::record::DatasetRole;
use crate::pipeline::stage4_report::{Selection, render_selection, write_reports};
use crate::pipeline::{PipelineError, PipelineOutput, run_pipeline};

#[derive(Debug, Parser)]
#[command(name = "kira-marketrisk", version, about)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score and classify the target period, then write the report bundle.
    Run {
        #[arg(long)]
        reference: PathBuf,
        #[arg(long)]
        target: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, requires = "market")]
        district: Option<String>,
        #[arg(long, requires = "district")]
        market: Option<String>,
    },
    /// Print the result card for one district/market pair.
    Lookup {
        #[arg(long)]
        reference: PathBuf,
        #[arg(long)]
        target: PathBuf,
        #[arg(long)]
        district: String,
        #[arg(long)]
        market: String,
    },
    /// List target districts, or the markets of one district.
    Markets {
        #[arg(long)]
        target: PathBuf,
        #[arg(long)]
        district: Option<String>,
    },
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("failed to write reports: {0}")]
    Io(#[from] std::io::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Run {
            reference,
            target,
            out,
            district,
            market,
        } => {
            let output = score_inputs(&reference, &target)?;
            let index = MarketIndex::build(&output.target);
            let selection = selection_from(district, market);
            write_reports(&output, &index, selection.as_ref(), &out)?;
        }
        Command::Lookup {
            reference,
            target,
            district,
            market,
        } => {
            let output = score_inputs(&reference, &target)?;
            let index = MarketIndex::build(&output.target);
            if !index.contains(&district, &market) {
                tracing::warn!(%district, %market, "selection not present in target dataset");
            }
            let selection = Selection { district, market };
            print!("{}", render_selection(&output, &selection));
        }
        Command::Markets { target, district } => {
            let metrics = MetricSet::builtin();
            let dataset = load_dataset(&target, DatasetRole::Target, &metrics)?;
            let index = MarketIndex::build(&dataset);
            for line in list_markets(&index, district.as_deref()) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn score_inputs(reference: &Path, target: &Path) -> Result<PipelineOutput, AppError> {
    let metrics = MetricSet::builtin();
    let weights = WeightVector::default_v1();
    let reference = load_dataset(reference, DatasetRole::Reference, &metrics)?;
    let target = load_dataset(target, DatasetRole::Target, &metrics)?;
    Ok(run_pipeline(reference, target, &metrics, &weights)?)
}

fn selection_from(district: Option<String>, market: Option<String>) -> Option<Selection> {
    match (district, market) {
        (Some(district), Some(market)) => Some(Selection { district, market }),
        _ => None,
    }
}

fn list_markets(index: &MarketIndex, district: Option<&str>) -> Vec<String> {
    match district {
        Some(d) => index.markets(d).map(str::to_string).collect(),
        None => index.districts().map(str::to_string).collect(),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
