use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, error::ErrorKind};
use serde_json::Value;

use crate::aggregate::SalesEngine;
use crate::config::{LogFormat, StoreConfig};
use crate::constants::config::DEFAULT_LOG_LEVEL;
use crate::constants::envelope::{STATUS_INTERNAL, STATUS_OK};
use crate::envelope::{DashboardParams, envelope_json};
use crate::errors::EngineError;
use crate::store::RecordStore;
use crate::types::ParamValue;

#[derive(Debug, Parser)]
#[command(
    name = "salesdash",
    disable_help_subcommand = true,
    about = "Query a sales dataset for regions, date spans, and customer dashboards",
    long_about = "Answer region, date-range, and per-customer dashboard queries over a read-only sales dataset. Every response is printed as a {status, data} JSON envelope.",
    after_help = "The dataset is resolved in order by explicit arg, environment variables (SALESDASH_DATASET), then project defaults."
)]
struct SalesdashCli {
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional dataset file override (JSON array of sales rows)"
    )]
    dataset: Option<PathBuf>,
    #[arg(
        long = "log-level",
        global = true,
        value_name = "LEVEL",
        help = "Log filter used when RUST_LOG is unset (default: info)"
    )]
    log_level: Option<String>,
    #[command(subcommand)]
    command: SalesCommand,
}

#[derive(Debug, Clone, Subcommand)]
enum SalesCommand {
    /// List every region (state) present in the dataset.
    Regions,
    /// Report the first and last order date for a region.
    Dates {
        #[arg(value_name = "STATE", help = "Region to inspect (exact match)")]
        state: ParamValue,
    },
    /// Build the dashboard for one customer, region, and inclusive date window.
    Dashboard {
        #[arg(long = "customer-id", value_name = "ID")]
        customer_id: Option<ParamValue>,
        #[arg(long, value_name = "STATE")]
        state: Option<ParamValue>,
        #[arg(long = "start-date", value_name = "YYYY-MM-DD")]
        start_date: Option<ParamValue>,
        #[arg(long = "end-date", value_name = "YYYY-MM-DD")]
        end_date: Option<ParamValue>,
    },
}

/// Run the `salesdash` command line and write the response envelope to `out`.
///
/// Returns the envelope status. Help and version output return `200`.
pub fn run_salesdash<I, W>(args_iter: I, out: &mut W) -> Result<u16, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let Some(cli) = parse_cli::<SalesdashCli, _>(
        std::iter::once("salesdash".to_string()).chain(args_iter),
    )?
    else {
        return Ok(STATUS_OK);
    };

    let log_level = cli.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
    let response = match StoreConfig::resolve(cli.dataset) {
        Ok(config) => {
            let config = config.with_log_level(log_level);
            init_logging(&config);
            respond(&config, &cli.command)?
        }
        Err(err) => {
            init_logging(&StoreConfig::default().with_log_level(log_level));
            envelope_json::<()>(Err(err))?
        }
    };

    let status = response_status(&response);
    serde_json::to_writer_pretty(&mut *out, &response)?;
    writeln!(out)?;
    Ok(status)
}

fn init_logging(config: &StoreConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // Ignore repeat initialisation so the runner can be invoked more than once per process.
    let _ = match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };
}

fn respond(config: &StoreConfig, command: &SalesCommand) -> Result<Value, EngineError> {
    match RecordStore::load(&config.dataset_path) {
        Ok(store) => execute(&SalesEngine::new(store), command),
        Err(err) => envelope_json::<()>(Err(err)),
    }
}

fn execute(engine: &SalesEngine, command: &SalesCommand) -> Result<Value, EngineError> {
    match command {
        SalesCommand::Regions => envelope_json(Ok(engine.list_regions())),
        SalesCommand::Dates { state } => envelope_json(engine.region_date_range(state)),
        SalesCommand::Dashboard {
            customer_id,
            state,
            start_date,
            end_date,
        } => {
            let params = DashboardParams {
                customer_id: customer_id.clone(),
                state: state.clone(),
                start_date: start_date.clone(),
                end_date: end_date.clone(),
            };
            envelope_json(params.validate().map(|query| engine.dashboard(&query)))
        }
    }
}

fn response_status(response: &Value) -> u16 {
    response
        .get("status")
        .and_then(Value::as_u64)
        .and_then(|status| u16::try_from(status).ok())
        .unwrap_or(STATUS_INTERNAL)
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
