mod decoder;
mod models;
mod query;
mod stats;
mod types;

use std::io::{BufWriter, Write, stderr, stdout};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::models::DecodedPayload;
use crate::stats::{aggregate, build_partner_index, filter_by_partner};

fn main() -> Result<()> {
    //NOTE: If I was making a much more sophisticated CLI application, I would have used the clap crate
    //      to handle the CLI parsing and execution.
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: partner-stats [base64|url] [log_level:optional] > [output].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let input = &args[1];
    let log_level = args
        .get(2)
        .map(|s| parse_log_level(s))
        .unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let raw = resolve_input(input);

    let timer = Instant::now();
    let payload = decoder::decode(&raw)?;
    let duration = timer.elapsed();

    info!("Decoded {} records in: {duration:?}", payload.data.len());

    if payload.is_empty() {
        warn!("Decoded payload contains no records");
    }

    write_report_to_stdout(&payload)?;

    Ok(())
}

/// A full URL gets its `data` query parameter extracted; anything else is
/// treated as the bare base64 payload.
fn resolve_input(argument: &str) -> String {
    if argument.contains('?') {
        query::data_param_from_url(argument).unwrap_or_default()
    } else {
        argument.to_string()
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Because we are doing stdout redirection, we will need to utilize stderr to display logging
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry().with(terminal_log).init();
}

fn write_report_to_stdout(payload: &DecodedPayload) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());
    let totals = aggregate(&payload.data);

    writeln!(output, "date,records,total_orders,total_attempts,success_rate")?;
    writeln!(
        output,
        "{},{},{},{},{:.1}",
        payload.report_date().unwrap_or("Not Available"),
        payload.data.len(),
        totals.total_orders(),
        totals.total_attempts(),
        totals.success_rate()
    )?;

    writeln!(output)?;
    writeln!(output, "partner,name,orders,success_rate")?;

    for entry in build_partner_index(&payload.data) {
        let partner_totals = aggregate(&filter_by_partner(&payload.data, Some(&entry.id)));

        writeln!(
            output,
            "{},{},{},{:.1}",
            entry.id,
            entry.name.as_deref().unwrap_or(""),
            entry.order_count,
            partner_totals.success_rate()
        )?;
    }

    output.flush()?;

    Ok(())
}
