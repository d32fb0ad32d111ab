//! CLI entry point for the dust route rater tool.
//!
//! Provides subcommands for the city-wide summary, per-ward route
//! reports, contractor performance breakdowns, and the daily sprinkling
//! schedule.

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use dust_route_rater::{
    analytics::alerts::AlertPolicy,
    analytics::plan::build_plan,
    analytics::report::{city_summary, contractor_report, ward_report},
    output::{append_record, print_json},
    routes::{synthesize_all, synthesize_routes},
    store::WardStore,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "dust_route_rater")]
#[command(about = "Analytics for the municipal dust-mitigation dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// City-wide fleet summary with per-ward statuses and priority wards
    Summary {
        /// CSV file of ward records (defaults to the built-in dataset)
        #[arg(short, long)]
        data: Option<String>,

        /// CSV file to append the summary row to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Detail report for one ward, with its routes ranked worst-first
    Ward {
        /// Ward identifier, e.g. "shahdara"
        #[arg(value_name = "WARD_ID")]
        id: String,

        /// CSV file of ward records (defaults to the built-in dataset)
        #[arg(short, long)]
        data: Option<String>,

        /// Seed for route synthesis
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },
    /// Per-contractor breakdown with derived performance alerts
    Contractors {
        /// CSV file of ward records (defaults to the built-in dataset)
        #[arg(short, long)]
        data: Option<String>,

        /// Seed for route synthesis
        #[arg(short, long, default_value_t = 0)]
        seed: u64,

        /// Treatments considered for the ineffectiveness check
        #[arg(long, default_value_t = 3)]
        window: usize,

        /// Mean effectiveness (percent) under which a contractor is flagged
        #[arg(long, default_value_t = 15.0)]
        effectiveness_floor: f64,

        /// Hours an untreated route may wait before it counts as skipped
        #[arg(long, default_value_t = 24)]
        staleness_hours: i64,
    },
    /// Today's sprinkling schedule bucketed into time slots
    Plan {
        /// CSV file of ward records (defaults to the built-in dataset)
        #[arg(short, long)]
        data: Option<String>,

        /// Seed for route synthesis
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/dust_route_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("dust_route_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { data, output } => {
            let store = load_store(data.as_deref())?;
            let report = city_summary(store.all())?;

            info!(
                wards = store.len(),
                avg_pm = report.fleet.avg_pm,
                status = report.fleet.status.as_str(),
                "City summary"
            );

            print_json(&report)?;

            if let Some(path) = output {
                append_record(&path, &report.to_row())?;
                info!(path = %path, "Summary row appended");
            }
        }
        Commands::Ward { id, data, seed } => {
            let store = load_store(data.as_deref())?;
            let ward = store.get(&id)?;

            let mut rng = StdRng::seed_from_u64(seed);
            let routes = synthesize_routes(ward, &mut rng, Utc::now());
            let report = ward_report(ward, &routes)?;

            info!(
                ward = %ward.name,
                routes = report.routes.len(),
                status = report.ward.status.as_str(),
                "Ward report"
            );

            print_json(&report)?;
        }
        Commands::Contractors {
            data,
            seed,
            window,
            effectiveness_floor,
            staleness_hours,
        } => {
            let store = load_store(data.as_deref())?;

            let mut rng = StdRng::seed_from_u64(seed);
            let now = Utc::now();
            let routes = synthesize_all(store.all(), &mut rng, now);

            let policy = AlertPolicy {
                window,
                effectiveness_floor,
                staleness_hours,
            };
            let report = contractor_report(store.all(), &routes, &policy, now)?;

            info!(
                contractors = report.contractors.len(),
                alerts = report.alerts.len(),
                "Contractor report"
            );

            print_json(&report)?;
        }
        Commands::Plan { data, seed } => {
            let store = load_store(data.as_deref())?;

            let mut rng = StdRng::seed_from_u64(seed);
            let routes = synthesize_all(store.all(), &mut rng, Utc::now());
            let plan = build_plan(&routes);

            let scheduled: usize = plan.iter().map(|s| s.routes.len()).sum();
            info!(scheduled, "Action plan built");

            print_json(&plan)?;
        }
    }

    Ok(())
}

/// Builds the ward store from a CSV file when one is given, otherwise
/// from the built-in dataset.
fn load_store(data: Option<&str>) -> Result<WardStore> {
    let store = match data {
        Some(path) => {
            info!(path, "Loading ward snapshot from CSV");
            WardStore::from_csv(path)?
        }
        None => WardStore::builtin(),
    };
    Ok(store)
}
