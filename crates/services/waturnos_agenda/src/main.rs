// --- File: crates/services/waturnos_agenda/src/main.rs ---
//! Provider agenda CLI: fetches bookings from the WATurnos backend and
//! prints the projected calendar events as JSON. With no range it loads
//! today's agenda; with `--from`/`--to` it loads the range the way the
//! calendar does when the visible window changes.

mod factory;

use chrono::NaiveDate;
use clap::Parser;
use factory::AgendaFactory;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;
use waturnos_calendar::models::{ViewGranularity, VisibleRange};
use waturnos_calendar::occupancy::day_occupancy;
use waturnos_common::logging;
use waturnos_config::load_config;

#[derive(Parser, Debug)]
#[command(name = "waturnos-agenda")]
#[command(version, about, long_about = None)]
struct Args {
    /// Range start (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    from: Option<NaiveDate>,

    /// Range end (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    to: Option<NaiveDate>,

    /// View granularity: month, week or day
    #[arg(long)]
    view: Option<String>,

    /// Provider id, overriding the configured default
    #[arg(long)]
    provider: Option<i64>,

    /// Also print an occupancy summary of the fetched bookings
    #[arg(long)]
    occupancy: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    let config = Arc::new(load_config().expect("Failed to load config"));
    let factory = match AgendaFactory::new(config) {
        Ok(factory) => factory,
        Err(err) => {
            error!("Failed to initialize: {err}");
            return ExitCode::FAILURE;
        }
    };

    if args.provider.is_some() {
        factory.session().set_provider(args.provider);
    }
    if factory.session().provider_id().is_none() {
        error!("No provider selected: pass --provider or set provider.default_provider_id");
        return ExitCode::FAILURE;
    }

    let granularity = args.view.as_deref().and_then(ViewGranularity::from_name);
    let controller = factory.calendar_controller(granularity);

    match (args.from, args.to) {
        (Some(from), Some(to)) => {
            let window = VisibleRange {
                view: controller.granularity(),
                start: from.and_hms_opt(0, 0, 0).expect("midnight exists"),
                end: to.and_hms_opt(0, 0, 0).expect("midnight exists"),
            };
            controller.on_dates_set(window).await;
        }
        _ => controller.refresh().await,
    }

    let events = controller.events();
    println!(
        "{}",
        serde_json::to_string_pretty(&events).expect("events serialize")
    );

    if args.occupancy {
        let summary = day_occupancy(&controller.records());
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).expect("summary serializes")
        );
    }

    ExitCode::SUCCESS
}
