use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::env;
use std::path::PathBuf;
use vlaginstructie::ObservanceCache;
use vlaginstructie::config::Config;
use vlaginstructie::context::StandardContext;
use vlaginstructie::sensor::{self, SensorKind};
use vlaginstructie::source::JsonRowSource;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args
        .iter()
        .any(|a| a == "--help" || a == "-h" || a == "help")
    {
        print_help();
        return Ok(());
    }

    let mut command = "sensors".to_string();
    let mut rows_override = None;
    let mut date_override = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" if i + 1 < args.len() => {
                rows_override = Some(args[i + 1].clone());
                i += 1;
            }
            "--date" if i + 1 < args.len() => {
                let d = NaiveDate::parse_from_str(&args[i + 1], "%Y-%m-%d")
                    .with_context(|| format!("Invalid --date '{}'", args[i + 1]))?;
                date_override = Some(d);
                i += 1;
            }
            other => command = other.to_string(),
        }
        i += 1;
    }

    let ctx = StandardContext::new(None);
    let config = Config::load_or_default(&ctx)?;
    vlaginstructie::logging::init(&config.log_level)?;

    let rows_path = match rows_override {
        Some(p) => PathBuf::from(p),
        None => config
            .rows_path(&ctx)
            .ok_or_else(|| anyhow::anyhow!("Could not determine rows file location"))?,
    };
    log::debug!("Using rows file {:?}", rows_path);

    let now = Local::now().naive_local();
    let now = match date_override {
        Some(d) => d.and_time(now.time()),
        None => now,
    };

    let cache = ObservanceCache::new(JsonRowSource::new(rows_path));
    let table = cache.get_table_on(now.date()).await;
    let horizon = config.next_horizon_days;

    let json = match command.as_str() {
        "today" => serde_json::to_string_pretty(&sensor::render(
            SensorKind::Today,
            &table,
            now,
            horizon,
        ))?,
        "tomorrow" => serde_json::to_string_pretty(&sensor::render(
            SensorKind::Tomorrow,
            &table,
            now,
            horizon,
        ))?,
        "next" => serde_json::to_string_pretty(&sensor::render(
            SensorKind::NextFlagDay,
            &table,
            now,
            horizon,
        ))?,
        "table" => serde_json::to_string_pretty(&*table)?,
        "sensors" => {
            let (sensors, binaries) = sensor::render_all(&table, now, horizon);
            serde_json::to_string_pretty(&serde_json::json!({
                "sensors": sensors,
                "binary_sensors": binaries,
            }))?
        }
        other => {
            eprintln!("Unknown command '{}'", other);
            print_help();
            std::process::exit(2);
        }
    };
    println!("{}", json);
    Ok(())
}

fn print_help() {
    println!(
        "vlaginstructie v{} - Dutch flag instruction for today and upcoming days",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    vlaginstructie [COMMAND] [--rows <file>] [--date <YYYY-MM-DD>]");
    println!();
    println!("COMMANDS:");
    println!("    sensors     All sensors and binary sensors (default)");
    println!("    today       Instruction for today");
    println!("    tomorrow    Instruction for tomorrow");
    println!("    next        Next flag day from today");
    println!("    table       Full resolved table for this year and the next");
    println!();
    println!("OPTIONS:");
    println!("    --rows <file>   JSON array of scraped rows (overrides config)");
    println!("    --date <date>   Pretend today is <date>");
}
