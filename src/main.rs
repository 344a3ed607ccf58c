use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::Parser;
use kundali_core::{
    compute_kundali_on, current_dasha, generate_response, mahadasha_timeline, BirthDetails,
    ChartDetails, Language,
};
use log::info;

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic birth chart calculator")]
struct Cli {
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Local birth time, HH:MM
    #[arg(long)]
    time: Option<String>,
    /// Birth place name
    #[arg(long)]
    place: Option<String>,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Offset of the local clock from UTC in minutes
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<i32>,
    /// Date the running dasha is evaluated at (defaults to today)
    #[arg(long)]
    today: Option<NaiveDate>,
    /// Print the mahadasha timeline instead of the chart
    #[arg(long)]
    timeline: bool,
    /// Print a placement table with nakshatra padas and dignities
    #[arg(long)]
    details: bool,
    /// Ask a question about the chart instead of printing it
    #[arg(long)]
    ask: Option<String>,
    /// Language of the answer: english, hindi or hinglish
    #[arg(long, default_value = "english")]
    language: Language,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    let details = BirthDetails {
        date: cli.date,
        time: cli.time,
        place: cli.place,
        latitude: cli.lat,
        longitude: cli.lon,
        utc_offset_minutes: cli.utc_offset,
    };

    let outcome = match compute_kundali_on(&details, today) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::from(2);
        }
    };
    if outcome.is_fallback() {
        info!("showing fallback chart");
    }
    let chart = outcome.into_data();

    if cli.timeline {
        if let Some(birth) = details.date {
            let running = current_dasha(birth, today);
            for period in mahadasha_timeline(birth) {
                let marker = if period.lord == running.lord { "*" } else { " " };
                println!("{} {}", marker, period);
            }
            println!();
            for sub in running.antardashas() {
                println!("  {}", sub);
            }
        }
        return ExitCode::SUCCESS;
    }

    if cli.details {
        if let Some(birth) = details.date {
            print!("{}", ChartDetails::new(&chart, birth));
        }
        return ExitCode::SUCCESS;
    }

    if let Some(query) = cli.ask {
        println!("{}", generate_response(&query, &chart, cli.language));
        return ExitCode::SUCCESS;
    }

    match serde_json::to_string_pretty(&chart) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
