//! TexJuris CLI - Command-line interface
//!
//! Looks up the law-enforcement agency responsible for a Texas coordinate
//! and prints its contact details.

use clap::Parser;
use std::process;
use std::time::Duration;
use texjuris::logging::{default_log_dir, default_log_file, init_logging};
use texjuris::{Jurisdiction, JurisdictionResult, JurisdictionService};

#[derive(Parser)]
#[command(name = "texjuris")]
#[command(about = "Look up law-enforcement jurisdiction for a Texas coordinate", long_about = None)]
#[command(version = texjuris::VERSION)]
struct Args {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// HTTP timeout per endpoint, in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Also print web-search suggestions for the resolved agency
    #[arg(long)]
    suggestions: bool,

    /// Write debug logs to logs/texjuris.log and stderr
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Keep the guard alive until exit so buffered log lines flush
    let _logging_guard = if args.verbose {
        match init_logging(default_log_dir(), default_log_file()) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Error initializing logging: {}", e);
                process::exit(1);
            }
        }
    } else {
        None
    };

    let service = match JurisdictionService::with_timeout(Duration::from_secs(args.timeout)) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error creating HTTP client: {}", e);
            process::exit(1);
        }
    };

    let result = match service.jurisdiction_by_coordinates(args.lat, args.lon).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing result: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_result(&result);
    }

    if args.suggestions {
        print_suggestions(&service, &result);
    }
}

fn print_result(result: &JurisdictionResult) {
    println!("Jurisdiction lookup for {}", result.coordinates);

    let level = match result.jurisdiction {
        Jurisdiction::City => "City",
        Jurisdiction::County => "County",
    };
    println!("  Jurisdiction: {}", level);
    println!("  Agency: {}", result.primary_agency.name);

    if let Some(phone) = &result.primary_agency.phone {
        println!("  Phone: {}", phone);
    }
    if let Some(website) = &result.primary_agency.website {
        println!("  Website: {}", website);
    }
    if let Some(address) = &result.primary_agency.address {
        println!("  Address: {}", address);
    }

    if result.jurisdiction == Jurisdiction::City {
        println!("  County: {}", result.county.name);
    }
}

fn print_suggestions(
    service: &JurisdictionService,
    result: &JurisdictionResult,
) {
    let (name, county) = match &result.city {
        Some(city) => (city.name.as_str(), city.county.as_str()),
        None => (result.county.name.as_str(), result.county.name.as_str()),
    };

    let suggestions = service.search_suggestions(name, county);

    println!();
    println!("Search suggestions:");
    for query in suggestions
        .phone_search
        .iter()
        .chain(&suggestions.website_search)
        .chain(&suggestions.general_search)
    {
        println!("  {}", query);
    }
}
