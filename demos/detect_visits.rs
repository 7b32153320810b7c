//! End-to-end visit detection over CSV data.
//!
//! Usage:
//!
//! ```text
//! cargo run --example detect_visits -- data/hotspot_data.csv data/raw_data.csv outputs/hotspot_visit_data.csv
//! ```

use std::env;
use std::process::ExitCode;

use nearspot::prelude::*;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: detect_visits <hotspots.csv> <streams.csv> <visits_out.csv>");
        return ExitCode::FAILURE;
    }

    match run(&args[1], &args[2], &args[3]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(hotspot_path: &str, stream_path: &str, output_path: &str) -> Result<()> {
    let detector = DetectorBuilder::new().hotspots_csv(hotspot_path).build()?;
    println!("- {} hotspot locations initialized", detector.len());

    let events = load_stream_events(stream_path)?;
    println!(
        "- Checking hotspot proximity for {} user streams...",
        events.len()
    );

    let visits = detector.process(&events);
    println!("- User visits found for {} hotspots", visits.len());

    if visits.is_empty() {
        println!("No visits on any of the hotspots");
    } else {
        write_visits(output_path, &visits)?;
        println!("- Hotspot visit details saved to '{output_path}'");
    }

    Ok(())
}
