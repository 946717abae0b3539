// src/cli.rs
use std::env;
use std::error::Error;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::property::{self, PropertyResult};
use crate::search::SearchController;

pub struct Params {
    pub address: String,
    pub json: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;
    let config = ApiConfig::from_env()?;

    let mut controller = SearchController::new(config);
    // no progress bar to hold full in a terminal
    controller.set_success_hold(Duration::ZERO);

    if !controller.submit(&params.address) {
        let st = controller.snapshot();
        return Err(st
            .error_message()
            .unwrap_or_else(|| s!("Invalid input"))
            .into());
    }
    controller.run_request(&params.address);

    let st = controller.snapshot();
    match st.result {
        Some(p) if params.json => println!("{}", serde_json::to_string_pretty(&p)?),
        Some(p) => print_summary(&p),
        None => {
            return Err(st
                .error_message()
                .unwrap_or_else(|| s!("Lookup failed"))
                .into());
        }
    }
    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn Error>> {
    let mut address: Vec<String> = Vec::new();
    let mut json = false;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--json" => json = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ if a.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
            _ => address.push(a),
        }
    }

    if address.is_empty() {
        return Err("Missing address. Try --help.".into());
    }
    Ok(Params { address: address.join(" "), json })
}

fn print_summary(p: &PropertyResult) {
    println!("{}", p.address);
    println!("  Size:         {}", p.details.size);
    println!("  Value:        {}", property::format_value(p.details.value));
    println!("  Last updated: {}", p.details.last_updated);
    println!();
    println!("Nearby schools:");
    for s in p.schools_by_rating() {
        println!(
            "  {:<30} {}/5  {:.1} km  {}",
            s.name, s.rating, s.distance_km, s.kind
        );
    }
}
