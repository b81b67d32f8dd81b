use std::env;
use std::process::exit;
use chrono::NaiveDate;
use log::error;
use crate::config::load_config;
use crate::worker::Action;

mod classifier;
mod config;
mod errors;
mod initialization;
mod manager_ntfy;
mod manager_openmeteo;
mod models;
mod notifier;
mod store;
mod watcher;
mod worker;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let action = match parse_action(&args) {
        Some(action) => action,
        None => {
            print_usage();
            exit(2);
        }
    };

    let config_path = env::var("TEEWATCH_CONFIG").unwrap_or("teewatch.toml".to_string());
    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("Error loading configuration from {}: {}", config_path, e);
            exit(1);
        }
    };

    let mut mgr = match initialization::init(&config) {
        Ok(mgr) => mgr,
        Err(e) => {
            println!("{}", e);
            exit(1);
        }
    };

    if let Err(e) = worker::run(&config, &mut mgr, action) {
        error!("{}", e);
        exit(1);
    }
}

/// Parses the command line into an action
///
/// # Arguments
///
/// * 'args' - the command line arguments after the program name
fn parse_action(args: &[String]) -> Option<Action> {
    match args {
        [] => Some(Action::Report),
        [cmd] if cmd == "report" => Some(Action::Report),
        [cmd] if cmd == "clear-date" => Some(Action::ClearDate),
        [cmd] if cmd == "notify" => Some(Action::Notify),
        [cmd, date] if cmd == "set-date" => {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").ok().map(Action::SetDate)
        }
        [cmd, recipients] if cmd == "set-recipients" => {
            Some(Action::SetRecipients(recipients.clone()))
        }
        _ => None,
    }
}

fn print_usage() {
    println!("usage: teewatch [report]");
    println!("       teewatch set-date <YYYY-MM-DD>");
    println!("       teewatch clear-date");
    println!("       teewatch set-recipients <comma separated emails>");
    println!("       teewatch notify");
}
