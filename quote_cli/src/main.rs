//! # Shop Quote CLI
//!
//! Terminal front end for the quote engine. `shopquote quote` prices a
//! building from flags; `shopquote session` (the default) builds a quote
//! command by command at a prompt.

mod cli;
mod commands;
mod logger;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use quote_core::{CustomerInfo, Dimension, QuoteConfig, QuoteError, QuoteSession};
use tracing::debug;

use crate::cli::{Cli, Commands, QuoteArgs};
use crate::commands::{execute, parse_command, Outcome};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => match QuoteConfig::load(path) {
            Ok(config) => config,
            Err(e) => return report_error(&e),
        },
        None => QuoteConfig::default(),
    };

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Quote(args) => run_quote(config, args),
        Commands::Session => run_session(config),
        Commands::Rates => match config.to_toml_string() {
            Ok(toml) => {
                print!("{}", toml);
                ExitCode::SUCCESS
            }
            Err(e) => report_error(&e),
        },
    }
}

fn run_quote(config: QuoteConfig, args: QuoteArgs) -> ExitCode {
    let mut session = QuoteSession::new(config);
    session.set_dimension(Dimension::SidewallHeight, &args.sidewall_height);
    session.set_dimension(Dimension::Length, &args.length);
    session.set_dimension(Dimension::Width, &args.width);
    session.set_color(args.color);
    session.set_roof_pitch(args.pitch);
    session.set_spray_foam(args.spray_foam);
    session.set_customer(CustomerInfo {
        name: args.name.unwrap_or_default(),
        phone: args.phone.unwrap_or_default(),
        address: args.address.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
    });

    for door in &args.doors {
        if let Err(e) = session.add_door(door.side, door.kind, &door.size) {
            return report_error(&e);
        }
    }

    let summary = session.summary();
    if args.json {
        match summary.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => return report_error(&e),
        }
    } else if args.text {
        print!("{}", summary.to_text());
    } else {
        let b = &summary.building;
        println!("═══════════════════════════════════════");
        println!("  SHOP QUOTE");
        println!("═══════════════════════════════════════");
        println!();
        println!("Building:");
        println!("  Size:       {} ft x {} ft", b.length_ft(), b.width_ft());
        println!("  Sidewalls:  {} ft", b.sidewall_height_ft());
        println!("  Roof pitch: {}", b.roof_pitch());
        println!("  Color:      {}", b.color());
        println!("  Doors:      {}", summary.doors.len());
        println!();
        println!("═══════════════════════════════════════");
        println!("  TOTAL: {}", summary.quote);
        println!("═══════════════════════════════════════");
        println!("{}", summary.quote.note);
    }
    ExitCode::SUCCESS
}

fn run_session(config: QuoteConfig) -> ExitCode {
    let mut session = QuoteSession::new(config);
    println!("Shop Quote - interactive session");
    println!("Type 'help' for commands, 'quit' to leave.");
    println!();

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("quote> ");
        if io::stdout().flush().is_err() {
            break;
        }

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Ok(command) => {
                debug!(?command, "session command");
                match execute(&mut session, command) {
                    Outcome::Print(text) => println!("{}", text),
                    Outcome::Quit => break,
                }
            }
            Err(message) => println!("{}", message),
        }
    }
    ExitCode::SUCCESS
}

fn report_error(e: &QuoteError) -> ExitCode {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    ExitCode::FAILURE
}
