mod commands;
mod logging;

use std::io::{self, Write};
use std::process;

use clap::{CommandFactory, Parser};
use colored::*;
use commands::{CleanArgs, Cli, Commands};
use dotenv::dotenv;
use sweep_core::{
    CleanupEngine, CleanupOutcome, CleanupRequest, Ledger, ParallelExecutor,
};
use tracing::error;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match sweep_core::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    match args.command {
        Some(Commands::Clean(clean)) => {
            if let Err(err) = run_clean(&config.database_path, clean) {
                eprintln!("{} {}", "Error:".red().bold(), err);
                process::exit(1);
            }
        }
        Some(Commands::History { limit }) => {
            if let Err(err) = run_history(&config.database_path, limit) {
                eprintln!("{} {}", "Error:".red().bold(), err);
                process::exit(1);
            }
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

fn run_clean(db_path: &str, args: CleanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = if args.dry_run {
        CleanupRequest::dry_run(&args.folder)
    } else if let Some(backup_dir) = &args.backup_dir {
        CleanupRequest::backup(&args.folder, backup_dir)
    } else {
        CleanupRequest::normal(&args.folder)
    };

    if !args.dry_run && !args.yes {
        let prompt = match &args.backup_dir {
            Some(dir) => format!("Move everything in '{}' to '{}'?", args.folder, dir),
            None => format!("Delete everything in '{}'?", args.folder),
        };
        if !prompt_confirm(&prompt, Some(false))? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let ledger = Ledger::open(db_path)?;
    let engine = CleanupEngine::new(ledger, ParallelExecutor::new()?);

    match engine.run(&request)? {
        CleanupOutcome::DryRun(previews) => {
            for line in &previews {
                println!("{}", line);
            }
            println!(
                "{} {} entries would be removed",
                "Dry run:".cyan().bold(),
                previews.len()
            );
        }
        CleanupOutcome::Completed { folder, entries } => {
            println!(
                "{} The folder '{}' has been emptied. ({} entries processed)",
                "Success:".green().bold(),
                folder,
                entries
            );
        }
    }

    Ok(())
}

fn run_history(db_path: &str, limit: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let ledger = Ledger::open(db_path)?;
    let records = ledger.list_all()?;
    let total = records.len();

    let shown: Vec<_> = match limit {
        Some(n) => records.into_iter().rev().take(n).rev().collect(),
        None => records,
    };

    for record in &shown {
        let status = if record.status == "success" {
            record.status.green()
        } else {
            record.status.red()
        };
        println!(
            "{:>6}  {}  {:<6}  {:<7}  {}",
            record.id, record.timestamp, record.operation, status, record.file_path
        );
    }
    println!("{} operations recorded", total);

    Ok(())
}

fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        input.clear();

        match default {
            Some(true) => print!("{} (Y/n): ", prompt),
            Some(false) | None => print!("{} (y/N): ", prompt),
        }
        io::stdout().flush()?;

        io::stdin().read_line(&mut input)?;

        match input.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            "" => match default {
                Some(default) => return Ok(default),
                None => continue,
            },
            _ => continue,
        }
    }
}
