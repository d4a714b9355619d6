use std::env;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use getopts::Options;

use notescan_cli::commands;
use notescan_cli::common::{build_options, parse_action, Action};
use notescan_core::ai::gate::BackendGate;
use notescan_core::ai::openai::OpenAiProvider;
use notescan_core::config::Config;
use notescan_core::notes::handler::NoteService;
use notescan_core::notes::storage::NoteStorage;
use notescan_core::summary::handler::SummaryEngine;

fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} [OPTIONS]", program);
    print!("{}", opts.usage(&brief));
    println!("\nEnvironment variables:");
    println!("  OPENAI_API_KEY                     Enables generative summaries (optional)");
    println!("  NOTESCAN_DB_PATH                   Note database directory (default notescan_db)");
    println!("  NOTESCAN_COMPLETION_TIMEOUT_SECS   Give up on the model after this many seconds (optional)");
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();
    let opts = build_options();

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("Error parsing arguments: {}", f);
            print_usage(&program, &opts);
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        print_usage(&program, &opts);
        return Ok(());
    }

    let action = match parse_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(&program, &opts);
            process::exit(1);
        }
    };

    let config = Config::from_env()?;

    match action {
        Action::Scan {
            source,
            tier,
            dry_run: true,
        } => {
            commands::preview(&build_gate(&config), &source, tier).await?;
        }
        Action::Scan {
            source,
            tier,
            dry_run: false,
        } => {
            let service = NoteService::new(Arc::new(build_gate(&config)), open_storage(&config)?);
            commands::scan(&service, &source, tier).await?;
        }
        Action::List => {
            commands::list(&open_storage(&config)?)?;
        }
        Action::Show(id) => commands::show(&open_storage(&config)?, &id)?,
        Action::Delete(id) => commands::delete(&open_storage(&config)?, &id)?,
    }

    Ok(())
}

fn build_gate(config: &Config) -> BackendGate {
    let provider = Arc::new(OpenAiProvider::new(config.openai_api_key.clone()));
    BackendGate::new(SummaryEngine::new(), provider).with_config(config.gate_config())
}

fn open_storage(config: &Config) -> Result<NoteStorage> {
    let db = sled::open(&config.db_path)
        .with_context(|| format!("Failed to open note database at {}", config.db_path))?;
    Ok(NoteStorage::new(&db)?)
}
