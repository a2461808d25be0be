use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};
use domain::errors::ConclaveError;

fn main() {
    let cli = Cli::parse();
    let code = match dispatch(&cli) {
        Ok(code) => code,
        Err(err) => {
            report_error(cli.json, &err);
            1
        }
    };
    std::process::exit(code);
}

fn dispatch(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Gate { base } => commands::handle_gate(cli, base.as_deref()),
        Commands::Sync { check } => commands::handle_sync(cli, *check),
    }
}

// Terminating failures keep the JSON contract: an envelope with `ok: false`
// and a stable code on stdout, or a single line on stderr.
fn report_error(json: bool, err: &anyhow::Error) {
    let code = err
        .downcast_ref::<ConclaveError>()
        .map(ConclaveError::code)
        .unwrap_or("INTERNAL");
    if json {
        let envelope = serde_json::json!({
            "ok": false,
            "error": { "code": code, "message": format!("{err:#}") }
        });
        let text = serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| envelope.to_string());
        println!("{text}");
    } else {
        eprintln!("error: {err:#}");
    }
}
