mod args;
mod render;
mod session;

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;
use client_core::{load_settings, CrudController, RestClient};
use tracing_subscriber::EnvFilter;

use crate::args::Cli;

fn prompt(question: &str) -> bool {
    print!("{question} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes"),
        Err(err) => {
            tracing::warn!("failed to read confirmation: {err}");
            false
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(url) = cli.api_base_url {
        settings.api_base_url = url;
    }

    let api = RestClient::from_settings(&settings)?;
    let mut controller = CrudController::new(api).with_auto_hide(settings.notification_auto_hide());

    let assume_yes = cli.yes;
    let mut confirm = |question: &str| assume_yes || prompt(question);
    let (kind, op) = cli.resource.into_parts();
    let ok = session::run(&mut controller, kind, op, &mut confirm, &mut io::stdout()).await?;

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
