use clap::Parser;
use grammar_checker::cli::Cli;
use grammar_checker::utils::{print_error, Theme};
use grammar_checker::{AppError, Bootstrap, Settings};
use std::io;
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err((e, theme)) => {
            let _ = print_error(&mut io::stderr(), &theme, &e.to_string());
            e.exit_code()
        }
    }
}

async fn run() -> Result<(), (AppError, Theme)> {
    let bootstrap = Bootstrap::load().map_err(|e| (e, Theme::colored()))?;
    let theme = bootstrap.theme.clone();

    let mut app = bootstrap
        .connect(Settings::api_key())
        .await
        .map_err(|e| (e, theme.clone()))?;

    let stdin = BufReader::new(tokio::io::stdin());
    app.run(stdin, &mut io::stdout(), &mut io::stderr())
        .await
        .map_err(|e| (e, theme))
}
