// Pretrain-launch - masked-language-model pretraining launcher
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use pretrain_launch::config::load_config;
use pretrain_launch::errors;
use pretrain_launch::pipeline::Launcher;
use pretrain_launch::runner::{CommandRunner, DryRunner, SystemRunner};

#[derive(Parser, Debug)]
#[command(name = "pretrain-launch")]
#[command(about = "Launcher for masked-language-model pretraining runs", version)]
struct Args {
    /// Path to launch configuration (TOML); defaults to ./launch.toml when present
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the invocations without running anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!(
                "{}",
                errors::wrap_error_with_suggestion(
                    format!("{:#}", e),
                    "Run with RUST_LOG=debug for more detail"
                )
            );
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;

    let runner: Box<dyn CommandRunner> = if args.dry_run {
        Box::new(DryRunner)
    } else {
        Box::new(SystemRunner)
    };

    let launcher = Launcher::new(&config, runner.as_ref());
    let outcome = launcher.launch()?;

    // The launcher exits with the pretraining program's code
    Ok(exit_code_from(outcome.code()))
}

fn exit_code_from(code: i32) -> ExitCode {
    // ExitCode only carries a u8; anything outside that range becomes 1
    match u8::try_from(code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => ExitCode::FAILURE,
    }
}

/// Initialize tracing with env-filter log level control
///
/// Default: INFO level, can be overridden with RUST_LOG env var.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}
