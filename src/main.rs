//! closure-bytes - counter and byte inspection demos

use clap::Parser;

use closure_bytes::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only program output (RUST_LOG overrides -v)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(cli.log_level().into())
                .from_env_lossy(),
        )
        .init();

    tracing::debug!("{}", closure_bytes::info());

    let stdout = std::io::stdout();
    cli::execute(cli, &mut stdout.lock())
}
