use anyhow::Result;
use replan::commands::Cli;

fn main() -> Result<()> {
    // Structured log output is only wanted in debug mode; normal runs
    // print through the message macros instead.
    if std::env::var("REPLAN_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    Cli::menu()
}
