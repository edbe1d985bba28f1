//! Command-line interface of the keytab lookup-table generator.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

#[derive(Parser, Debug)]
#[command(name = "keytab", version, about = "Generates static string-lookup tables")]
struct Cli {
    /// Tracing filter, e.g. `codegen=trace` or `driver=info`.
    #[clap(long, global = true)]
    trace: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate every table described by the manifest.
    Build(commands::build::BuildOpts),
    /// Validate the manifest without writing any output.
    Check(commands::check::CheckOpts),
}

fn main() -> anyhow::Result<()> {
    common::panic::install_panic_hook();

    let cli = Cli::parse();
    let _guard = cli.trace.as_deref().map(setup_tracing);

    match cli.command {
        Command::Build(opts) => commands::build::build(opts),
        Command::Check(opts) => commands::check::check(opts),
    }
}

fn setup_tracing(filter: &str) -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_indent_lines(true)
                .with_ansi(false)
                .with_writer(std::io::stderr),
        );
    tracing::subscriber::set_default(subscriber)
}
