use calc::term::{self, Options};
use clap::Parser;

/// ClaudiaCalc, a four register calculator for numbers and strings.
///
/// Set RUST_LOG (for example `RUST_LOG=calc=debug`) to trace commands on
/// stderr.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Do not print the menu at startup.
    #[arg(long)]
    no_menu: bool,

    /// Disable bold and other terminal styling.
    #[arg(long)]
    plain: bool,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() {
    let args = Args::parse();
    init_tracing();
    term::main(Options {
        menu: !args.no_menu,
        plain: args.plain,
    });
}
