use clap::Parser;
use tracing_subscriber::EnvFilter;
use typesafe_url_rs::cli::{Cli, run};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}
