use clap::Parser;
use twin::{init_logging, run, Cli};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();
    let cli = Cli::parse();
    run(&cli)
}
