use clap::Parser;
use geo_tables::cli::{run, Cli};
use geo_tables::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
