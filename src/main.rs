use anyhow::Result;
use clap::Parser;

use shameless_arcade::app;
use shameless_arcade::config::{Args, Config};

fn main() -> Result<()> {
    let config = Config::from_args(Args::parse())?;
    app::run(config)
}
