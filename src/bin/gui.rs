use std::error::Error;

use clap::Parser;
use env_logger::Env;

use mandelbrot_viewer::{PixelsPresenterFactory, RunGuiCommand, ViewerArgs};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ViewerArgs::parse().into_config()?;
    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config);

    command.execute()
}
