use clap::Parser;
use env_logger::Env;

use mandelbrot_viewer::{RenderArgs, Viewer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let RenderArgs { viewer, output } = RenderArgs::parse();
    let config = viewer.into_config()?;

    let mut viewer = Viewer::from_config(&config);
    viewer.render()?;

    let path = match output {
        Some(path) => {
            viewer.save_frame_to(&path)?;
            path
        }
        None => viewer.save_frame()?,
    };

    println!("{}", path.display());
    Ok(())
}
