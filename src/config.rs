use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::data::iteration_threshold::{IterationThreshold, IterationThresholdError};
use crate::core::data::resolution::{Resolution, ResolutionError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::data::zoom_increment::{ZoomIncrement, ZoomIncrementError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::presenters::file::factory::FileFormat;

pub const DEFAULT_OUTPUT_DIR: &str = "images";

#[derive(Debug)]
pub enum ConfigError {
    Resolution(ResolutionError),
    Viewport(ViewportError),
    Threshold(IterationThresholdError),
    ZoomIncrement(ZoomIncrementError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution(err) => write!(f, "invalid resolution: {}", err),
            Self::Viewport(err) => write!(f, "invalid initial view: {}", err),
            Self::Threshold(err) => write!(f, "invalid threshold: {}", err),
            Self::ZoomIncrement(err) => write!(f, "invalid zoom increment: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Resolution(err) => Some(err),
            Self::Viewport(err) => Some(err),
            Self::Threshold(err) => Some(err),
            Self::ZoomIncrement(err) => Some(err),
        }
    }
}

impl From<ResolutionError> for ConfigError {
    fn from(err: ResolutionError) -> Self {
        Self::Resolution(err)
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<IterationThresholdError> for ConfigError {
    fn from(err: IterationThresholdError) -> Self {
        Self::Threshold(err)
    }
}

impl From<ZoomIncrementError> for ConfigError {
    fn from(err: ZoomIncrementError) -> Self {
        Self::ZoomIncrement(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColourMapArg {
    Grayscale,
    Fire,
    BlueWhite,
}

impl From<ColourMapArg> for MandelbrotColourMapKinds {
    fn from(arg: ColourMapArg) -> Self {
        match arg {
            ColourMapArg::Grayscale => Self::Grayscale,
            ColourMapArg::Fire => Self::FireGradient,
            ColourMapArg::BlueWhite => Self::BlueWhiteGradient,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Png,
    Ppm,
}

impl From<FormatArg> for FileFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => Self::Png,
            FormatArg::Ppm => Self::Ppm,
        }
    }
}

/// Startup parameters shared by the headless renderer and the window.
#[derive(Debug, Parser)]
#[command(version, about = "Real-time Mandelbrot set viewer")]
pub struct ViewerArgs {
    /// Window and image width in pixels
    #[arg(long, default_value_t = Resolution::DEFAULT_WIDTH)]
    pub width: u32,

    /// Window and image height in pixels
    #[arg(long, default_value_t = Resolution::DEFAULT_HEIGHT)]
    pub height: u32,

    /// Minimum real part of the initial view
    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    pub x0: f64,

    /// Maximum real part of the initial view
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub x1: f64,

    /// Minimum imaginary part of the initial view
    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    pub y0: f64,

    /// Maximum imaginary part of the initial view
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub y1: f64,

    /// Escape-time iteration threshold (at least 20)
    #[arg(short, long, default_value_t = IterationThreshold::DEFAULT)]
    pub threshold: u32,

    /// Scale applied by one scroll step (greater than 1)
    #[arg(short, long, default_value_t = ZoomIncrement::DEFAULT)]
    pub zoom_increment: f64,

    #[arg(long, value_enum, default_value_t = ColourMapArg::Grayscale)]
    pub colour_map: ColourMapArg,

    /// Image format for saved frames
    #[arg(long, value_enum, default_value_t = FormatArg::Png)]
    pub format: FormatArg,

    /// Directory saved frames are written to
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

/// Headless renderer arguments: the shared viewer flags plus an exact
/// output file.
#[derive(Debug, Parser)]
#[command(version, about = "Render one Mandelbrot frame to an image file")]
pub struct RenderArgs {
    #[command(flatten)]
    pub viewer: ViewerArgs,

    /// Exact output file; defaults to a fresh name in the output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ViewerArgs {
    pub fn into_config(self) -> Result<ViewerConfig, ConfigError> {
        Ok(ViewerConfig {
            resolution: Resolution::new(self.width, self.height)?,
            viewport: Viewport::from_bounds(self.x0, self.x1, self.y0, self.y1)?,
            threshold: IterationThreshold::new(self.threshold)?,
            zoom_increment: ZoomIncrement::new(self.zoom_increment)?,
            colour_map: self.colour_map.into(),
            format: self.format.into(),
            output_dir: self.output_dir,
        })
    }
}

/// Validated startup configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub resolution: Resolution,
    pub viewport: Viewport,
    pub threshold: IterationThreshold,
    pub zoom_increment: ZoomIncrement,
    pub colour_map: MandelbrotColourMapKinds,
    pub format: FileFormat,
    pub output_dir: PathBuf,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            viewport: Viewport::default(),
            threshold: IterationThreshold::default(),
            zoom_increment: ZoomIncrement::default(),
            colour_map: MandelbrotColourMapKinds::default(),
            format: FileFormat::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ViewerConfig, Box<dyn Error>> {
        let args = ViewerArgs::try_parse_from(std::iter::once("mandelbrot_viewer").chain(args.iter().copied()))?;
        Ok(args.into_config()?)
    }

    #[test]
    fn test_defaults_match_default_config() {
        assert_eq!(parse(&[]).unwrap(), ViewerConfig::default());
    }

    #[test]
    fn test_default_values() {
        let config = ViewerConfig::default();

        assert_eq!(config.resolution, Resolution::new(800, 800).unwrap());
        assert_eq!(
            config.viewport,
            Viewport::from_bounds(-2.0, 2.0, -2.0, 2.0).unwrap()
        );
        assert_eq!(config.threshold.get(), 150);
        assert_eq!(config.zoom_increment.get(), 1.5);
        assert_eq!(config.output_dir, PathBuf::from("images"));
    }

    #[test]
    fn test_parses_negative_bounds_and_options() {
        let config = parse(&[
            "--width", "320", "--height", "200", "--x0", "-1.5", "--x1", "-0.5", "--y0", "-0.5",
            "--y1", "0.5", "-t", "64", "--colour-map", "fire", "--format", "ppm",
        ])
        .unwrap();

        assert_eq!(config.resolution, Resolution::new(320, 200).unwrap());
        assert_eq!(config.viewport.x0(), -1.5);
        assert_eq!(config.viewport.x1(), -0.5);
        assert_eq!(config.threshold.get(), 64);
        assert_eq!(config.colour_map, MandelbrotColourMapKinds::FireGradient);
        assert_eq!(config.format, FileFormat::Ppm);
    }

    #[test]
    fn test_output_file_is_headless_only() {
        let window_args = ViewerArgs::try_parse_from(["gui", "--output", "frame.png"]);
        assert!(window_args.is_err());

        let render_args =
            RenderArgs::try_parse_from(["mandelbrot_viewer", "-o", "frame.png", "-t", "64"]).unwrap();
        assert_eq!(render_args.output, Some(PathBuf::from("frame.png")));
        assert_eq!(render_args.viewer.into_config().unwrap().threshold.get(), 64);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(parse(&["--threshold", "10"]).is_err());
        assert!(parse(&["--zoom-increment", "1"]).is_err());
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--x0", "1", "--x1", "-1"]).is_err());
    }
}
