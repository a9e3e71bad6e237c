use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::info;

use crate::config::ViewerConfig;
use crate::controllers::ports::file_presenter::{FilePresenterError, FilePresenterPort};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, GeneratePixelBufferError,
};
use crate::core::actions::rasterize::render::render;
use crate::core::data::intensity_grid::IntensityGridError;
use crate::core::data::iteration_threshold::IterationThreshold;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::interaction::controller::{ControllerOutcome, ZoomPanController};
use crate::core::interaction::events::InputEvent;
use crate::core::interaction::session::SessionState;
use crate::presenters::file::factory::file_presenter_factory;
use crate::storage::frame_names::FrameNamer;

#[derive(Debug)]
pub enum ViewerError {
    NoFrame,
    Grid(IntensityGridError),
    Colour(GeneratePixelBufferError),
    Present(FilePresenterError),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFrame => write!(f, "no frame has been rendered yet"),
            Self::Grid(err) => write!(f, "render failed: {}", err),
            Self::Colour(err) => write!(f, "colouring failed: {}", err),
            Self::Present(err) => write!(f, "saving frame failed: {}", err),
        }
    }
}

impl Error for ViewerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoFrame => None,
            Self::Grid(err) => Some(err),
            Self::Colour(err) => Some(err),
            Self::Present(err) => Some(err),
        }
    }
}

impl From<IntensityGridError> for ViewerError {
    fn from(err: IntensityGridError) -> Self {
        Self::Grid(err)
    }
}

impl From<GeneratePixelBufferError> for ViewerError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::Colour(err)
    }
}

impl From<FilePresenterError> for ViewerError {
    fn from(err: FilePresenterError) -> Self {
        Self::Present(err)
    }
}

impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        Self::Present(FilePresenterError::Io(err))
    }
}

/// One completed render. The intensity grid is dropped once coloured.
#[derive(Debug, Clone)]
pub struct Frame {
    pub viewport: Viewport,
    pub threshold: IterationThreshold,
    pub pixels: PixelBuffer,
    pub render_duration: Duration,
}

/// Ties input handling to rendering.
///
/// Events mutate the session through the [`ZoomPanController`] and mark the
/// view dirty; [`Viewer::render_if_dirty`] then produces at most one frame
/// for any number of queued changes.
pub struct Viewer {
    session: SessionState,
    controller: ZoomPanController,
    colour_map: Box<dyn MandelbrotColourMap>,
    file_presenter: Box<dyn FilePresenterPort>,
    namer: FrameNamer,
    dirty: bool,
    latest: Option<Frame>,
    last_saved: Option<PathBuf>,
}

impl Viewer {
    #[must_use]
    pub fn new(config: &ViewerConfig, file_presenter: Box<dyn FilePresenterPort>) -> Self {
        Self {
            session: SessionState::new(
                config.viewport,
                config.threshold,
                config.zoom_increment,
                config.resolution,
            ),
            controller: ZoomPanController::new(),
            colour_map: mandelbrot_colour_map_factory(config.colour_map),
            file_presenter,
            namer: FrameNamer::new(&config.output_dir),
            dirty: true,
            latest: None,
            last_saved: None,
        }
    }

    /// Viewer writing frames in the configured format.
    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config, file_presenter_factory(config.format))
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn controller(&self) -> &ZoomPanController {
        &self.controller
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn latest_frame(&self) -> Option<&Frame> {
        self.latest.as_ref()
    }

    /// Where the most recent successful save went.
    #[must_use]
    pub fn last_saved(&self) -> Option<&Path> {
        self.last_saved.as_deref()
    }

    #[must_use]
    pub fn colour_map_name(&self) -> &'static str {
        self.colour_map.kind().display_name()
    }

    /// Applies one input event. A save request is carried out immediately
    /// against the latest frame; every other outcome is returned for the
    /// caller to present.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<ControllerOutcome, ViewerError> {
        let outcome = self.controller.handle(&mut self.session, event);

        match outcome {
            ControllerOutcome::Redraw => self.dirty = true,
            ControllerOutcome::Position(position) => {
                info!("position: {} + {}i", position.real, position.imag);
            }
            ControllerOutcome::Info(summary) => info!("{}", summary),
            ControllerOutcome::SaveRequested => {
                self.save_frame()?;
            }
            ControllerOutcome::Unchanged | ControllerOutcome::Help => {}
        }

        Ok(outcome)
    }

    /// Renders a new frame if anything changed since the last one.
    pub fn render_if_dirty(&mut self) -> Result<Option<&Frame>, ViewerError> {
        if !self.dirty {
            return Ok(None);
        }

        self.render().map(Some)
    }

    pub fn render(&mut self) -> Result<&Frame, ViewerError> {
        let SessionState {
            viewport,
            threshold,
            resolution,
            ..
        } = self.session;

        let start = Instant::now();
        let grid = render(viewport, threshold, resolution)?;
        let pixels = generate_pixel_buffer(&grid, &self.colour_map)?;
        let render_duration = start.elapsed();

        info!(
            "rendered {} at threshold {} in {:?} ({})",
            resolution, threshold, render_duration, viewport
        );

        self.dirty = false;
        Ok(&*self.latest.insert(Frame {
            viewport,
            threshold,
            pixels,
            render_duration,
        }))
    }

    /// Saves the latest frame under a fresh name in the output directory.
    pub fn save_frame(&mut self) -> Result<PathBuf, ViewerError> {
        if self.latest.is_none() {
            return Err(ViewerError::NoFrame);
        }

        let path = self.namer.next_path(self.file_presenter.extension())?;
        self.save_frame_to(&path)?;
        self.last_saved = Some(path.clone());

        Ok(path)
    }

    pub fn save_frame_to(&self, path: &Path) -> Result<(), ViewerError> {
        let frame = self.latest.as_ref().ok_or(ViewerError::NoFrame)?;

        self.file_presenter.present(&frame.pixels, path)?;
        info!("saved frame to {}", path.display());

        Ok(())
    }
}
