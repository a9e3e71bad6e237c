use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    #[default]
    Png,
    Ppm,
}

#[must_use]
pub fn file_presenter_factory(format: FileFormat) -> Box<dyn FilePresenterPort> {
    match format {
        FileFormat::Png => Box::new(PngFilePresenter::new()),
        FileFormat::Ppm => Box::new(PpmFilePresenter::new()),
    }
}
