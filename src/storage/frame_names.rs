use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const FRAME_PREFIX: &str = "mandelbrot";

/// Hands out unused file names for saved frames inside one directory.
///
/// Names are `mandelbrot-<unix millis>-<sequence>.<ext>`. The sequence
/// increases for every name handed out, and a name that already exists on
/// disk is skipped.
#[derive(Debug)]
pub struct FrameNamer {
    dir: PathBuf,
    sequence: u64,
}

impl FrameNamer {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            sequence: 0,
        }
    }

    /// Creates the directory if needed and returns a path nothing occupies.
    pub fn next_path(&mut self, extension: &str) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();

        loop {
            self.sequence += 1;
            let path = self.dir.join(format!(
                "{}-{}-{:04}.{}",
                FRAME_PREFIX, millis, self.sequence, extension
            ));

            if !path.try_exists()? {
                return Ok(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_directory() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("images");
        let mut namer = FrameNamer::new(&dir);

        let path = namer.next_path("png").unwrap();

        assert!(dir.is_dir());
        assert_eq!(path.parent(), Some(dir.as_path()));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
    }

    #[test]
    fn test_names_do_not_repeat() {
        let root = TempDir::new().unwrap();
        let mut namer = FrameNamer::new(root.path());

        let first = namer.next_path("png").unwrap();
        let second = namer.next_path("png").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_skips_existing_files() {
        let root = TempDir::new().unwrap();
        let mut namer = FrameNamer::new(root.path());
        let mut probe = FrameNamer::new(root.path());

        // the probe hands out sequence 1; occupy it, then the real namer
        // must move past it even within the same millisecond
        let taken = probe.next_path("ppm").unwrap();
        std::fs::write(&taken, b"x").unwrap();

        let path = namer.next_path("ppm").unwrap();

        assert_ne!(path, taken);
        assert!(!path.exists());
    }

    #[test]
    fn test_name_format() {
        let root = TempDir::new().unwrap();
        let mut namer = FrameNamer::new(root.path());

        let path = namer.next_path("png").unwrap();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap();

        assert!(name.starts_with("mandelbrot-"));
        assert!(name.ends_with("-0001.png"));
    }
}
