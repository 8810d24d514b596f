use std::fs;
use std::io;
use std::path::Path;

/// File-system seam between the aggregator and the working tree.
///
/// The aggregator only ever needs these three operations, so tests swap in
/// an in-memory implementation and never touch disk.
pub trait FileAccess {
    fn exists(&self, path: &Path) -> bool;
    fn read_text(&self, path: &Path) -> io::Result<String>;
    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real thing: std::fs.
pub struct SystemIo;

impl FileAccess for SystemIo {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    }
}
