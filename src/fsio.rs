/// Raw cgroupfs file primitives
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Read a whole file. A missing or unreadable file reads as empty text.
pub fn read_file(path: &Path) -> String {
    debug!("Reading from the file '{}'", path.display());
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("Could not read '{}': {}", path.display(), e);
            String::new()
        }
    }
}

/// Replace the file content with `content`.
///
/// The file must already exist: cgroupfs control files are created by the
/// kernel and writing never creates new ones.
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    debug!("Writing to the file '{}'", path.display());
    let mut file = OpenOptions::new().write(true).truncate(true).open(path)?;
    file.write_all(content.as_bytes())?;
    debug!("'{}' has been successfully written", path.display());
    Ok(())
}

/// Append `content` with a single write. The handle is dropped on return.
pub fn append_file(path: &Path, content: &str) -> io::Result<()> {
    debug!("Appending to the file '{}'", path.display());
    let mut file = OpenOptions::new().append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    debug!("'{}' has been successfully written", path.display());
    Ok(())
}
