use crate::codegen::CodegenError;
use std::path::Path;
use std::path::PathBuf;

/// A source file produced by a backend, relative to the output directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedFile {
    pub contents: String,
    pub path: PathBuf,
}
impl GeneratedFile {
    /// Writes the file below `dir`, creating missing directories.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, CodegenError> {
        let path = dir.join(&self.path);
        let io_err = |source| CodegenError::Io {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&path, &self.contents).map_err(io_err)?;
        log::debug!("wrote {}", path.display());
        Ok(path)
    }
}
