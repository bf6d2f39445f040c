//! Filesystem infrastructure — implements `FileProbe`.

use std::path::Path;

use crate::application::ports::FileProbe;

/// Production filesystem implementation of `FileProbe`.
pub struct LocalFs;

impl FileProbe for LocalFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
