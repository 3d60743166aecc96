use crate::errors::SciUtilsError;
use crate::handle::capabilities::{FileLike, StreamKind};
use crate::mode::Mode;
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::Path;

/// A read-only memory-mapped view of a local file.
///
/// Mapped handles behave like an already-positioned binary reader: mode
/// detection always reports `rb` for them.
pub struct MappedFile {
    mmap: Mmap,
}

impl MappedFile {
    /// Maps the entire file. The mapping stays valid after the handle to
    /// the underlying file is closed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SciUtilsError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| SciUtilsError::cannot_open(&path.display().to_string(), e))?;
        let mmap = unsafe { MmapOptions::new().map(&file) }
            .map_err(|e| SciUtilsError::cannot_open(&path.display().to_string(), e))?;
        Ok(Self { mmap })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.mmap
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }
}

impl FileLike for MappedFile {
    fn kind(&self) -> StreamKind {
        StreamKind::Mapped
    }

    fn is_readable(&self) -> bool {
        true
    }

    fn is_writable(&self) -> bool {
        false
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn is_binary(&self) -> bool {
        true
    }

    fn is_append(&self) -> bool {
        false
    }

    fn truncates_on_open(&self) -> bool {
        false
    }

    fn created_exclusively(&self) -> bool {
        false
    }

    fn stream_position(&self) -> Option<u64> {
        Some(0)
    }

    fn native_mode(&self) -> Option<Mode> {
        // Inferred from capabilities: readable-only and binary, hence "rb".
        None
    }
}
