pub mod capabilities;
pub mod gzip;
pub mod mapped;
pub mod plain;

use crate::mode::Mode;
use capabilities::{FileLike, StreamKind, UnopenedPath};
use delegate::delegate;
use gzip::GzFile;
use mapped::MappedFile;
use plain::FileHandle;
use std::path::PathBuf;

/// Concrete wrapper over the handle families, delegating capability
/// queries to the matching family.
pub enum FileObj {
    Unopened(UnopenedPath),
    Plain(FileHandle),
    Gzip(GzFile),
    Mapped(MappedFile),
}

impl FileObj {
    /// A path that has not been opened yet.
    pub fn unopened<P: Into<PathBuf>>(path: P) -> Self {
        FileObj::Unopened(UnopenedPath::new(path))
    }
}

impl From<FileHandle> for FileObj {
    fn from(handle: FileHandle) -> Self {
        FileObj::Plain(handle)
    }
}

impl From<GzFile> for FileObj {
    fn from(handle: GzFile) -> Self {
        FileObj::Gzip(handle)
    }
}

impl From<MappedFile> for FileObj {
    fn from(handle: MappedFile) -> Self {
        FileObj::Mapped(handle)
    }
}

impl FileLike for FileObj {
    delegate! {
        to match self {
            FileObj::Unopened(handle) => handle,
            FileObj::Plain(handle) => handle,
            FileObj::Gzip(handle) => handle,
            FileObj::Mapped(handle) => handle,
        } {
            fn kind(&self) -> StreamKind;
            fn is_readable(&self) -> bool;
            fn is_writable(&self) -> bool;
            fn is_seekable(&self) -> bool;
            fn is_binary(&self) -> bool;
            fn is_append(&self) -> bool;
            fn truncates_on_open(&self) -> bool;
            fn created_exclusively(&self) -> bool;
            fn stream_position(&self) -> Option<u64>;
            fn native_mode(&self) -> Option<Mode>;
        }
    }
}
