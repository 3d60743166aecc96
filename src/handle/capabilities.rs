use crate::mode::Mode;
use std::path::PathBuf;

/// Type tag for the handle families understood by mode detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// A bare path, no resource has been opened yet.
    Unopened,
    /// A plain local file.
    Plain,
    /// A compressed stream over some transport (gzip-style).
    Compressed,
    /// A read-only memory-mapped view.
    Mapped,
}

/// Capability interface over heterogeneous file-like handles.
///
/// Mode detection only ever inspects these observable flags, never the
/// internals of a concrete handle. Each handle family fills them in from
/// what it knows: recorded open flags where available, descriptor probing
/// otherwise.
pub trait FileLike {
    fn kind(&self) -> StreamKind;

    fn is_readable(&self) -> bool;
    fn is_writable(&self) -> bool;
    fn is_seekable(&self) -> bool;

    /// Byte-oriented rather than decoded-text I/O.
    fn is_binary(&self) -> bool;

    /// Positioned at the end without truncation on open.
    fn is_append(&self) -> bool;

    fn truncates_on_open(&self) -> bool;

    /// The open required the name to not exist yet.
    fn created_exclusively(&self) -> bool;

    /// Current stream position, if the handle can tell.
    fn stream_position(&self) -> Option<u64>;

    /// The mode the handle itself advertises, if any.
    fn native_mode(&self) -> Option<Mode>;
}

/// A path that has not been opened. Every capability is absent, so mode
/// detection reports `None` and leaves opening to the caller.
#[derive(Debug, Clone)]
pub struct UnopenedPath(PathBuf);

impl UnopenedPath {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self(path.into())
    }
}

impl FileLike for UnopenedPath {
    fn kind(&self) -> StreamKind {
        StreamKind::Unopened
    }

    fn is_readable(&self) -> bool {
        false
    }

    fn is_writable(&self) -> bool {
        false
    }

    fn is_seekable(&self) -> bool {
        false
    }

    fn is_binary(&self) -> bool {
        false
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
        None
    }

    fn native_mode(&self) -> Option<Mode> {
        None
    }
}
