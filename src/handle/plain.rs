use crate::errors::SciUtilsError;
use crate::handle::capabilities::{FileLike, StreamKind};
use crate::mode::{Mode, ModePrimary};
use delegate::delegate;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
#[cfg(unix)]
use std::os::unix::io::AsRawFd;
use std::path::Path;

/// A plain local file.
///
/// When opened through [`FileHandle::open`] the mode is recorded and
/// detection can hand it back directly. Handles adopted from an already
/// open [`File`] carry no recorded mode; their capabilities are probed
/// from the descriptor instead.
pub struct FileHandle {
    file: File,
    mode: Option<Mode>,
}

impl FileHandle {
    pub fn open<P: AsRef<Path>>(path: P, mode: Mode) -> Result<Self, SciUtilsError> {
        let path = path.as_ref();
        let mut opts = OpenOptions::new();
        match mode.primary {
            ModePrimary::Read => {
                opts.read(true);
            }
            ModePrimary::Write => {
                opts.write(true).create(true).truncate(true);
            }
            ModePrimary::Append => {
                opts.append(true).create(true);
            }
            ModePrimary::CreateNew => {
                opts.write(true).create_new(true);
            }
        }
        if mode.is_update() {
            opts.read(true);
            if mode.primary == ModePrimary::Read {
                opts.write(true);
            }
        }
        let file = opts
            .open(path)
            .map_err(|e| SciUtilsError::cannot_open(&path.display().to_string(), e))?;
        Ok(Self {
            file,
            mode: Some(mode),
        })
    }

    /// Adopts a file opened elsewhere, with no recorded mode.
    pub fn from_raw(file: File) -> Self {
        Self { file, mode: None }
    }

    /// Descriptor status flags via `fcntl(F_GETFL)`.
    #[cfg(unix)]
    fn status_flags(&self) -> Option<libc::c_int> {
        let flags = unsafe { libc::fcntl(self.file.as_raw_fd(), libc::F_GETFL) };
        (flags != -1).then_some(flags)
    }

    #[cfg(not(unix))]
    fn status_flags(&self) -> Option<i32> {
        None
    }

    #[cfg(unix)]
    fn probe_position(&self) -> Option<u64> {
        let off = unsafe { libc::lseek(self.file.as_raw_fd(), 0, libc::SEEK_CUR) };
        (off >= 0).then_some(off as u64)
    }

    #[cfg(not(unix))]
    fn probe_position(&self) -> Option<u64> {
        None
    }
}

impl FileLike for FileHandle {
    fn kind(&self) -> StreamKind {
        StreamKind::Plain
    }

    fn is_readable(&self) -> bool {
        match self.mode {
            Some(mode) => mode.allows_read(),
            #[cfg(unix)]
            None => self.status_flags().is_some_and(|flags| {
                let acc = flags & libc::O_ACCMODE;
                acc == libc::O_RDONLY || acc == libc::O_RDWR
            }),
            #[cfg(not(unix))]
            None => false,
        }
    }

    fn is_writable(&self) -> bool {
        match self.mode {
            Some(mode) => mode.allows_write(),
            #[cfg(unix)]
            None => self.status_flags().is_some_and(|flags| {
                let acc = flags & libc::O_ACCMODE;
                acc == libc::O_WRONLY || acc == libc::O_RDWR
            }),
            #[cfg(not(unix))]
            None => false,
        }
    }

    fn is_seekable(&self) -> bool {
        self.probe_position().is_some()
    }

    fn is_binary(&self) -> bool {
        // Adopted descriptors are byte streams; only a recorded mode can
        // ask for decoded text.
        self.mode.map(|m| m.is_binary()).unwrap_or(true)
    }

    fn is_append(&self) -> bool {
        match self.mode {
            Some(mode) => mode.primary == ModePrimary::Append,
            #[cfg(unix)]
            None => self
                .status_flags()
                .is_some_and(|flags| flags & libc::O_APPEND != 0),
            #[cfg(not(unix))]
            None => false,
        }
    }

    fn truncates_on_open(&self) -> bool {
        self.mode
            .map(|m| m.primary == ModePrimary::Write)
            .unwrap_or(false)
    }

    fn created_exclusively(&self) -> bool {
        self.mode
            .map(|m| m.primary == ModePrimary::CreateNew)
            .unwrap_or(false)
    }

    fn stream_position(&self) -> Option<u64> {
        self.probe_position()
    }

    fn native_mode(&self) -> Option<Mode> {
        self.mode
    }
}

impl Read for FileHandle {
    delegate! {
        to self.file {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
        }
    }
}

impl Write for FileHandle {
    delegate! {
        to self.file {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
            fn flush(&mut self) -> io::Result<()>;
        }
    }
}

impl Seek for FileHandle {
    delegate! {
        to self.file {
            fn seek(&mut self, pos: SeekFrom) -> io::Result<u64>;
        }
    }
}
