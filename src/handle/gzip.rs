use crate::errors::SciUtilsError;
use crate::handle::capabilities::{FileLike, StreamKind};
use crate::mode::{Mode, ModePrimary};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::warn;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

enum GzStream {
    Read(GzDecoder<File>),
    Write(GzEncoder<File>),
}

/// A gzip stream over a local file.
///
/// Gzip streams are byte-oriented no matter what the caller asked for and
/// have no read-and-write update modes: `r`, `w`, `a` and `x` only, all
/// reported with a binary suffix. Appending opens the transport at the end
/// and starts a fresh gzip member there.
pub struct GzFile {
    stream: GzStream,
    mode: Mode,
}

impl GzFile {
    pub fn open<P: AsRef<Path>>(path: P, mode: Mode) -> Result<Self, SciUtilsError> {
        if mode.is_update() {
            warn!("rejecting update mode '{}' for a gzip stream", mode);
            return Err(SciUtilsError::UnsupportedMode {
                mode: mode.to_string(),
                stream: "gzip",
            });
        }
        let path = path.as_ref();
        let open_err = |e| SciUtilsError::cannot_open(&path.display().to_string(), e);

        let stream = match mode.primary {
            ModePrimary::Read => GzStream::Read(GzDecoder::new(File::open(path).map_err(open_err)?)),
            ModePrimary::Write => {
                let file = File::create(path).map_err(open_err)?;
                GzStream::Write(GzEncoder::new(file, Compression::default()))
            }
            ModePrimary::Append => {
                let file = OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(path)
                    .map_err(open_err)?;
                GzStream::Write(GzEncoder::new(file, Compression::default()))
            }
            ModePrimary::CreateNew => {
                let file = OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(path)
                    .map_err(open_err)?;
                GzStream::Write(GzEncoder::new(file, Compression::default()))
            }
        };
        Ok(Self {
            stream,
            // A gzip stream is binary regardless of the requested flag.
            mode: mode.as_binary(),
        })
    }

    /// Flushes and finishes the gzip member for write streams.
    pub fn finish(self) -> io::Result<()> {
        match self.stream {
            GzStream::Read(_) => Ok(()),
            GzStream::Write(encoder) => encoder.finish().map(|_| ()),
        }
    }
}

impl FileLike for GzFile {
    fn kind(&self) -> StreamKind {
        StreamKind::Compressed
    }

    fn is_readable(&self) -> bool {
        matches!(self.stream, GzStream::Read(_))
    }

    fn is_writable(&self) -> bool {
        matches!(self.stream, GzStream::Write(_))
    }

    fn is_seekable(&self) -> bool {
        // Compressed streams only move forward.
        false
    }

    fn is_binary(&self) -> bool {
        true
    }

    fn is_append(&self) -> bool {
        self.mode.primary == ModePrimary::Append
    }

    fn truncates_on_open(&self) -> bool {
        self.mode.primary == ModePrimary::Write
    }

    fn created_exclusively(&self) -> bool {
        self.mode.primary == ModePrimary::CreateNew
    }

    fn stream_position(&self) -> Option<u64> {
        None
    }

    fn native_mode(&self) -> Option<Mode> {
        Some(self.mode)
    }
}

impl Read for GzFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.stream {
            GzStream::Read(decoder) => decoder.read(buf),
            GzStream::Write(_) => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "gzip stream is write-only",
            )),
        }
    }
}

impl Write for GzFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.stream {
            GzStream::Write(encoder) => encoder.write(buf),
            GzStream::Read(_) => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "gzip stream is read-only",
            )),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.stream {
            GzStream::Write(encoder) => encoder.flush(),
            GzStream::Read(_) => Ok(()),
        }
    }
}
