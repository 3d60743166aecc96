use crate::errors::SciUtilsError;
use crate::handle::capabilities::{FileLike, StreamKind};
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Primary open intent of a file mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModePrimary {
    Read,
    Write,
    Append,
    CreateNew,
}

impl ModePrimary {
    fn letter(&self) -> char {
        match self {
            ModePrimary::Read => 'r',
            ModePrimary::Write => 'w',
            ModePrimary::Append => 'a',
            ModePrimary::CreateNew => 'x',
        }
    }
}

/// A canonical file open mode: primary letter, binary indicator and the
/// read-and-write `+` qualifier. `Display` always renders the binary
/// indicator directly after the primary letter and before `+`, so a
/// caller-supplied permutation like `"a+b"` round-trips to `"ab+"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub primary: ModePrimary,
    pub binary: bool,
    pub update: bool,
}

impl Mode {
    pub fn is_binary(&self) -> bool {
        self.binary
    }

    pub fn is_update(&self) -> bool {
        self.update
    }

    /// Whether this mode allows reading the stream.
    pub fn allows_read(&self) -> bool {
        self.update || self.primary == ModePrimary::Read
    }

    /// Whether this mode allows writing the stream.
    pub fn allows_write(&self) -> bool {
        self.update || self.primary != ModePrimary::Read
    }

    /// The same mode with the binary indicator forced on. Compressed
    /// streams report their mode this way, see [`fileobj_mode`].
    pub fn as_binary(&self) -> Self {
        Self {
            binary: true,
            ..*self
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary.letter())?;
        if self.binary {
            write!(f, "b")?;
        }
        if self.update {
            write!(f, "+")?;
        }
        Ok(())
    }
}

impl FromStr for Mode {
    type Err = SciUtilsError;

    /// Parses a mode string in any letter order. Exactly one primary letter
    /// is required; `b`/`t` and `+` may each appear once.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SciUtilsError::InvalidMode(s.to_string());

        let mut primary = None;
        let mut binary = false;
        let mut text = false;
        let mut update = false;
        for c in s.chars() {
            let slot_taken = match c {
                'r' => primary.replace(ModePrimary::Read).is_some(),
                'w' => primary.replace(ModePrimary::Write).is_some(),
                'a' => primary.replace(ModePrimary::Append).is_some(),
                'x' => primary.replace(ModePrimary::CreateNew).is_some(),
                'b' => std::mem::replace(&mut binary, true),
                't' => std::mem::replace(&mut text, true),
                '+' => std::mem::replace(&mut update, true),
                _ => return Err(invalid()),
            };
            if slot_taken {
                return Err(invalid());
            }
        }
        if binary && text {
            return Err(invalid());
        }
        Ok(Mode {
            primary: primary.ok_or_else(invalid)?,
            binary,
            update,
        })
    }
}

/// Determines the canonical mode of an already-open file-like handle.
///
/// Returns `None` for handles that are not yet open (a bare path) and for
/// handles whose capabilities do not determine a mode. Handles that
/// advertise their own mode get it back normalized; everything else is
/// inferred from capability flags. This never errors: absence of
/// information is `None`, not a failure.
pub fn fileobj_mode<F: FileLike + ?Sized>(obj: &F) -> Option<Mode> {
    if obj.kind() == StreamKind::Unopened {
        return None;
    }
    let mode = match obj.native_mode() {
        Some(mode) => mode,
        None => {
            debug!("handle advertises no mode, inferring from capability flags");
            infer_mode(obj)?
        }
    };
    match obj.kind() {
        // Compressed wrappers are byte streams no matter how the
        // underlying transport was opened; there is no text append.
        StreamKind::Compressed => Some(mode.as_binary()),
        _ => Some(mode),
    }
}

/// Infers a mode purely from observable capability flags.
fn infer_mode<F: FileLike + ?Sized>(obj: &F) -> Option<Mode> {
    let readable = obj.is_readable();
    let writable = obj.is_writable();

    let primary = if writable && obj.created_exclusively() {
        ModePrimary::CreateNew
    } else if writable && obj.is_append() {
        ModePrimary::Append
    } else if writable && (obj.truncates_on_open() || !readable) {
        // Positioned at start with truncation semantics, or a write-only
        // descriptor without append semantics.
        ModePrimary::Write
    } else if readable {
        // Read-write handles without observable truncation read as "r+":
        // whether the open truncated cannot be recovered afterwards.
        ModePrimary::Read
    } else {
        return None;
    };

    Some(Mode {
        primary,
        binary: obj.is_binary(),
        update: readable && writable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Mode {
        s.parse().unwrap()
    }

    #[test]
    fn canonical_modes_round_trip() {
        for s in [
            "r", "rb", "r+", "rb+", "w", "wb", "w+", "wb+", "a", "ab", "a+", "ab+", "x", "xb",
            "x+", "xb+",
        ] {
            assert_eq!(parse(s).to_string(), s);
        }
    }

    #[test]
    fn permuted_letters_are_normalized() {
        assert_eq!(parse("a+b").to_string(), "ab+");
        assert_eq!(parse("+ab").to_string(), "ab+");
        assert_eq!(parse("br").to_string(), "rb");
        assert_eq!(parse("+r").to_string(), "r+");
    }

    #[test]
    fn explicit_text_indicator() {
        assert_eq!(parse("rt").to_string(), "r");
        assert_eq!(parse("wt+").to_string(), "w+");
    }

    #[test]
    fn invalid_modes_are_rejected() {
        for s in ["", "z", "rw", "rbb", "r++", "rbt", "aa", "r b"] {
            assert!(s.parse::<Mode>().is_err(), "mode {:?} should be invalid", s);
        }
    }

    #[test]
    fn read_write_capabilities() {
        assert!(parse("r").allows_read());
        assert!(!parse("r").allows_write());
        assert!(parse("r+").allows_write());
        assert!(parse("wb").allows_write());
        assert!(!parse("wb").allows_read());
        assert!(parse("ab+").allows_read());
    }
}
