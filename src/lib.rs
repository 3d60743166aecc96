//! Utility helpers for scientific fixed-width file I/O.
//!
//! Three independent, stateless utilities:
//! - [`fileobj_mode`]: detect the canonical open mode of an already-open
//!   file-like handle from its observable capabilities.
//! - [`rstrip_inplace`]: strip trailing whitespace from every element of
//!   a fixed-width string array, mutating its backing storage in place.
//! - [`SigintGuard`] / [`ignore_sigint`] (unix): defer SIGINT delivery
//!   until a critical section completes.

pub mod dtype;
pub mod errors;
pub mod handle;
pub mod mode;
#[cfg(unix)]
pub mod signal;
pub mod strings;
mod test_utils;

pub use dtype::DType;
pub use errors::SciUtilsError;
pub use handle::capabilities::{FileLike, StreamKind};
pub use handle::FileObj;
pub use mode::{fileobj_mode, Mode, ModePrimary};
#[cfg(unix)]
pub use signal::{ignore_sigint, SigintGuard};
pub use strings::{rstrip_inplace, TypedArrayMut};
