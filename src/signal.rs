use crate::errors::SciUtilsError;
use log::debug;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

static GUARD_ACTIVE: AtomicBool = AtomicBool::new(false);
static PENDING: AtomicUsize = AtomicUsize::new(0);

const DEFERRED_WARNING: &[u8] = b"SIGINT ignored until the guarded section is complete!\n";

extern "C" fn deferred_handler(_signum: libc::c_int) {
    PENDING.fetch_add(1, Ordering::SeqCst);
    // Only async-signal-safe calls are allowed here: a raw write(2) of
    // the warning line, nothing that allocates or locks.
    unsafe {
        libc::write(
            libc::STDERR_FILENO,
            DEFERRED_WARNING.as_ptr() as *const libc::c_void,
            DEFERRED_WARNING.len(),
        );
    }
}

/// Scoped suppression of SIGINT.
///
/// While the guard is alive, interrupts are queued instead of delivered:
/// each occurrence bumps a counter and writes one warning line to stderr.
/// Dropping the guard restores the previous signal disposition and, if
/// any interrupt was queued, re-raises SIGINT exactly once so the prior
/// disposition handles it. The drop runs on every exit path, including
/// unwinding, so the interrupt is delayed but never swallowed.
///
/// The disposition is process-wide state, so at most one guard can be
/// active at a time.
pub struct SigintGuard {
    prev: libc::sigaction,
}

impl SigintGuard {
    pub fn install() -> Result<Self, SciUtilsError> {
        if GUARD_ACTIVE.swap(true, Ordering::SeqCst) {
            return Err(SciUtilsError::GuardAlreadyActive);
        }
        PENDING.store(0, Ordering::SeqCst);

        let mut action: libc::sigaction = unsafe { std::mem::zeroed() };
        action.sa_sigaction = deferred_handler as libc::sighandler_t;
        unsafe { libc::sigemptyset(&mut action.sa_mask) };
        action.sa_flags = 0;

        let mut prev: libc::sigaction = unsafe { std::mem::zeroed() };
        let rc = unsafe { libc::sigaction(libc::SIGINT, &action, &mut prev) };
        if rc != 0 {
            GUARD_ACTIVE.store(false, Ordering::SeqCst);
            let e = std::io::Error::last_os_error();
            return Err(SciUtilsError::SignalHandler {
                errno: e.raw_os_error().unwrap_or(0),
                error: e.to_string(),
            });
        }
        Ok(Self { prev })
    }

    /// Interrupts queued since the guard was installed.
    pub fn pending(&self) -> usize {
        PENDING.load(Ordering::SeqCst)
    }
}

impl Drop for SigintGuard {
    fn drop(&mut self) {
        // Restore the previous disposition first so the queued interrupt
        // is handled by it, then deliver it exactly once.
        unsafe {
            libc::sigaction(libc::SIGINT, &self.prev, std::ptr::null_mut());
        }
        let queued = PENDING.swap(0, Ordering::SeqCst);
        GUARD_ACTIVE.store(false, Ordering::SeqCst);
        if queued > 0 {
            debug!("re-delivering SIGINT after {} deferred occurrences", queued);
            unsafe {
                libc::raise(libc::SIGINT);
            }
        }
    }
}

/// Runs a closure with SIGINT deferred for its duration.
pub fn ignore_sigint<T, F: FnOnce() -> T>(f: F) -> Result<T, SciUtilsError> {
    let guard = SigintGuard::install()?;
    let result = f();
    drop(guard);
    Ok(result)
}
