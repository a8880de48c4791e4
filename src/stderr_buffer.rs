use std::sync::{Mutex, MutexGuard};

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

// A panic while holding the lock leaves the buffer usable
fn buffer() -> MutexGuard<'static, Option<Vec<String>>> {
    BUFFER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Start holding back stderr output (the TUI owns the terminal).
pub fn activate() {
    *buffer() = Some(Vec::new());
}

/// Stop buffering and return everything collected, oldest first.
pub fn drain() -> Vec<String> {
    buffer().take().unwrap_or_default()
}

/// Write a diagnostic line. Stored while buffering is active, printed to
/// stderr immediately otherwise.
pub fn warn(msg: String) {
    let mut guard = buffer();
    if let Some(buf) = guard.as_mut() {
        buf.push(msg);
    } else {
        drop(guard);
        eprintln!("{}", msg);
    }
}

/// Like `eprintln!`, but routed through the stderr buffer when it is active.
#[macro_export]
macro_rules! buffered_eprintln {
    ($($arg:tt)*) => {
        $crate::stderr_buffer::warn(format!($($arg)*))
    };
}
