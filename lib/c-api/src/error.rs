//! The last error raised at the C boundary.
//!
//! A checked export that fails returns `false` and leaves its error in a
//! per-thread slot. C callers size a buffer with
//! [`bridge_last_error_length`] and fetch the text with
//! [`bridge_last_error_message`], which also empties the slot.
//!
//! ```c
//! double out;
//! if (!bridge_wasmtime_val_f64_try_get(&val, &out)) {
//!     char message[256];
//!     if (bridge_last_error_message(message, sizeof message) > 0)
//!         fprintf(stderr, "%s\n", message);
//! }
//! ```

use libc::{c_char, c_int};
use std::cell::RefCell;
use std::fmt::Display;
use std::ptr::NonNull;
use std::slice;

thread_local! {
    static LAST_ERROR: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Records `err` as this thread's last error, replacing any earlier one.
///
/// ```rust
/// # use wasmtime_bridge::error::{take_last_error, update_last_error};
/// update_last_error("tag mismatch");
/// assert_eq!(take_last_error().as_deref(), Some("tag mismatch"));
/// ```
pub fn update_last_error<E: Display>(err: E) {
    let message = err.to_string();
    tracing::debug!(error = %message, "rejected call across the bridge");
    LAST_ERROR.with(|prev| {
        *prev.borrow_mut() = Some(message);
    });
}

/// Takes this thread's last error, leaving the slot empty.
pub fn take_last_error() -> Option<String> {
    LAST_ERROR.with(|prev| prev.borrow_mut().take())
}

/// Size of the buffer needed for the last error, NUL included, or 0 when
/// there is none.
#[unsafe(no_mangle)]
pub extern "C" fn bridge_last_error_length() -> c_int {
    LAST_ERROR.with(|prev| match *prev.borrow() {
        Some(ref err) => c_int::try_from(err.len() + 1).unwrap_or(c_int::MAX),
        None => 0,
    })
}

/// Copies the last error into `buffer` as a NUL-terminated string.
///
/// Returns the number of bytes written, NUL included, and 0 when there is
/// no error. Returns -1 when `buffer` is null, which keeps the error, or
/// when `length` cannot hold the message, which drops it.
///
/// # Safety
///
/// `buffer` must be null or valid for writes of `length` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bridge_last_error_message(
    buffer: Option<NonNull<c_char>>,
    length: c_int,
) -> c_int {
    let Some(buffer) = buffer else {
        return -1;
    };
    let Some(message) = take_last_error() else {
        return 0;
    };

    let length = usize::try_from(length).unwrap_or(0);
    if message.len() >= length {
        return -1;
    }

    // SAFETY: the caller guarantees `buffer` is writable for `length` bytes.
    let buffer = unsafe { slice::from_raw_parts_mut(buffer.cast::<u8>().as_ptr(), length) };
    buffer[..message.len()].copy_from_slice(message.as_bytes());
    buffer[message.len()] = 0;

    c_int::try_from(message.len() + 1).unwrap_or(c_int::MAX)
}
