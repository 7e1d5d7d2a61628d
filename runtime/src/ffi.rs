//! The C ABI that compiled programs link against.
//!
//! Texts returned from here belong to the caller and go back through
//! [`text_free`]. Passing a null pointer where a text is expected aborts the
//! process with a diagnostic.

use std::{
    ffi::CStr,
    os::raw::{c_char, c_int},
    ptr,
};

use crate::{
    error::{self, RuntimeError},
    input, length, output,
    text::Text,
};

/// Borrows the terminated string behind `text` for the duration of a call.
///
/// # Safety
///
/// `text` must be null or point to a terminated string that outlives `'a`.
unsafe fn borrow_text<'a>(operation: &'static str, text: *const c_char) -> &'a CStr {
    if text.is_null() {
        error::abort(RuntimeError::null_text(operation));
    }
    unsafe { CStr::from_ptr(text) }
}

fn hand_over(text: Option<Text>) -> *mut c_char {
    text.map_or(ptr::null_mut(), Text::into_raw)
}

/// Writes `text` to standard output.
///
/// # Safety
///
/// `text` must point to a terminated string.
#[no_mangle]
pub unsafe extern "C" fn print(text: *const c_char) {
    output::print(unsafe { borrow_text("print", text) })
}

/// Writes `text` and a newline to standard output.
///
/// # Safety
///
/// `text` must point to a terminated string.
#[no_mangle]
pub unsafe extern "C" fn println(text: *const c_char) {
    output::println(unsafe { borrow_text("println", text) })
}

/// Writes `text`, `n` in decimal, and a newline.
///
/// # Safety
///
/// `text` must point to a terminated string.
#[no_mangle]
pub unsafe extern "C" fn printn(text: *const c_char, n: c_int) {
    output::print_with_number(unsafe { borrow_text("printn", text) }, i64::from(n))
}

/// Writes `first`, `second`, and a newline.
///
/// # Safety
///
/// Both pointers must point to terminated strings.
#[no_mangle]
pub unsafe extern "C" fn prints(first: *const c_char, second: *const c_char) {
    let first = unsafe { borrow_text("prints", first) };
    let second = unsafe { borrow_text("prints", second) };
    output::print_with_string(first, second)
}

#[no_mangle]
/// Prints the provided integer to the standard output.
pub extern "C" fn print_int(int: c_int) {
    output::print_with_number(c"", i64::from(int))
}

/// Number of bytes before the terminator of `text`.
///
/// # Safety
///
/// `text` must point to a terminated string.
#[no_mangle]
pub unsafe extern "C" fn textlen(text: *const c_char) -> usize {
    length::length(unsafe { borrow_text("textlen", text) })
}

/// Reads a line from standard input, or returns null at the end of input.
#[no_mangle]
pub extern "C" fn linein() -> *mut c_char {
    hand_over(input::read_line())
}

/// Reads one byte from standard input, or returns null at the end of input.
#[no_mangle]
pub extern "C" fn readchar() -> *mut c_char {
    hand_over(input::read_char())
}

/// Releases a text returned by [`linein`] or [`readchar`]. Null is ignored.
///
/// # Safety
///
/// `text` must be null or a pointer returned by this runtime that has not been
/// released yet, and no `0` byte may have been written inside it.
#[no_mangle]
pub unsafe extern "C" fn text_free(text: *mut c_char) {
    if text.is_null() {
        return;
    }
    drop(unsafe { Text::from_raw(text) });
}
