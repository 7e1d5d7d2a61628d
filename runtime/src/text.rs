//! Owned, null-terminated text buffers.
//!
//! Every input operation hands its result over as a [`Text`]. The allocation
//! holds the content followed by a single `0` byte and nothing else, and it
//! belongs to whoever received it: Rust code drops it, C code passes it back to
//! `text_free`.

use std::{
    ffi::{CStr, CString},
    fmt,
    ops::Deref,
    os::raw::c_char,
};

use crate::error::{self, RuntimeError};

/// A uniquely owned, null-terminated byte string.
///
/// The content never contains a `0` byte, so the length seen through the C
/// view (scanning for the terminator) always matches [`Text::len`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text {
    inner: CString,
}

impl Text {
    /// Copies `content` into a new allocation of exactly `content.len() + 1`
    /// bytes.
    ///
    /// Content after the first `0` byte is dropped, since it could never be
    /// observed through the terminated form.
    pub fn from_content(content: &[u8]) -> Self {
        let content = match content.iter().position(|&byte| byte == 0) {
            Some(nul) => &content[..nul],
            None => content,
        };

        let size = content.len() + 1;
        let mut bytes = Vec::new();
        if bytes.try_reserve_exact(size).is_err() {
            error::abort(RuntimeError::out_of_memory(size));
        }
        bytes.extend_from_slice(content);
        bytes.push(0);

        // the content was cut at its first `0` and exactly one `0` follows it
        let inner = CString::from_vec_with_nul(bytes).expect("text content holds no `0`");

        Self { inner }
    }

    /// An empty text, i.e. an allocation holding only the terminator.
    pub fn empty() -> Self {
        Self::from_content(&[])
    }

    /// Number of bytes before the terminator.
    pub fn len(&self) -> usize {
        self.inner.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The content, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    /// The content followed by the terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.inner.as_bytes_with_nul()
    }

    pub fn as_c_str(&self) -> &CStr {
        self.inner.as_c_str()
    }

    /// Gives up ownership of the content, without the terminator.
    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_bytes()
    }

    /// Transfers ownership of the allocation to C.
    ///
    /// The pointer must come back through [`Text::from_raw`] (which is what
    /// `text_free` does) to be released.
    pub fn into_raw(self) -> *mut c_char {
        self.inner.into_raw()
    }

    /// Takes back ownership of a pointer produced by [`Text::into_raw`].
    ///
    /// # Safety
    ///
    /// `raw` must have been returned by [`Text::into_raw`], must not have been
    /// reclaimed already, and its length must not have been changed by writing
    /// a `0` inside the content.
    pub unsafe fn from_raw(raw: *mut c_char) -> Self {
        Self {
            inner: unsafe { CString::from_raw(raw) },
        }
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for Text {
    type Target = CStr;

    fn deref(&self) -> &Self::Target {
        self.as_c_str()
    }
}

impl AsRef<CStr> for Text {
    fn as_ref(&self) -> &CStr {
        self.as_c_str()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
