use std::ffi::CStr;

/// Number of bytes in `text` before its terminator.
pub fn length(text: &CStr) -> usize {
    text.to_bytes().len()
}

/// Number of bytes in `bytes` before the first `0`, or the whole slice if it
/// holds no terminator.
pub fn length_of_bytes(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|&byte| byte == 0)
        .unwrap_or(bytes.len())
}
