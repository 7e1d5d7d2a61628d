//! Reading lines and single characters from standard input.
//!
//! Both reads hand back a freshly allocated [`Text`] owned by the caller, or
//! `None` once the stream has nothing left. An empty [`Text`] is a blank line,
//! never the end of the stream.
//!
//! A read error is not reported as such: it ends the read the same way the end
//! of the stream does, after being logged.

use std::io::{self, BufRead, ErrorKind, StdinLock};

use crate::{
    error::{self, RuntimeError},
    text::Text,
};

/// Capacity the line scratch buffer starts with; it doubles from there.
pub const INITIAL_SCRATCH_CAPACITY: usize = 128;

/// Growable buffer collecting the bytes of one line.
///
/// Capacity grows geometrically and the final [`Text`] is a right-sized copy,
/// so a long line costs one over-sized scratch allocation rather than an
/// over-sized result.
struct Scratch {
    bytes: Vec<u8>,
}

impl Scratch {
    fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    fn extend(&mut self, chunk: &[u8]) {
        let needed = match self.bytes.len().checked_add(chunk.len()) {
            Some(needed) => needed,
            None => error::abort(RuntimeError::out_of_memory(usize::MAX)),
        };

        if needed > self.bytes.capacity() {
            let mut target = self.bytes.capacity().max(INITIAL_SCRATCH_CAPACITY);
            while target < needed {
                target = target.checked_mul(2).unwrap_or(needed);
            }
            if self.bytes.try_reserve_exact(target - self.bytes.len()).is_err() {
                error::abort(RuntimeError::out_of_memory(target));
            }
        }

        self.bytes.extend_from_slice(chunk);
    }

    fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    fn finish(self) -> Text {
        Text::from_content(&self.bytes)
    }
}

/// The input primitives, over an arbitrary buffered reader.
///
/// Bytes a read does not consume stay in the reader, so line and character
/// reads can be mixed freely.
#[derive(Debug)]
pub struct Input<R> {
    inner: R,
}

impl<R: BufRead> Input<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Reads up to the next line terminator (`\n`, `\r\n` or a lone `\r`) or
    /// the end of the stream, and returns the line without its terminator.
    ///
    /// After a `\r` the next byte is looked at to see whether it completes a
    /// `\r\n`, so that read may block until one more byte arrives.
    ///
    /// Returns `None` only if the stream was already exhausted when the read
    /// began; a final line without a terminator is still returned.
    pub fn read_line(&mut self) -> Option<Text> {
        let mut scratch = Scratch::new();
        let mut seen_any = false;
        let mut carriage_return = false;

        loop {
            let available = match self.inner.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::warn!("reading a line failed, treating as end of input: {}", e);
                    break;
                }
            };

            if available.is_empty() {
                break;
            }
            seen_any = true;

            let terminator = available.iter().position(|&b| b == b'\n' || b == b'\r');
            let (consumed, terminated) = match terminator {
                Some(end) => {
                    scratch.extend(&available[..end]);
                    carriage_return = available[end] == b'\r';
                    (end + 1, true)
                }
                None => {
                    scratch.extend(available);
                    (available.len(), false)
                }
            };
            self.inner.consume(consumed);

            if terminated {
                break;
            }
        }

        if !seen_any {
            log::debug!("end of input reached before a line");
            return None;
        }

        if carriage_return {
            self.skip_line_feed();
        }

        log::trace!(
            "read a line of {} bytes (scratch capacity {})",
            scratch.bytes.len(),
            scratch.capacity()
        );
        Some(scratch.finish())
    }

    /// Consumes the `\n` of a `\r\n` pair if it is the next byte.
    fn skip_line_feed(&mut self) {
        let line_feed = loop {
            match self.inner.fill_buf() {
                Ok(available) => break available.first() == Some(&b'\n'),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::warn!("reading after a carriage return failed: {}", e);
                    break false;
                }
            }
        };
        if line_feed {
            self.inner.consume(1);
        }
    }

    /// Consumes exactly one byte and returns it as a one-byte text.
    ///
    /// A `0` byte cannot be held inside a text, so it comes back as an empty
    /// one. Returns `None` at the end of the stream.
    pub fn read_char(&mut self) -> Option<Text> {
        let byte = loop {
            match self.inner.fill_buf() {
                Ok([]) => {
                    log::debug!("end of input reached before a character");
                    return None;
                }
                Ok(available) => break available[0],
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::warn!(
                        "reading a character failed, treating as end of input: {}",
                        e
                    );
                    return None;
                }
            }
        };
        self.inner.consume(1);

        log::trace!("read character {:#04x}", byte);
        Some(Text::from_content(&[byte]))
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

fn stdin() -> Input<StdinLock<'static>> {
    Input::new(io::stdin().lock())
}

/// Reads one line from standard input. See [`Input::read_line`].
///
/// Standard input stays locked for the whole call. Calls made from several
/// threads at once each see contiguous bytes, but which call gets which line
/// is unspecified.
pub fn read_line() -> Option<Text> {
    stdin().read_line()
}

/// Reads one byte from standard input. See [`Input::read_char`].
pub fn read_char() -> Option<Text> {
    stdin().read_char()
}
