//! `pseudo-rt`: tooling around the runtime.
//!
//! `header` writes the C header for the runtime's exports. `lines` and `chars`
//! drive the exported C functions against this process's real standard
//! streams, the same way a compiled program would call them.

use std::{
    env, fs,
    os::raw::{c_char, c_int},
    process, ptr,
};

use runtime::{
    ffi::{linein, print_int, println, printn, prints, readchar, text_free, textlen},
    symbols,
};

const USAGE: &str = "\
usage: pseudo-rt header [PATH]   write the C header to PATH (or standard output)
       pseudo-rt lines           echo each line of standard input with its length
       pseudo-rt chars           echo each byte of standard input
       pseudo-rt print-int N     print the integer N";

fn main() {
    let args = env::args().collect::<Vec<_>>();

    match args.get(1).map(String::as_str) {
        Some("header") => header(args.get(2)),
        Some("lines") => lines(),
        Some("chars") => chars(),
        Some("print-int") => print_number(args.get(2)),
        // not in the usage text: passes a null text to the runtime, which aborts
        Some("null-text") => unsafe { println(ptr::null()) },
        _ => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    }
}

fn header(path: Option<&String>) {
    let header = symbols::c_header();

    match path {
        Some(path) => {
            if let Err(e) = fs::write(path, header) {
                eprintln!("could not write the header to `{}`: {}", path, e);
                process::exit(1);
            }
            log::debug!("wrote the runtime header to {}", path);
        }
        None => runtime::print(&runtime::Text::from_content(header.as_bytes())),
    }
}

fn print_number(arg: Option<&String>) {
    match arg.and_then(|arg| arg.parse::<c_int>().ok()) {
        Some(n) => print_int(n),
        None => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    }
}

/// Clamps a byte count to what `printn` can show.
fn as_c_int(len: usize) -> c_int {
    c_int::try_from(len).unwrap_or(c_int::MAX)
}

/// Calls `read` until it returns null, handing each text to `each` and then
/// releasing it. Returns how many texts were read.
fn drain(read: extern "C" fn() -> *mut c_char, each: impl Fn(*const c_char)) -> c_int {
    let mut count = 0;
    loop {
        let text = read();
        if text.is_null() {
            return count;
        }
        each(text);
        unsafe { text_free(text) };
        count += 1;
    }
}

fn lines() {
    let count = drain(linein, |line| unsafe {
        prints(c"> ".as_ptr(), line);
        printn(c"length: ".as_ptr(), as_c_int(textlen(line)));
    });
    unsafe { printn(c"lines: ".as_ptr(), count) };
}

fn chars() {
    let count = drain(readchar, |c| unsafe {
        prints(c"char: ".as_ptr(), c);
    });
    unsafe { printn(c"chars: ".as_ptr(), count) };
}
