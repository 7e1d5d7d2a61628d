//! Runs `pseudo-rt` as a child process, so the runtime reads a real standard
//! input and writes a real standard output.

#[cfg(test)]
use std::{
    env,
    io::Write,
    path::PathBuf,
    process::{Command, Output, Stdio},
    sync::OnceLock,
};

#[cfg(test)]
use run_script::{IoOptions, ScriptOptions};

#[cfg(test)]
fn pseudo_rt() -> &'static PathBuf {
    static BINARY: OnceLock<PathBuf> = OnceLock::new();

    BINARY.get_or_init(|| {
        let options = ScriptOptions {
            output_redirection: IoOptions::Inherit,
            ..ScriptOptions::new()
        };
        let args = vec![];
        let (code, _, _) = run_script::run(
            r#"
            (cd ../../cli && cargo build)
            "#,
            &args,
            &options,
        )
        .unwrap();
        assert_eq!(code, 0, "building pseudo-rt failed");

        let mut path = env::var_os("CARGO_TARGET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("../../target"));
        path.push("debug");
        path.push(format!("pseudo-rt{}", env::consts::EXE_SUFFIX));
        path
    })
}

/// Runs `pseudo-rt <mode>` with `stdin` as its entire standard input.
#[cfg(test)]
fn run(mode: &str, stdin: &[u8]) -> Output {
    let mut child = Command::new(pseudo_rt())
        .arg(mode)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start pseudo-rt");

    // dropping the handle closes the pipe, which is the end of input
    child.stdin.take().unwrap().write_all(stdin).unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(
        output.status.success(),
        "pseudo-rt {} failed: {}",
        mode,
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

#[cfg(test)]
fn stdout_of(mode: &str, stdin: &[u8]) -> String {
    String::from_utf8(run(mode, stdin).stdout).unwrap()
}

#[cfg(test)]
#[test]
fn line_terminator_is_stripped() {
    assert_eq!(stdout_of("lines", b"hello\n"), "> hello\nlength: 5\nlines: 1\n");
}

#[cfg(test)]
#[test]
fn blank_line_is_not_end_of_input() {
    assert_eq!(stdout_of("lines", b"\n"), "> \nlength: 0\nlines: 1\n");
}

#[cfg(test)]
#[test]
fn closed_stdin_reads_nothing() {
    assert_eq!(stdout_of("lines", b""), "lines: 0\n");
    assert_eq!(stdout_of("chars", b""), "chars: 0\n");
}

#[cfg(test)]
#[test]
fn crlf_and_unterminated_lines() {
    assert_eq!(
        stdout_of("lines", b"a\r\nbc"),
        "> a\nlength: 1\n> bc\nlength: 2\nlines: 2\n"
    );
}

#[cfg(test)]
#[test]
fn long_line_survives_intact() {
    let mut stdin = vec![b'x'; 100_000];
    stdin.push(b'\n');

    let stdout = stdout_of("lines", &stdin);
    let expected = format!("> {}\nlength: 100000\nlines: 1\n", "x".repeat(100_000));
    assert_eq!(stdout.len(), expected.len());
    assert!(stdout == expected);
}

#[cfg(test)]
#[test]
fn characters_one_byte_at_a_time() {
    assert_eq!(stdout_of("chars", b"ab"), "char: a\nchar: b\nchars: 2\n");
    assert_eq!(stdout_of("chars", b"x\n"), "char: x\nchar: \n\nchars: 2\n");
}

#[cfg(test)]
#[test]
fn header_to_stdout() {
    assert_eq!(stdout_of("header", b""), runtime::symbols::c_header());
}

#[cfg(test)]
#[test]
fn header_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("runtime.h");

    let status = Command::new(pseudo_rt())
        .arg("header")
        .arg(&path)
        .status()
        .unwrap();
    assert!(status.success());

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, runtime::symbols::c_header());
    assert!(written.contains("char* linein(void);"));
}

#[cfg(test)]
#[test]
fn unknown_mode_is_a_usage_error() {
    let output = Command::new(pseudo_rt()).arg("frobnicate").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage: pseudo-rt"));
}

#[cfg(test)]
#[test]
fn print_int_writes_the_number_and_a_newline() {
    assert_eq!(stdout_of_args(&["print-int", "-7"]), "-7\n");
    assert_eq!(stdout_of_args(&["print-int", "42"]), "42\n");
    assert_eq!(stdout_of_args(&["print-int", "-2147483648"]), "-2147483648\n");
}

#[cfg(test)]
fn stdout_of_args(args: &[&str]) -> String {
    let output = Command::new(pseudo_rt()).args(args).output().unwrap();
    assert!(output.status.success(), "pseudo-rt {:?} failed", args);
    String::from_utf8(output.stdout).unwrap()
}

#[cfg(test)]
#[test]
fn null_text_aborts_with_a_diagnostic() {
    let output = Command::new(pseudo_rt()).arg("null-text").output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("runtime error: `println` was called with a null text pointer"),
        "unexpected stderr: {}",
        stderr
    );
}
