//! External command execution utilities.
//!
//! Runs the configured JavaScript runtime with input piped through stdin and
//! output captured.

use std::{
    ffi::OsStr,
    io::{self, Write},
    process::{Command, Output, Stdio},
};

/// Execute a command, feeding `input` to its stdin and capturing output.
///
/// The first element of `cmd` is the program, the rest are leading arguments
/// (so `["npx", "node"]` style invocations work); `args` are appended after.
///
/// # Errors
/// Returns an error if `cmd` is empty, the program cannot be spawned, or any
/// pipe operation fails. A non-zero exit status is not an error here; callers
/// inspect `Output::status` themselves.
pub fn exec_with_stdin<S: AsRef<OsStr>>(
    cmd: &[String],
    args: &[S],
    input: &[u8],
) -> io::Result<Output> {
    let (program, leading) = cmd
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

    let mut child = Command::new(program)
        .args(leading)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // stdin is always piped above, so take() cannot return None
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input)?;
    }

    child.wait_with_output()
}
