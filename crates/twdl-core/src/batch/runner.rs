//! Process runner: the seam between the batch loop and real child processes.

use crate::outcome::ToolOutcome;
use crate::tools::ToolError;
use std::ffi::{OsStr, OsString};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Command, Stdio};

/// Runs one external tool invocation to completion.
///
/// The batch loop only depends on this trait, so tests can script outcomes
/// without spawning anything.
pub trait ToolRunner {
    fn run(&self, program: &Path, args: &[OsString], env_path: &OsStr)
        -> Result<ToolOutcome, ToolError>;
}

/// Spawns the tool with stdout inherited (live progress) and stderr streamed
/// to the terminal while also being captured for classification.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(
        &self,
        program: &Path,
        args: &[OsString],
        env_path: &OsStr,
    ) -> Result<ToolOutcome, ToolError> {
        let tool = tool_name(program);
        tracing::debug!(program = %program.display(), ?args, "spawning tool");

        let mut child = Command::new(program)
            .args(args)
            .env("PATH", env_path)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ToolError::Spawn {
                tool: tool.clone(),
                source,
            })?;

        let captured = match child.stderr.take() {
            Some(stderr) => match tee_lines(BufReader::new(stderr), std::io::stderr()) {
                Ok(text) => text,
                Err(source) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ToolError::Io { tool, source });
                }
            },
            None => String::new(),
        };

        let status = child.wait().map_err(|source| ToolError::Io {
            tool: tool.clone(),
            source,
        })?;
        tracing::debug!(tool = %tool, code = ?status.code(), "tool exited");

        Ok(ToolOutcome {
            exit_code: status.code(),
            stderr: captured,
        })
    }
}

/// Copies `reader` to `out` line by line and returns everything read.
fn tee_lines<R: BufRead, W: Write>(mut reader: R, mut out: W) -> std::io::Result<String> {
    let mut captured = String::new();
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(captured);
        }
        let _ = out.write_all(&line);
        captured.push_str(&String::from_utf8_lossy(&line));
    }
}

/// File name of the program for messages (`/usr/bin/yt-dlp` → `yt-dlp`).
pub(crate) fn tool_name(program: &Path) -> String {
    program
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| program.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_name_is_file_name() {
        assert_eq!(tool_name(Path::new("/usr/local/bin/yt-dlp")), "yt-dlp");
        assert_eq!(tool_name(Path::new("gallery-dl")), "gallery-dl");
    }

    /// Yields one line, then fails.
    struct BrokenPipe {
        served: bool,
    }

    impl std::io::Read for BrokenPipe {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.served {
                return Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"));
            }
            self.served = true;
            let line = b"partial\n";
            buf[..line.len()].copy_from_slice(line);
            Ok(line.len())
        }
    }

    #[test]
    fn tee_lines_copies_and_captures() {
        let mut out = Vec::new();
        let text = tee_lines(&b"one\ntwo"[..], &mut out).unwrap();
        assert_eq!(text, "one\ntwo");
        assert_eq!(out, b"one\ntwo");
    }

    #[test]
    fn tee_lines_propagates_read_errors() {
        let mut out = Vec::new();
        let err = tee_lines(BufReader::new(BrokenPipe { served: false }), &mut out).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
        assert_eq!(out, b"partial\n");
    }

    #[test]
    fn spawn_failure_is_reported() {
        let err = ProcessRunner
            .run(
                Path::new("/nonexistent/twdl-test-tool"),
                &[],
                OsStr::new(""),
            )
            .unwrap_err();
        assert!(matches!(err, ToolError::Spawn { ref tool, .. } if tool == "twdl-test-tool"));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stderr_and_exit_code() {
        use std::os::unix::fs::PermissionsExt;
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-tool");
        std::fs::write(&script, "#!/bin/sh\necho \"ERROR: $1\" >&2\nexit 3\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let path = std::env::var_os("PATH").unwrap_or_default();
        let outcome = ProcessRunner
            .run(&script, &[OsString::from("boom")], &path)
            .unwrap();
        assert_eq!(outcome.exit_code, Some(3));
        assert_eq!(outcome.stderr, "ERROR: boom\n");
    }
}
