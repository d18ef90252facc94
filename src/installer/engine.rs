//! Engine smoke test
//!
//! Starts the engine, sends `uci` and waits for `uciok`. Engine output is
//! read on a separate thread and forwarded over a channel so the wait can be
//! bounded with `recv_timeout`; a hung engine is killed rather than waited on.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, RecvTimeoutError};

use super::error::{InstallError, InstallResult};
use super::log::SetupLog;

pub const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(5);

pub trait EngineCheck {
    /// Returns the engine's reported name on success
    fn check(&self, path: &Path, log: &mut SetupLog) -> InstallResult<String>;
}

/// Real UCI handshake against a spawned process
pub struct UciHandshake {
    pub timeout: Duration,
}

impl Default for UciHandshake {
    fn default() -> Self {
        Self {
            timeout: HANDSHAKE_TIMEOUT,
        }
    }
}

impl EngineCheck for UciHandshake {
    fn check(&self, path: &Path, log: &mut SetupLog) -> InstallResult<String> {
        let fail = |reason: String| InstallError::Engine {
            path: path.to_path_buf(),
            reason,
        };

        let mut child = Command::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| fail(format!("could not start process: {e}")))?;

        let result = handshake(&mut child, self.timeout, log).map_err(fail);
        shutdown(&mut child);
        result
    }
}

fn handshake(child: &mut Child, timeout: Duration, log: &mut SetupLog) -> Result<String, String> {
    let stdout = child.stdout.take().ok_or("no stdout handle")?;
    let mut stdin = child.stdin.take().ok_or("no stdin handle")?;

    let (tx, rx) = bounded::<String>(64);
    thread::spawn(move || {
        for line in BufReader::new(stdout).lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    writeln!(stdin, "uci").map_err(|e| format!("could not write to engine: {e}"))?;
    stdin.flush().map_err(|e| format!("could not write to engine: {e}"))?;

    let deadline = Instant::now() + timeout;
    let mut name = None;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(line) => {
                let line = line.trim();
                if let Some(id) = line.strip_prefix("id name ") {
                    name = Some(id.to_string());
                }
                if line == "uciok" {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                return Err(format!("no 'uciok' within {}s", timeout.as_secs()));
            }
            Err(RecvTimeoutError::Disconnected) => {
                return Err("engine exited before 'uciok'".to_string());
            }
        }
    }

    // The engine may already be gone; a failed quit is not an error
    let _ = writeln!(stdin, "quit");
    let _ = stdin.flush();
    let name = name.unwrap_or_else(|| "unknown engine".to_string());
    log.info(format!("Engine answered: {name}"));
    Ok(name)
}

fn shutdown(child: &mut Child) {
    let deadline = Instant::now() + Duration::from_secs(1);
    while Instant::now() < deadline {
        if let Ok(Some(_)) = child.try_wait() {
            return;
        }
        thread::sleep(Duration::from_millis(20));
    }
    let _ = child.kill();
    let _ = child.wait();
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    fn script(body: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(format!("chessdesk-engine-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("engine.sh");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        (dir, path)
    }

    #[test]
    fn test_handshake_succeeds() {
        let (dir, path) = script(
            "read cmd\necho 'id name Fake 1.0'\necho 'uciok'\nread cmd\nexit 0",
        );
        let mut log = SetupLog::new();
        let name = UciHandshake::default().check(&path, &mut log).unwrap();
        assert_eq!(name, "Fake 1.0");
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_silent_engine_times_out() {
        let (dir, path) = script("sleep 10");
        let mut log = SetupLog::new();
        let check = UciHandshake {
            timeout: Duration::from_millis(300),
        };
        let err = check.check(&path, &mut log).unwrap_err();
        assert!(matches!(err, InstallError::Engine { .. }));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_binary_fails() {
        let mut log = SetupLog::new();
        let err = UciHandshake::default()
            .check(Path::new("/nonexistent/engine"), &mut log)
            .unwrap_err();
        assert!(err.to_string().contains("could not start process"));
    }
}
