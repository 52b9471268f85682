//! Shared test helpers: output constructors, configuration, log capture.

#![allow(dead_code)]

use std::io;
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex};

use tsuru_provision::domain::{DockerConfig, GitConfig, ProvisionConfig, StoreConfig};

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Configuration ────────────────────────────────────────────────────────────

pub const NAMESPACE: &str = "tsuru";
pub const GIT_HOST: &str = "git.example.com";

/// A fully populated configuration.
pub fn config() -> ProvisionConfig {
    ProvisionConfig {
        docker: DockerConfig {
            repository_namespace: Some(NAMESPACE.to_string()),
            ..DockerConfig::default()
        },
        git: GitConfig {
            host: Some(GIT_HOST.to_string()),
            root: Some("/var/repositories".to_string()),
            ..GitConfig::default()
        },
        store: StoreConfig::default(),
    }
}

// ── Log capture ──────────────────────────────────────────────────────────────

/// In-memory sink for `tracing` output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer poisoned")).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route `tracing` events on the current thread into a buffer until the
/// guard drops. `#[tokio::test]` runs on the current thread, so events
/// emitted inside awaited services are captured.
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buf = LogBuffer::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buf, guard)
}
