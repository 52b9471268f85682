//! Shared mock infrastructure for unit tests.
//!
//! A recording `CommandRunner`, fake units and in-memory container stores,
//! so each test file doesn't have to re-define the same boilerplate.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::process::Output;
use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};
use tsuru_provision::application::ports::{CommandRunner, ContainerStore, Unit};
use tsuru_provision::domain::ContainerRecord;
use tsuru_provision::infra::docker::DockerRuntime;

use crate::helpers::{err_output, ok_output};

// ── MockCommandRunner ────────────────────────────────────────────────────────

type Call = (String, Vec<String>);

/// A `CommandRunner` that records every `(program, args)` call and returns a
/// configurable canned result.
///
/// Thread-safe via `Arc<Mutex<…>>` so clones share the same call log.
#[derive(Clone)]
pub struct MockCommandRunner {
    calls: Arc<Mutex<Vec<Call>>>,
    result: Arc<dyn Fn() -> Result<Output> + Send + Sync>,
}

impl MockCommandRunner {
    /// Exit 0 with the given stdout.
    pub fn new_ok(stdout: &'static [u8]) -> Self {
        Self::with(move || Ok(ok_output(stdout)))
    }

    /// Exit `code` with the given stderr.
    pub fn new_exit(code: i32, stderr: &'static [u8]) -> Self {
        Self::with(move || Ok(err_output(code, stderr)))
    }

    /// Fail before the process runs (spawn error, timeout).
    pub fn new_err(msg: &'static str) -> Self {
        Self::with(move || bail!("{msg}"))
    }

    fn with(result: impl Fn() -> Result<Output> + Send + Sync + 'static) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            result: Arc::new(result),
        }
    }

    /// Return a snapshot of all recorded calls.
    pub fn recorded_calls(&self) -> Vec<Call> {
        self.calls.lock().expect("mutex poisoned").clone()
    }

    /// Whether exactly `program args...` was run.
    pub fn ran(&self, program: &str, args: &[&str]) -> bool {
        self.recorded_calls()
            .iter()
            .any(|(p, a)| p == program && a.iter().map(String::as_str).eq(args.iter().copied()))
    }
}

impl CommandRunner for MockCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.calls.lock().expect("mutex poisoned").push((
            program.to_owned(),
            args.iter().map(|s| (*s).to_string()).collect(),
        ));
        (self.result)()
    }
}

/// A `DockerRuntime` over `mock`; the mock keeps the shared call log.
pub fn docker(mock: &MockCommandRunner) -> DockerRuntime<MockCommandRunner> {
    DockerRuntime::new(mock.clone(), "docker")
}

// ── Fake units ───────────────────────────────────────────────────────────────

/// A unit that records each shell line and fails those starting with any of
/// `fail_prefixes`.
pub struct FakeUnit {
    name: String,
    commands: Mutex<Vec<String>>,
    fail_prefixes: Vec<&'static str>,
}

impl FakeUnit {
    pub fn new(name: &str) -> Self {
        Self::failing(name, &[])
    }

    pub fn failing(name: &str, prefixes: &[&'static str]) -> Self {
        Self {
            name: name.to_string(),
            commands: Mutex::new(Vec::new()),
            fail_prefixes: prefixes.to_vec(),
        }
    }

    pub fn ran(&self, cmd: &str) -> bool {
        self.commands().iter().any(|c| c == cmd)
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.commands().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().expect("mutex poisoned").clone()
    }
}

impl Unit for FakeUnit {
    fn name(&self) -> &str {
        &self.name
    }

    async fn command(&self, args: &[&str]) -> Result<Output> {
        let cmd = args.first().copied().unwrap_or_default().to_string();
        self.commands.lock().expect("mutex poisoned").push(cmd.clone());
        if let Some(prefix) = self.fail_prefixes.iter().find(|p| cmd.starts_with(**p)) {
            bail!("{prefix} failed on {}", self.name);
        }
        Ok(ok_output(b""))
    }
}

// ── Container stores ─────────────────────────────────────────────────────────

/// In-memory `ContainerStore`.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<String, ContainerRecord>>,
}

impl MemoryStore {
    pub fn with(records: &[ContainerRecord]) -> Self {
        let store = Self::default();
        {
            let mut map = store.records.lock().expect("mutex poisoned");
            for r in records {
                map.insert(r.name.clone(), r.clone());
            }
        }
        store
    }

    pub fn snapshot(&self) -> Vec<ContainerRecord> {
        self.records
            .lock()
            .expect("mutex poisoned")
            .values()
            .cloned()
            .collect()
    }
}

impl ContainerStore for MemoryStore {
    async fn insert(&self, record: &ContainerRecord) -> Result<()> {
        self.records
            .lock()
            .expect("mutex poisoned")
            .insert(record.name.clone(), record.clone());
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<ContainerRecord>> {
        Ok(self.records.lock().expect("mutex poisoned").get(name).cloned())
    }

    async fn remove(&self, name: &str) -> Result<bool> {
        Ok(self
            .records
            .lock()
            .expect("mutex poisoned")
            .remove(name)
            .is_some())
    }

    async fn list(&self) -> Result<Vec<ContainerRecord>> {
        Ok(self.snapshot())
    }
}

/// A store whose writes always fail.
pub struct FailingStore;

impl ContainerStore for FailingStore {
    async fn insert(&self, _: &ContainerRecord) -> Result<()> {
        bail!("store unavailable")
    }
    async fn get(&self, _: &str) -> Result<Option<ContainerRecord>> {
        Ok(None)
    }
    async fn remove(&self, _: &str) -> Result<bool> {
        bail!("store unavailable")
    }
    async fn list(&self) -> Result<Vec<ContainerRecord>> {
        Ok(Vec::new())
    }
}
