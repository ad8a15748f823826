//! Scripted `CommandRunner` for tests

use super::runner::{command_line, CommandRunner};
use crate::error::{BrewtaggerError, BrewtaggerResult};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

type Handler = dyn Fn(&str, &[&str]) -> BrewtaggerResult<Vec<u8>> + Send + Sync;
type Delay = dyn Fn(&str, &[&str]) -> Duration + Send + Sync;

/// Runner that answers every invocation from a closure and records calls
pub struct FakeRunner {
    handler: Box<Handler>,
    delay: Option<Box<Delay>>,
    calls: Mutex<Vec<String>>,
}

impl FakeRunner {
    pub fn new(
        handler: impl Fn(&str, &[&str]) -> BrewtaggerResult<Vec<u8>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            handler: Box::new(handler),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Sleep before answering each call for as long as `delay` says
    pub fn with_delay(
        mut self,
        delay: impl Fn(&str, &[&str]) -> Duration + Send + Sync + 'static,
    ) -> Self {
        self.delay = Some(Box::new(delay));
        self
    }

    /// Every command line seen so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Command lines starting with `prefix`
    pub fn calls_matching(&self, prefix: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .collect()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn output(&self, program: &str, args: &[&str]) -> BrewtaggerResult<Vec<u8>> {
        self.calls.lock().unwrap().push(command_line(program, args));
        if let Some(delay) = &self.delay {
            tokio::time::sleep(delay(program, args)).await;
        }
        (self.handler)(program, args)
    }
}

/// Successful output
pub fn ok(stdout: &str) -> BrewtaggerResult<Vec<u8>> {
    Ok(stdout.as_bytes().to_vec())
}

/// Non-zero exit
pub fn fail(program: &str, args: &[&str]) -> BrewtaggerResult<Vec<u8>> {
    Err(BrewtaggerError::command_exec(
        command_line(program, args),
        1,
        "simulated failure",
    ))
}
