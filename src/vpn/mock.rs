//! Scripted in-memory controller for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::Controller;
use crate::error::{Error, Result};

/// Calls observed by [`MockController`], in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Names,
    States,
    DisconnectAll,
    Connect(String),
}

/// Replays canned responses and records every call.
///
/// `states` responses are consumed front to back; the last one repeats once
/// the queue is down to a single entry.
#[derive(Debug, Default)]
pub struct MockController {
    names: String,
    states: RefCell<VecDeque<String>>,
    calls: RefCell<Vec<Call>>,
    fail_on: Option<Call>,
}

impl MockController {
    pub fn new(names: &str, states: &[&str]) -> Self {
        Self {
            names: names.to_string(),
            states: RefCell::new(states.iter().map(|s| (*s).to_string()).collect()),
            ..Self::default()
        }
    }

    /// Make the given call fail with a controller error.
    pub fn failing_on(mut self, call: Call) -> Self {
        self.fail_on = Some(call);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: Call) -> Result<()> {
        let fail = self.fail_on.as_ref() == Some(&call);
        self.calls.borrow_mut().push(call);
        if fail {
            return Err(Error::controller("mock", "scripted failure"));
        }
        Ok(())
    }
}

impl Controller for MockController {
    fn profile_names(&self) -> Result<String> {
        self.record(Call::Names)?;
        Ok(self.names.clone())
    }

    fn profile_states(&self) -> Result<String> {
        self.record(Call::States)?;
        let mut states = self.states.borrow_mut();
        if states.len() > 1 {
            Ok(states.pop_front().unwrap_or_default())
        } else {
            Ok(states.front().cloned().unwrap_or_default())
        }
    }

    fn disconnect_all(&self) -> Result<()> {
        self.record(Call::DisconnectAll)
    }

    fn connect(&self, profile: &str) -> Result<()> {
        self.record(Call::Connect(profile.to_string()))
    }
}
