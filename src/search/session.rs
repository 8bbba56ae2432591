// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search session: the trigger surface in front of the engine.
//!
//! The page runs a search on two triggers, the search button and the Enter
//! key in the input box. Both go through [`SearchSession::handle`], which runs
//! the same pipeline for either.
//!
//! Hosts that run searches off the input event (debounced typing, a worker)
//! can split a run into [`begin`](SearchSession::begin) and
//! [`complete`](SearchSession::complete). Every `begin` issues a newer ticket;
//! completing with anything but the newest ticket is discarded, so a slow old
//! query can never overwrite the results of a newer one.

use tracing::debug;

use super::SearchEngine;
use crate::types::SearchOutcome;

/// A user action that may start a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// The explicit "run search" action.
    Submit,
    /// A key pressed in the search input; only `"Enter"` runs a search.
    Key(String),
}

impl Trigger {
    pub fn key(name: impl Into<String>) -> Self {
        Trigger::Key(name.into())
    }

    /// True if this trigger runs the search pipeline.
    pub fn runs_search(&self) -> bool {
        match self {
            Trigger::Submit => true,
            Trigger::Key(name) => name == "Enter",
        }
    }
}

/// Generation number of one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Holds the visible outcome for one search box.
#[derive(Debug)]
pub struct SearchSession<'e> {
    engine: &'e SearchEngine,
    issued: u64,
    outcome: SearchOutcome<'e>,
}

impl<'e> SearchSession<'e> {
    /// A session whose visible outcome starts out cleared.
    pub fn new(engine: &'e SearchEngine) -> Self {
        Self {
            engine,
            issued: 0,
            outcome: SearchOutcome::Cleared,
        }
    }

    pub fn engine(&self) -> &'e SearchEngine {
        self.engine
    }

    /// React to a trigger with the current input text.
    ///
    /// Returns true if a search ran and its outcome is now visible.
    pub fn handle(&mut self, trigger: &Trigger, input: &str) -> bool {
        if !trigger.runs_search() {
            return false;
        }
        let ticket = self.begin();
        let outcome = self.engine.search(input);
        self.complete(ticket, outcome)
    }

    /// Start a run. Any ticket issued earlier becomes stale.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// True if `ticket` is the newest one issued.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Publish the outcome of a run. Stale tickets are discarded.
    pub fn complete(&mut self, ticket: Ticket, outcome: SearchOutcome<'e>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                ticket = ticket.0,
                newest = self.issued,
                "discarding stale search outcome"
            );
            return false;
        }
        self.outcome = outcome;
        true
    }

    /// The outcome the page should currently show.
    pub fn outcome(&self) -> &SearchOutcome<'e> {
        &self.outcome
    }
}
