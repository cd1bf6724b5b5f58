//! Forward navigation path shared by every screen.
//!
//! The root (welcome) screen is implicit: an empty path means the user is
//! on it. There is deliberately no single-step pop.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::catalog::Exercise;
use crate::error::{Result, StorageError};
use crate::events::Event;
use crate::storage::{CompletionCounter, Database};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "route", content = "exercise", rename_all = "snake_case")]
pub enum Route {
    Selection,
    Exercise(Exercise),
    Completion,
}

#[derive(Debug)]
pub struct Router {
    path: Vec<Route>,
    counter: CompletionCounter,
}

impl Router {
    pub fn new(counter: CompletionCounter) -> Self {
        Self {
            path: Vec::new(),
            counter,
        }
    }

    /// Router whose counter lives in the on-disk preference database.
    pub fn open() -> Result<Self> {
        let counter = CompletionCounter::new(Database::open()?);
        Ok(Self::new(counter))
    }

    pub fn path(&self) -> &[Route] {
        &self.path
    }

    /// Top of the path; `None` means the root screen.
    pub fn current(&self) -> Option<&Route> {
        self.path.last()
    }

    pub fn push(&mut self, route: Route) -> Event {
        tracing::debug!(?route, depth = self.path.len() + 1, "push");
        self.path.push(route.clone());
        Event::RoutePushed {
            route,
            depth: self.path.len(),
            at: Utc::now(),
        }
    }

    pub fn pop_to_root(&mut self) -> Event {
        let cleared = self.path.len();
        self.path.clear();
        tracing::debug!(cleared, "pop to root");
        Event::PoppedToRoot {
            cleared,
            at: Utc::now(),
        }
    }

    /// Count one finished session.
    pub fn mark_complete(&mut self) -> Result<Event, StorageError> {
        let total = self.counter.increment()?;
        Ok(Event::CompletionRecorded {
            total,
            at: Utc::now(),
        })
    }

    pub fn completions(&self) -> Result<u64, StorageError> {
        self.counter.read()
    }
}
