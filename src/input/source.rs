use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

/// Somewhere input events come from
pub trait EventSource {
    /// Drain every event that is already waiting, without blocking
    fn poll_events(&mut self) -> Result<Vec<Event>>;
}

/// Reads events from the terminal crossterm is attached to
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl TerminalEvents {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for TerminalEvents {
    fn poll_events(&mut self) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO).context("Failed to poll terminal events")? {
            events.push(event::read().context("Failed to read terminal event")?);
        }
        Ok(events)
    }
}
