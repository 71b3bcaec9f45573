//! JSON-lines event log.
//!
//! Each game event becomes one line carrying the event, its value and the
//! score/level/lines totals after it. Session markers (`start`, `restart`,
//! `quit`) use the same record shape without a value. Logging never interrupts
//! play: the first write failure disables the log.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameState;
use crate::types::GameEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub seq: u64,
    pub event: &'static str,
    /// Rows cleared, new level, or new interval in ms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl EventRecord {
    pub fn new(seq: u64, event: &'static str, value: Option<u64>, state: &GameState) -> Self {
        Self {
            seq,
            event,
            value,
            score: state.score(),
            level: state.level(),
            lines: state.lines(),
        }
    }

    pub fn from_event(seq: u64, event: &GameEvent, state: &GameState) -> Self {
        let value = match *event {
            GameEvent::LinesCleared(n) => Some(n as u64),
            GameEvent::LevelUp(level) => Some(level as u64),
            GameEvent::TickIntervalChanged(interval) => Some(interval.as_millis() as u64),
            GameEvent::GameOver => None,
        };
        Self::new(seq, event.name(), value, state)
    }
}

pub struct EventLog<W: Write = BufWriter<File>> {
    writer: Option<W>,
    seq: u64,
    buf: Vec<u8>,
}

impl EventLog<BufWriter<File>> {
    /// Append to `path`, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    /// Open `path` when given, otherwise a log that drops everything.
    pub fn open_optional(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None => Ok(Self::disabled()),
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: Some(writer),
            seq: 0,
            buf: Vec::with_capacity(256),
        }
    }

    pub fn disabled() -> Self {
        Self {
            writer: None,
            seq: 0,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Records written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(&mut self, event: &GameEvent, state: &GameState) {
        if self.writer.is_none() {
            return;
        }
        let record = EventRecord::from_event(self.seq + 1, event, state);
        self.write_record(&record);
    }

    /// Session marker such as `start` or `quit`.
    pub fn note(&mut self, marker: &'static str, state: &GameState) {
        if self.writer.is_none() {
            return;
        }
        let record = EventRecord::new(self.seq + 1, marker, None, state);
        self.write_record(&record);
    }

    pub fn flush(&mut self) {
        if let Some(writer) = self.writer.as_mut() {
            if writer.flush().is_err() {
                self.writer = None;
            }
        }
    }

    /// Give back the writer, if it is still alive.
    pub fn into_inner(mut self) -> Option<W> {
        self.writer.take()
    }

    fn write_record(&mut self, record: &EventRecord) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if writer.write_all(&self.buf).is_err() {
            self.writer = None;
            return;
        }
        self.seq = record.seq;
    }
}
