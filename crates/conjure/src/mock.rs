//! Deterministic capabilities shared by the unit tests.

use crate::{EntropySource, TimeSource};
use core::cell::Cell;

/// Fills every buffer with the same byte.
pub struct FixedBytes(pub u8);

impl EntropySource for FixedBytes {
    fn fill(&self, buf: &mut [u8]) {
        buf.fill(self.0);
    }
}

/// Replays a byte script, wrapping around at the end, and counts how many
/// bytes were consumed.
pub struct CycleBytes {
    script: Vec<u8>,
    cursor: Cell<usize>,
}

impl CycleBytes {
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        let script = script.into();
        assert!(!script.is_empty(), "script must not be empty");
        Self {
            script,
            cursor: Cell::new(0),
        }
    }

    pub fn consumed(&self) -> usize {
        self.cursor.get()
    }
}

impl EntropySource for CycleBytes {
    fn fill(&self, buf: &mut [u8]) {
        for b in buf {
            let at = self.cursor.get();
            *b = self.script[at % self.script.len()];
            self.cursor.set(at + 1);
        }
    }
}

/// A clock frozen at a single instant.
pub struct FixedTime {
    pub nanos: u128,
}

impl FixedTime {
    pub fn from_millis(millis: u64, sub_milli_nanos: u32) -> Self {
        Self {
            nanos: u128::from(millis) * 1_000_000 + u128::from(sub_milli_nanos),
        }
    }
}

impl TimeSource for FixedTime {
    fn current_nanos(&self) -> u128 {
        self.nanos
    }
}

/// A clock that walks through a fixed list of readings, repeating the last.
pub struct StepTime {
    readings: Vec<u128>,
    index: Cell<usize>,
}

impl StepTime {
    pub fn new(readings: Vec<u128>) -> Self {
        Self {
            readings,
            index: Cell::new(0),
        }
    }
}

impl TimeSource for StepTime {
    fn current_nanos(&self) -> u128 {
        let i = self.index.get();
        self.index.set(i + 1);
        self.readings[i.min(self.readings.len() - 1)]
    }
}
