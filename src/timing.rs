// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Explicit stage timing that reports through the `log` facade.
//!
//! A [`Timings`] context is owned by the caller and handed to long running
//! operations, which open one [`Stage`] per step. Each stage logs its label when
//! it starts and its elapsed time when it finishes or is dropped.

use std::time::{Duration, Instant};

use log::info;

/// Elapsed time of every finished stage, in completion order.
#[derive(Debug, Default)]
pub struct Timings {
    stages: Vec<(String, Duration)>,
}

impl Timings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new stage; it is recorded here once finished.
    pub fn stage(&mut self, label: impl Into<String>) -> Stage<'_> {
        let label = label.into();
        info!("{label}...");
        Stage {
            timings: self,
            label,
            start: Instant::now(),
            done: false,
        }
    }

    pub fn stages(&self) -> &[(String, Duration)] {
        &self.stages
    }

    pub fn total(&self) -> Duration {
        self.stages.iter().map(|(_, d)| *d).sum()
    }
}

/// A running step of work. Finishing consumes it and records its duration.
pub struct Stage<'a> {
    timings: &'a mut Timings,
    label: String,
    start: Instant,
    done: bool,
}

impl Stage<'_> {
    pub fn finish(mut self) -> Duration {
        self.record()
    }

    fn record(&mut self) -> Duration {
        let elapsed = self.start.elapsed();
        info!("{} DONE ({:e} seconds)", self.label, elapsed.as_secs_f64());
        self.timings
            .stages
            .push((std::mem::take(&mut self.label), elapsed));
        self.done = true;
        elapsed
    }
}

impl Drop for Stage<'_> {
    fn drop(&mut self) {
        if !self.done {
            self.record();
        }
    }
}
