// ABOUTME: Per-step countdown state for consumers that persist timers across restarts
// ABOUTME: Resuming is a pure function of the stored state and the current timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Levain Contributors

//! Step Timer Module
//!
//! The calculation engine emits durations but keeps no clock state; any
//! countdown a consumer shows against a [`crate::models::Step`] lives in a
//! [`StepTimer`] the consumer persists itself, keyed by step id. On resume,
//! wall-clock time elapsed since the last update is subtracted from the
//! remaining seconds, floored at zero. No part of the core reads or writes
//! these values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persistable countdown state for one schedule step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTimer {
    /// Id of the step this timer counts down, within one generation pass
    pub step_id: u32,
    /// Seconds left on the countdown as of `last_updated`
    pub remaining_seconds: u32,
    /// Whether the countdown was ticking when last persisted
    pub is_running: bool,
    /// Wall-clock instant the state was last brought up to date
    pub last_updated: DateTime<Utc>,
}

impl StepTimer {
    /// Create a running timer for a step
    #[must_use]
    pub fn started(step_id: u32, duration_minutes: u32, now: DateTime<Utc>) -> Self {
        Self {
            step_id,
            remaining_seconds: duration_minutes * 60,
            is_running: true,
            last_updated: now,
        }
    }

    /// Bring the timer up to date at `now`
    ///
    /// Running timers lose the wall-clock seconds elapsed since
    /// `last_updated`, floored at 0; paused timers only move their
    /// timestamp forward. Negative elapsed time (clock skew) is treated
    /// as zero.
    #[must_use]
    pub fn resumed(self, now: DateTime<Utc>) -> Self {
        let remaining_seconds = if self.is_running {
            let elapsed = (now - self.last_updated).num_seconds().max(0);
            let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);
            self.remaining_seconds.saturating_sub(elapsed)
        } else {
            self.remaining_seconds
        };

        Self {
            remaining_seconds,
            last_updated: now,
            ..self
        }
    }

    /// Pause the countdown at `now`
    #[must_use]
    pub fn paused(self, now: DateTime<Utc>) -> Self {
        let mut timer = self.resumed(now);
        timer.is_running = false;
        timer
    }

    /// Whether the countdown has reached zero
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }
}
