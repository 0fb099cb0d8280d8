use std::sync::{
    Arc,
    atomic::{AtomicI64, Ordering},
};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::CounterConfig;

/// The contract the home page needs from a counter store: one read, two mutators.
pub trait CounterStore: Send + Sync {
    fn count(&self) -> i64;
    fn increment(&self);
    fn decrement(&self);
}

/// How far `decrement` is allowed to go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowerBound {
    /// Goes negative, saturating at `i64::MIN`.
    #[default]
    Unbounded,
    /// Never goes below the given value.
    Floor(i64),
}

impl LowerBound {
    fn step_down(self, value: i64) -> Option<i64> {
        match self {
            LowerBound::Unbounded => value.checked_sub(1),
            LowerBound::Floor(floor) if value > floor => Some(value - 1),
            LowerBound::Floor(_) => None,
        }
    }

    fn clamp(self, value: i64) -> i64 {
        match self {
            LowerBound::Unbounded => value,
            LowerBound::Floor(floor) => value.max(floor),
        }
    }
}

/// Process-wide counter. Clones share the same value.
#[derive(Clone, Debug)]
pub struct SharedCounter {
    value: Arc<AtomicI64>,
    lower_bound: LowerBound,
}

impl SharedCounter {
    pub fn new(initial: i64, lower_bound: LowerBound) -> Self {
        let start = lower_bound.clamp(initial);
        if start != initial {
            warn!("initial count {initial} is below {lower_bound:?}, starting at {start}");
        }
        Self {
            value: Arc::new(AtomicI64::new(start)),
            lower_bound,
        }
    }

    pub fn from_config(config: &CounterConfig) -> Self {
        Self::new(config.initial, config.lower_bound)
    }

    pub fn lower_bound(&self) -> LowerBound {
        self.lower_bound
    }

    fn apply(&self, op: &str, step: impl Fn(i64) -> Option<i64>) {
        match self.value.fetch_update(Ordering::SeqCst, Ordering::SeqCst, &step) {
            Ok(previous) => debug!(
                "counter {op}: {previous} -> {}",
                step(previous).unwrap_or(previous)
            ),
            Err(current) => debug!("counter {op} ignored at {current}"),
        }
    }
}

impl Default for SharedCounter {
    fn default() -> Self {
        Self::new(0, LowerBound::default())
    }
}

impl CounterStore for SharedCounter {
    fn count(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }

    fn increment(&self) {
        self.apply("increment", |v| v.checked_add(1));
    }

    fn decrement(&self) {
        let bound = self.lower_bound;
        self.apply("decrement", move |v| bound.step_down(v));
    }
}
