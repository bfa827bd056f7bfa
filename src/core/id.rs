use std::{fmt, str::FromStr};

use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::core::contact::ContactId;

/// Source of fresh contact identifiers.
///
/// Every implementation must never return the same id twice for its own lifetime.
pub trait IdGenerator {
    fn next_id(&mut self) -> ContactId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> ContactId {
        ContactId::new(Uuid::new_v4().to_string())
    }
}

/// Monotonic counter starting at 1.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    last: u64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ContactId {
        self.last += 1;
        ContactId::new(self.last.to_string())
    }
}

/// Unix time in milliseconds, bumped past the last issued value when the
/// clock has not moved on.
pub struct TimestampIds {
    clock: Box<dyn FnMut() -> i128 + Send>,
    last: Option<i128>,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::with_clock(|| OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000)
    }

    /// Use a custom millisecond clock.
    pub fn with_clock(clock: impl FnMut() -> i128 + Send + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            last: None,
        }
    }
}

impl Default for TimestampIds {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TimestampIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimestampIds").field("last", &self.last).finish()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> ContactId {
        let now = (self.clock)();
        let value = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(value);
        ContactId::new(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
    Timestamp,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator + Send> {
        match self {
            IdStrategy::Uuid => Box::new(UuidIds),
            IdStrategy::Sequential => Box::new(SequentialIds::default()),
            IdStrategy::Timestamp => Box::new(TimestampIds::new()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(IdStrategy::Uuid),
            "sequential" => Ok(IdStrategy::Sequential),
            "timestamp" => Ok(IdStrategy::Timestamp),
            other => Err(anyhow::anyhow!(
                "unknown id strategy `{}` (expected uuid, sequential or timestamp)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn sequential_counts_from_one() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id().as_str(), "1");
        assert_eq!(ids.next_id().as_str(), "2");
        assert_eq!(ids.next_id().as_str(), "3");
    }

    #[test]
    fn timestamp_ids_do_not_collide_on_a_frozen_clock() {
        let mut ids = TimestampIds::with_clock(|| 1_700_000_000_000);
        let first = ids.next_id();
        let second = ids.next_id();
        let third = ids.next_id();
        assert_eq!(first.as_str(), "1700000000000");
        assert_eq!(second.as_str(), "1700000000001");
        assert_eq!(third.as_str(), "1700000000002");
    }

    #[test]
    fn timestamp_ids_follow_the_clock_when_it_moves_ahead() {
        let mut ticks = vec![10, 10, 50].into_iter();
        let mut ids = TimestampIds::with_clock(move || ticks.next().unwrap_or(50));
        assert_eq!(ids.next_id().as_str(), "10");
        assert_eq!(ids.next_id().as_str(), "11");
        assert_eq!(ids.next_id().as_str(), "50");
    }

    #[test]
    fn every_strategy_yields_unique_ids_under_rapid_inserts() {
        for strategy in [IdStrategy::Uuid, IdStrategy::Sequential, IdStrategy::Timestamp] {
            let mut ids = strategy.generator();
            let seen: HashSet<_> = (0..500).map(|_| ids.next_id()).collect();
            assert_eq!(seen.len(), 500, "{:?} produced a duplicate", strategy);
        }
    }

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!("UUID".parse::<IdStrategy>().unwrap(), IdStrategy::Uuid);
        assert_eq!(" timestamp ".parse::<IdStrategy>().unwrap(), IdStrategy::Timestamp);
        assert!("random".parse::<IdStrategy>().is_err());
    }
}
