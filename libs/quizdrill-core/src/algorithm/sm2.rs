//! SM-2 spaced repetition algorithm.
//!
//! Quality scores come from [`Confidence::quality`]; anything below 3 is a
//! lapse. Ease is always adjusted and kept within `[minimum_ease, maximum_ease]`.
//! Intervals never exceed `maximum_interval` days.

use super::SpacedRepetitionAlgorithm;
use crate::types::{Confidence, LearningRecord};
use chrono::{Duration, NaiveDate};

pub const MINIMUM_EASE: f64 = 1.3;
pub const MAXIMUM_EASE: f64 = 3.0;
/// Longest interval in days (about a century).
pub const MAXIMUM_INTERVAL: u32 = 36_500;

/// SM-2 algorithm with configurable ease and interval bounds.
#[derive(Debug, Clone)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    pub maximum_ease: f64,
    pub maximum_interval: u32,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: MINIMUM_EASE,
            maximum_ease: MAXIMUM_EASE,
            maximum_interval: MAXIMUM_INTERVAL,
        }
    }
}

impl SpacedRepetitionAlgorithm for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn initial_record(&self, today: NaiveDate) -> LearningRecord {
        LearningRecord {
            ease: self.initial_ease,
            ..LearningRecord::new(today)
        }
    }

    fn review(&self, record: &LearningRecord, outcome: Confidence, today: NaiveDate) -> LearningRecord {
        let quality = outcome.quality();

        let (repetitions, interval) = if quality < 3 {
            (0, 1)
        } else {
            let repetitions = record.repetitions.saturating_add(1);
            let interval = match repetitions {
                1 => 1,
                2 => 3,
                // Grows from the ease the card had before this review.
                _ => self.scaled_interval(record.interval, record.ease),
            };
            (repetitions, interval)
        };
        let interval = interval.min(self.maximum_interval);

        LearningRecord {
            ease: self.next_ease(record.ease, quality),
            interval,
            repetitions,
            next_review: today
                .checked_add_signed(Duration::days(i64::from(interval)))
                .unwrap_or(NaiveDate::MAX),
        }
    }
}

impl Sm2 {
    fn next_ease(&self, ease: f64, quality: u8) -> f64 {
        let miss = 5.0 - f64::from(quality);
        (ease + 0.1 - miss * (0.08 + miss * 0.02)).clamp(self.minimum_ease, self.maximum_ease)
    }

    fn scaled_interval(&self, interval: u32, ease: f64) -> u32 {
        let scaled = (f64::from(interval) * ease).round();
        if scaled >= f64::from(self.maximum_interval) {
            self.maximum_interval
        } else {
            scaled as u32
        }
    }
}
