//! Generated activity pattern
//!
//! Used when no remote source answers. The shape matches real data exactly
//! (same length, consecutive dates ending today, same leveling), only the
//! counts are made up.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::Rng;

use super::day::ContributionDay;

/// Chance of any activity on a given weekday
pub fn activity_probability(weekday: Weekday) -> f64 {
    match weekday {
        Weekday::Sat | Weekday::Sun => 0.25,
        _ => 0.65,
    }
}

/// Count for an active day: 50% 1-3, 30% 4-7, 15% 8-12, 5% 13-20
pub fn sample_count<R: Rng>(rng: &mut R) -> u32 {
    let roll: f64 = rng.random();
    if roll < 0.5 {
        rng.random_range(1..=3)
    } else if roll < 0.8 {
        rng.random_range(4..=7)
    } else if roll < 0.95 {
        rng.random_range(8..=12)
    } else {
        rng.random_range(13..=20)
    }
}

/// `days` consecutive days ending with `today`, oldest first
pub fn generate<R: Rng>(today: NaiveDate, days: usize, rng: &mut R) -> Vec<ContributionDay> {
    let mut out = Vec::with_capacity(days);

    for back in (0..days as u64).rev() {
        let Some(date) = today.checked_sub_days(Days::new(back)) else {
            continue;
        };
        let count = if rng.random_bool(activity_probability(date.weekday())) {
            sample_count(rng)
        } else {
            0
        };
        out.push(ContributionDay::new(date, count));
    }

    out
}
