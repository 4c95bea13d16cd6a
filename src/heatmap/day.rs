//! Contribution day records

use chrono::NaiveDate;

/// Heatmap level for a raw count: 0, 1-2, 3-5, 6-8, 9+
#[inline]
pub fn level_for_count(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=8 => 3,
        _ => 4,
    }
}

/// One cell of the heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
    /// 0-4
    pub level: u8,
}

impl ContributionDay {
    /// Day with its level derived from the count
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self {
            date,
            count,
            level: level_for_count(count),
        }
    }

    /// CSS classes for the cell
    pub fn css_class(&self) -> String {
        format!("heatmap-day day-level-{}", self.level)
    }

    /// Tooltip/accessible label: ISO date and raw count
    pub fn label(&self) -> String {
        format!("{}: {} contributions", self.date, self.count)
    }
}

/// Put a series in chronological order, drop anything after `today` and keep
/// at most the trailing `limit` days. Shorter series are not padded.
pub fn trailing_days(
    mut days: Vec<ContributionDay>,
    today: NaiveDate,
    limit: usize,
) -> Vec<ContributionDay> {
    days.sort_by_key(|d| d.date);
    days.retain(|d| d.date <= today);
    let skip = days.len().saturating_sub(limit);
    days.split_off(skip)
}
