//! Plain-text rendering of a heatmap year, one row per weekday

use chrono::Datelike;

use super::day::ContributionDay;

const SHADES: [char; 5] = ['·', '░', '▒', '▓', '█'];

/// Lay consecutive days out like the web grid: columns are weeks, rows are
/// Sunday through Saturday.
pub fn text_preview(days: &[ContributionDay]) -> String {
    let Some(first) = days.first() else {
        return String::new();
    };

    let offset = first.date.weekday().num_days_from_sunday() as usize;
    let weeks = (offset + days.len()).div_ceil(7);
    let mut rows = vec![vec![' '; weeks]; 7];

    for (i, day) in days.iter().enumerate() {
        let slot = offset + i;
        rows[slot % 7][slot / 7] = SHADES[usize::from(day.level.min(4))];
    }

    rows.into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_preview_layout() {
        // 2026-10-18 is a Sunday
        let start = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let days: Vec<_> = start
            .iter_days()
            .take(8)
            .enumerate()
            .map(|(i, date)| ContributionDay::new(date, if i == 7 { 9 } else { 0 }))
            .collect();

        let text = text_preview(&days);
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], "·█");
        assert_eq!(rows[6], "· ");
    }

    #[test]
    fn test_preview_empty() {
        assert_eq!(text_preview(&[]), "");
    }
}
