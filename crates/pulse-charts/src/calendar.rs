//! Week/day bucketing for contribution grids
//!
//! Buckets dated data points into a `(week, weekday)` grid over a rolling
//! window of N weeks ending today. Weeks run Sunday to Saturday; days in
//! the window without data become value-0 cells, days after today stay
//! empty so the trailing week renders transparent cells.

use chrono::{Datelike, Duration, NaiveDate};
use pulse_core::ContributionDataPoint;
use std::collections::HashMap;

/// Row labels down the weekday axis; blanks keep the rows aligned.
pub const DAY_LABELS: [&str; 4] = ["", "Mon", "Wed", "Fri"];

pub const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One day's cell in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub value: f64,
    pub color: Option<String>,
    /// Index into the caller's data array, when the day was supplied.
    pub source_index: Option<usize>,
}

/// Column-major contribution grid: `weeks[w][d]` with d 0 = Sunday.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContributionGrid {
    pub weeks: Vec<Vec<Option<DayCell>>>,
}

impl ContributionGrid {
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Flat cell index for interaction callbacks.
    pub fn flat_index(week: usize, day: usize) -> usize {
        week * 7 + day
    }
}

/// Bucket `data` into a grid of `weeks_to_show` weeks ending with the week
/// that contains `today`. Duplicate dates keep the last occurrence.
pub fn organize_by_week(
    data: &[ContributionDataPoint],
    weeks_to_show: usize,
    today: NaiveDate,
) -> ContributionGrid {
    if weeks_to_show == 0 {
        return ContributionGrid::default();
    }

    let mut by_date: HashMap<NaiveDate, (usize, &ContributionDataPoint)> = HashMap::new();
    for (index, point) in data.iter().enumerate() {
        by_date.insert(point.date, (index, point));
    }

    let days_from_sunday = today.weekday().num_days_from_sunday() as i64;
    let last_week_start = today - Duration::days(days_from_sunday);
    let first_day = last_week_start - Duration::days(7 * (weeks_to_show as i64 - 1));

    let mut weeks = Vec::with_capacity(weeks_to_show);
    for week in 0..weeks_to_show {
        let mut week_cells = Vec::with_capacity(7);
        for day in 0..7 {
            let date = first_day + Duration::days((week * 7 + day) as i64);
            if date > today {
                week_cells.push(None);
                continue;
            }
            let cell = match by_date.get(&date) {
                Some(&(index, point)) => DayCell {
                    date,
                    value: point.value,
                    color: point.color.clone(),
                    source_index: Some(index),
                },
                None => DayCell {
                    date,
                    value: 0.0,
                    color: None,
                    source_index: None,
                },
            };
            week_cells.push(Some(cell));
        }
        weeks.push(week_cells);
    }

    ContributionGrid { weeks }
}

/// A month caption above the first week where that month starts.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthLabel {
    pub label: &'static str,
    pub x: f64,
}

/// Month captions with x offsets, one per month transition.
pub fn month_labels(grid: &ContributionGrid, cell_width: f64) -> Vec<MonthLabel> {
    let mut labels = Vec::new();
    let mut current_month = 0u32;

    for (week_index, week) in grid.weeks.iter().enumerate() {
        if let Some(Some(first_cell)) = week.first() {
            let month = first_cell.date.month();
            if month != current_month {
                current_month = month;
                labels.push(MonthLabel {
                    label: MONTH_ABBREV[(month - 1) as usize],
                    x: week_index as f64 * cell_width,
                });
            }
        }
    }

    labels
}

/// Intensity color for a value: 0 maps to the empty color, otherwise the
/// first threshold bucket the value stays under, else the darkest color.
pub fn color_for_value(
    value: f64,
    thresholds: &[f64],
    scale: &[String],
    empty_color: &str,
) -> String {
    if value == 0.0 {
        return empty_color.to_string();
    }

    for (i, threshold) in thresholds.iter().enumerate() {
        if value < *threshold {
            return scale
                .get(i)
                .cloned()
                .unwrap_or_else(|| empty_color.to_string());
        }
    }

    scale
        .last()
        .cloned()
        .unwrap_or_else(|| empty_color.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn default_scale() -> Vec<String> {
        pulse_core::colors::CELL_SCALE
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_grid_is_weeks_by_seven() {
        // A Saturday: the final week is fully in the past
        let today = date(2024, 3, 9);
        let grid = organize_by_week(&[], 52, today);
        assert_eq!(grid.week_count(), 52);
        assert!(grid.weeks.iter().all(|w| w.len() == 7));
        assert!(grid.weeks.iter().flatten().all(|c| c.is_some()));
    }

    #[test]
    fn test_window_ends_today() {
        let today = date(2024, 3, 9);
        let grid = organize_by_week(&[], 52, today);
        let last = grid.weeks.last().unwrap().last().unwrap().as_ref().unwrap();
        assert_eq!(last.date, today);
    }

    #[test]
    fn test_days_after_today_stay_empty() {
        // A Wednesday: Thu/Fri/Sat of the final week are in the future
        let today = date(2024, 3, 6);
        let grid = organize_by_week(&[], 4, today);
        let last_week = grid.weeks.last().unwrap();
        assert!(last_week[3].is_some()); // Wednesday
        assert!(last_week[4].is_none());
        assert!(last_week[6].is_none());
    }

    #[test]
    fn test_supplied_date_lands_in_one_cell() {
        let today = date(2024, 3, 9);
        let target = date(2024, 2, 14);
        let data = vec![ContributionDataPoint::new(7.0, target)];
        let grid = organize_by_week(&data, 52, today);

        let hits: Vec<&DayCell> = grid
            .weeks
            .iter()
            .flatten()
            .flatten()
            .filter(|c| c.source_index == Some(0))
            .collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].date, target);
        assert_eq!(hits[0].value, 7.0);
        // Wednesday of that week
        assert_eq!(hits[0].date.weekday().num_days_from_sunday(), 3);
    }

    #[test]
    fn test_absent_dates_default_to_zero() {
        let today = date(2024, 3, 9);
        let grid = organize_by_week(&[], 2, today);
        assert!(grid
            .weeks
            .iter()
            .flatten()
            .flatten()
            .all(|c| c.value == 0.0 && c.source_index.is_none()));
    }

    #[test]
    fn test_month_labels_mark_transitions() {
        let today = date(2024, 3, 9);
        let grid = organize_by_week(&[], 6, today);
        let labels = month_labels(&grid, 16.0);
        // Window spans late January through March
        assert_eq!(labels.first().unwrap().label, "Jan");
        assert!(labels.iter().any(|l| l.label == "Feb"));
        assert!(labels.iter().any(|l| l.label == "Mar"));
        assert_eq!(labels.first().unwrap().x, 0.0);
    }

    #[test]
    fn test_color_thresholds() {
        let thresholds = vec![1.0, 5.0, 10.0];
        let scale = default_scale();

        assert_eq!(color_for_value(0.0, &thresholds, &scale, "#eee"), "#eee");
        assert_eq!(color_for_value(0.5, &thresholds, &scale, "#eee"), scale[0]);
        assert_eq!(color_for_value(3.0, &thresholds, &scale, "#eee"), scale[1]);
        assert_eq!(color_for_value(7.0, &thresholds, &scale, "#eee"), scale[2]);
        assert_eq!(color_for_value(25.0, &thresholds, &scale, "#eee"), scale[3]);
    }
}
