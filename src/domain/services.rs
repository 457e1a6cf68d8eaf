//! Summary statistics over the workout store.
//!
//! Everything here is derived on demand from a borrowed [`WorkoutStore`];
//! nothing is cached, so a summary always reflects the store at the time it
//! was requested.

use serde::Serialize;

use super::errors::{DomainError, DomainResult};
use super::models::{Category, WorkoutStore};

/// Totals for a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
    pub total_minutes: u64,
}

/// Feedback tier picked from the total number of minutes logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Motivation {
    GettingStarted,
    BuildingConsistency,
    Dedicated,
}

impl Motivation {
    pub fn from_minutes(total_minutes: u64) -> Self {
        match total_minutes {
            0..30 => Motivation::GettingStarted,
            30..60 => Motivation::BuildingConsistency,
            _ => Motivation::Dedicated,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Motivation::GettingStarted => "Good start! Keep moving.",
            Motivation::BuildingConsistency => "Nice effort! You're building consistency.",
            Motivation::Dedicated => "Excellent dedication! Keep up the great work.",
        }
    }
}

/// Aggregate view of the store: one entry per category plus global totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub categories: Vec<CategorySummary>,
    pub total_count: usize,
    pub total_minutes: u64,
}

impl Summary {
    pub fn category(&self, category: Category) -> Option<&CategorySummary> {
        self.categories.iter().find(|entry| entry.category == category)
    }

    /// Minutes per category, labelled for the progress bar chart.
    pub fn chart_data(&self) -> Vec<(&'static str, u64)> {
        self.categories
            .iter()
            .map(|entry| (entry.category.label(), entry.total_minutes))
            .collect()
    }

    /// Fraction of all logged minutes spent in `category`, between 0.0 and 1.0.
    pub fn share(&self, category: Category) -> f64 {
        if self.total_minutes == 0 {
            return 0.0;
        }
        let minutes = self.category(category).map_or(0, |entry| entry.total_minutes);
        minutes as f64 / self.total_minutes as f64
    }

    pub fn motivation(&self) -> Motivation {
        Motivation::from_minutes(self.total_minutes)
    }
}

/// Computes summaries and the textual workout report from a store.
///
/// # Examples
///
/// ```
/// use acefit::domain::{Category, DomainError, SummaryAggregator, WorkoutStore};
///
/// let mut store = WorkoutStore::default();
/// assert_eq!(SummaryAggregator::summarize(&store), Err(DomainError::EmptySummary));
///
/// store.log(Category::WarmUp, "Stretching", "5").unwrap();
/// store.log(Category::Workout, "Pushups", "20").unwrap();
///
/// let summary = SummaryAggregator::summarize(&store).unwrap();
/// assert_eq!(summary.total_count, 2);
/// assert_eq!(summary.total_minutes, 25);
/// ```
pub struct SummaryAggregator;

impl SummaryAggregator {
    /// Per-category counts and minutes for every category, in display order.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptySummary`] when nothing has been logged yet.
    pub fn summarize(store: &WorkoutStore) -> DomainResult<Summary> {
        if store.is_empty() {
            return Err(DomainError::EmptySummary);
        }

        let categories: Vec<CategorySummary> = Category::ALL
            .iter()
            .map(|&category| {
                let records = store.records(category);
                CategorySummary {
                    category,
                    count: records.len(),
                    total_minutes: records.iter().map(|r| u64::from(r.duration())).sum(),
                }
            })
            .collect();

        let total_count = categories.iter().map(|entry| entry.count).sum();
        let total_minutes = categories.iter().map(|entry| entry.total_minutes).sum();

        tracing::debug!(total_count, total_minutes, "summary recomputed");

        Ok(Summary {
            categories,
            total_count,
            total_minutes,
        })
    }

    /// Renders the "view workouts" listing shown on the summary tab.
    ///
    /// Each category gets a header followed by its numbered records, then the
    /// totals and a motivation line close the report.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptySummary`] when nothing has been logged yet.
    pub fn report(store: &WorkoutStore) -> DomainResult<String> {
        let summary = Self::summarize(store)?;
        let mut out = String::new();

        for entry in &summary.categories {
            out.push_str(&format!(
                "{} ({} sessions, {} min)\n",
                entry.category, entry.count, entry.total_minutes
            ));
            let records = store.records(entry.category);
            if records.is_empty() {
                out.push_str("  No sessions recorded.\n");
            }
            for (index, record) in records.iter().enumerate() {
                out.push_str(&format!(
                    "  {}. {} - {} min ({})\n",
                    index + 1,
                    record.exercise(),
                    record.duration(),
                    record.timestamp().format("%H:%M:%S")
                ));
            }
            out.push('\n');
        }

        out.push_str(&format!(
            "Total: {} workouts, {} min\n",
            summary.total_count, summary.total_minutes
        ));
        out.push_str(summary.motivation().message());

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate_workout;
    use chrono::{Local, TimeZone};

    fn create_test_store() -> WorkoutStore {
        let mut store = WorkoutStore::default();
        store.log(Category::WarmUp, "Jumping jacks", "5").unwrap();
        store.log(Category::Workout, "Pushups", "20").unwrap();
        store.log(Category::Workout, "Squats", "15").unwrap();
        store
    }

    #[test]
    fn test_summarize_empty_store() {
        let store = WorkoutStore::default();
        assert_eq!(SummaryAggregator::summarize(&store), Err(DomainError::EmptySummary));
        assert_eq!(SummaryAggregator::report(&store), Err(DomainError::EmptySummary));
    }

    #[test]
    fn test_summarize_totals() {
        let store = create_test_store();
        let summary = SummaryAggregator::summarize(&store).unwrap();

        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.total_minutes, 40);
        assert_eq!(summary.categories.len(), Category::ALL.len());

        let workout = summary.category(Category::Workout).unwrap();
        assert_eq!(workout.count, 2);
        assert_eq!(workout.total_minutes, 35);

        let cooldown = summary.category(Category::CoolDown).unwrap();
        assert_eq!(cooldown.count, 0);
        assert_eq!(cooldown.total_minutes, 0);
    }

    #[test]
    fn test_summarize_does_not_mutate() {
        let store = create_test_store();
        let first = SummaryAggregator::summarize(&store).unwrap();
        let second = SummaryAggregator::summarize(&store).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_chart_data_in_category_order() {
        let store = create_test_store();
        let summary = SummaryAggregator::summarize(&store).unwrap();
        assert_eq!(
            summary.chart_data(),
            vec![("Warm-up", 5), ("Workout", 35), ("Cool-down", 0)]
        );
    }

    #[test]
    fn test_share() {
        let store = create_test_store();
        let summary = SummaryAggregator::summarize(&store).unwrap();

        assert!((summary.share(Category::WarmUp) - 0.125).abs() < f64::EPSILON);
        assert!((summary.share(Category::Workout) - 0.875).abs() < f64::EPSILON);
        assert_eq!(summary.share(Category::CoolDown), 0.0);

        let total: f64 = Category::ALL.iter().map(|&c| summary.share(c)).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_motivation_tiers() {
        assert_eq!(Motivation::from_minutes(0), Motivation::GettingStarted);
        assert_eq!(Motivation::from_minutes(29), Motivation::GettingStarted);
        assert_eq!(Motivation::from_minutes(30), Motivation::BuildingConsistency);
        assert_eq!(Motivation::from_minutes(59), Motivation::BuildingConsistency);
        assert_eq!(Motivation::from_minutes(60), Motivation::Dedicated);

        let summary = SummaryAggregator::summarize(&create_test_store()).unwrap();
        assert_eq!(summary.motivation(), Motivation::BuildingConsistency);
    }

    #[test]
    fn test_report_layout() {
        let mut store = WorkoutStore::default();
        let morning = Local.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap();
        store.add_at(Category::Workout, validate_workout("Yoga", "30").unwrap(), morning);
        store.add_at(Category::Workout, validate_workout("Plank", "5").unwrap(), morning);

        let report = SummaryAggregator::report(&store).unwrap();
        let expected = "\
Warm-up (0 sessions, 0 min)
  No sessions recorded.

Workout (2 sessions, 35 min)
  1. Yoga - 30 min (07:30:00)
  2. Plank - 5 min (07:30:00)

Cool-down (0 sessions, 0 min)
  No sessions recorded.

Total: 2 workouts, 35 min
Nice effort! You're building consistency.";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_summary_serializes_category_labels() {
        let summary = SummaryAggregator::summarize(&create_test_store()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["total_minutes"], 40);
        assert_eq!(json["categories"][0]["category"], "Warm-up");
        assert_eq!(json["categories"][2]["category"], "Cool-down");
    }
}
