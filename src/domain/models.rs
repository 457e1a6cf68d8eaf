use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

use super::errors::DomainResult;
use super::validation::{validate_workout, NewWorkout};

/// Grouping label a workout is logged under.
///
/// Variants are declared in session order so that sorted collections keyed
/// by category list warm-ups first and cool-downs last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Warm-up")]
    WarmUp,
    #[default]
    #[serde(rename = "Workout")]
    Workout,
    #[serde(rename = "Cool-down")]
    CoolDown,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::WarmUp, Category::Workout, Category::CoolDown];

    pub fn label(self) -> &'static str {
        match self {
            Category::WarmUp => "Warm-up",
            Category::Workout => "Workout",
            Category::CoolDown => "Cool-down",
        }
    }

    /// Returns the following category, wrapping around after the last one.
    pub fn next(self) -> Self {
        match self {
            Category::WarmUp => Category::Workout,
            Category::Workout => Category::CoolDown,
            Category::CoolDown => Category::WarmUp,
        }
    }

    /// Returns the preceding category, wrapping around before the first one.
    pub fn previous(self) -> Self {
        match self {
            Category::WarmUp => Category::CoolDown,
            Category::Workout => Category::WarmUp,
            Category::CoolDown => Category::Workout,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One logged workout entry. Fields are fixed once the record is created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutRecord {
    exercise: String,
    duration: u32,
    timestamp: DateTime<Local>,
}

impl WorkoutRecord {
    fn new(workout: NewWorkout, timestamp: DateTime<Local>) -> Self {
        let (exercise, duration) = workout.into_parts();
        Self {
            exercise,
            duration,
            timestamp,
        }
    }

    pub fn exercise(&self) -> &str {
        &self.exercise
    }

    /// Duration in minutes, always greater than zero.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// In-memory log of every workout recorded during this session.
///
/// Records are partitioned by [`Category`] and kept in insertion order within
/// each partition. Only validated input ever reaches the store, so every record
/// has a non-empty exercise name and a positive duration.
///
/// # Examples
///
/// ```
/// use acefit::domain::{Category, WorkoutStore};
///
/// let mut store = WorkoutStore::default();
/// store.log(Category::Workout, "Pushups", "20").unwrap();
///
/// assert_eq!(store.records(Category::Workout).len(), 1);
/// assert!(store.log(Category::Workout, "Running", "abc").is_err());
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WorkoutStore {
    records: BTreeMap<Category, Vec<WorkoutRecord>>,
}

impl WorkoutStore {
    /// Appends an already validated workout, stamped with the current local time.
    pub fn add(&mut self, category: Category, workout: NewWorkout) -> &WorkoutRecord {
        self.add_at(category, workout, Local::now())
    }

    pub(crate) fn add_at(
        &mut self,
        category: Category,
        workout: NewWorkout,
        timestamp: DateTime<Local>,
    ) -> &WorkoutRecord {
        let entries = self.records.entry(category).or_default();
        entries.push(WorkoutRecord::new(workout, timestamp));
        &entries[entries.len() - 1]
    }

    /// Validates raw form input and appends it on success.
    ///
    /// On failure the store is left untouched and the first violated rule is
    /// returned.
    pub fn log(
        &mut self,
        category: Category,
        exercise: &str,
        duration: &str,
    ) -> DomainResult<&WorkoutRecord> {
        let workout = validate_workout(exercise, duration)?;
        Ok(self.add(category, workout))
    }

    pub fn all(&self) -> &BTreeMap<Category, Vec<WorkoutRecord>> {
        &self.records
    }

    pub fn records(&self, category: Category) -> &[WorkoutRecord] {
        self.records.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over every record, category by category, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &WorkoutRecord)> {
        self.records
            .iter()
            .flat_map(|(category, entries)| entries.iter().map(move |record| (*category, record)))
    }

    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use chrono::TimeZone;

    #[test]
    fn test_category_cycle() {
        for category in Category::ALL {
            assert_eq!(category.next().previous(), category);
        }
        assert_eq!(Category::CoolDown.next(), Category::WarmUp);
        assert_eq!(Category::WarmUp.previous(), Category::CoolDown);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::WarmUp.to_string(), "Warm-up");
        assert_eq!(Category::Workout.to_string(), "Workout");
        assert_eq!(Category::CoolDown.to_string(), "Cool-down");
        assert_eq!(Category::default(), Category::Workout);
    }

    #[test]
    fn test_log_valid_workout() {
        let mut store = WorkoutStore::default();

        let record = store.log(Category::Workout, "Pushups", "20").unwrap();
        assert_eq!(record.exercise(), "Pushups");
        assert_eq!(record.duration(), 20);

        let entries = store.records(Category::Workout);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].exercise(), "Pushups");
        assert_eq!(entries[0].duration(), 20);
    }

    #[test]
    fn test_log_grows_only_target_category() {
        let mut store = WorkoutStore::default();
        store.log(Category::WarmUp, "Jumping jacks", "5").unwrap();

        let before_warmup = store.records(Category::WarmUp).len();
        let before_workout = store.records(Category::Workout).len();
        store.log(Category::Workout, "Squats", "10").unwrap();

        assert_eq!(store.records(Category::Workout).len(), before_workout + 1);
        assert_eq!(store.records(Category::WarmUp).len(), before_warmup);
    }

    #[test]
    fn test_log_rejects_invalid_duration() {
        let mut store = WorkoutStore::default();

        let result = store.log(Category::Workout, "Running", "abc");
        assert!(matches!(result, Err(DomainError::InvalidDuration(_))));
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_log_rejects_non_positive_duration() {
        let mut store = WorkoutStore::default();

        assert!(matches!(
            store.log(Category::Workout, "Sprint", "0"),
            Err(DomainError::InvalidDuration(_))
        ));
        assert!(matches!(
            store.log(Category::Workout, "Sprint", "-5"),
            Err(DomainError::InvalidDuration(_))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_log_rejects_empty_fields() {
        let mut store = WorkoutStore::default();

        assert_eq!(store.log(Category::Workout, "", ""), Err(DomainError::EmptyFields));
        assert_eq!(store.log(Category::Workout, "   ", "10"), Err(DomainError::EmptyFields));
        assert!(store.is_empty());
    }

    #[test]
    fn test_rejections_keep_existing_records() {
        let mut store = WorkoutStore::default();
        store.log(Category::Workout, "Pushups", "20").unwrap();
        let before = store.records(Category::Workout).to_vec();

        assert!(store.log(Category::Workout, "Running", "abc").is_err());
        assert!(store.log(Category::Workout, "Sprint", "0").is_err());
        assert!(store.log(Category::Workout, "", "15").is_err());
        assert!(store.log(Category::WarmUp, "Stretching", "").is_err());

        assert_eq!(store.len(), 1);
        assert_eq!(store.records(Category::Workout), before.as_slice());
        assert!(store.records(Category::WarmUp).is_empty());
    }

    #[test]
    fn test_add_stores_validated_workout() {
        let mut store = WorkoutStore::default();
        let workout = validate_workout(" Lunges ", "12").unwrap();

        let record = store.add(Category::WarmUp, workout);
        assert_eq!(record.exercise(), "Lunges");
        assert_eq!(record.duration(), 12);
        assert!(store.iter().all(|(_, r)| !r.exercise().is_empty() && r.duration() > 0));
    }

    #[test]
    fn test_categories_are_independent() {
        let mut store = WorkoutStore::default();
        store.log(Category::WarmUp, "Stretching", "5").unwrap();
        store.log(Category::CoolDown, "Walking", "10").unwrap();

        let warmups = store.records(Category::WarmUp);
        let cooldowns = store.records(Category::CoolDown);
        assert_eq!(warmups.len(), 1);
        assert_eq!(warmups[0].exercise(), "Stretching");
        assert_eq!(cooldowns.len(), 1);
        assert_eq!(cooldowns[0].exercise(), "Walking");
        assert!(store.records(Category::Workout).is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = WorkoutStore::default();
        store.log(Category::Workout, "Squats", "10").unwrap();
        store.log(Category::Workout, "Plank", "5").unwrap();

        let names: Vec<&str> = store
            .records(Category::Workout)
            .iter()
            .map(WorkoutRecord::exercise)
            .collect();
        assert_eq!(names, vec!["Squats", "Plank"]);
    }

    #[test]
    fn test_iter_orders_by_category() {
        let mut store = WorkoutStore::default();
        store.log(Category::CoolDown, "Walking", "10").unwrap();
        store.log(Category::WarmUp, "Stretching", "5").unwrap();
        store.log(Category::Workout, "Rowing", "25").unwrap();

        let order: Vec<Category> = store.iter().map(|(category, _)| category).collect();
        assert_eq!(order, vec![Category::WarmUp, Category::Workout, Category::CoolDown]);
        assert_eq!(store.all().len(), 3);
    }

    #[test]
    fn test_add_at_keeps_timestamp() {
        let mut store = WorkoutStore::default();
        let when = Local.with_ymd_and_hms(2024, 5, 1, 7, 30, 0).unwrap();
        let workout = validate_workout("Yoga", "30").unwrap();

        let record = store.add_at(Category::CoolDown, workout, when);
        assert_eq!(record.timestamp(), when);
    }
}
