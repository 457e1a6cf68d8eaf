//! Validation of raw form input before it reaches the workout store.

use super::errors::{DomainError, DomainResult};

/// A workout that passed validation and is ready to be stored.
///
/// Fields are private, so [`validate_workout`] is the only way to build one:
///
/// ```compile_fail
/// use acefit::domain::NewWorkout;
///
/// let forged = NewWorkout { exercise: String::new(), duration: 0 };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    exercise: String,
    duration: u32,
}

impl NewWorkout {
    pub fn exercise(&self) -> &str {
        &self.exercise
    }

    /// Duration in minutes, always greater than zero.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub(crate) fn into_parts(self) -> (String, u32) {
        (self.exercise, self.duration)
    }
}

/// Checks the raw exercise and duration text entered by the user.
///
/// Both inputs are trimmed. The first violated rule wins:
/// a blank exercise or a blank duration yields [`DomainError::EmptyFields`],
/// a duration that is not a whole number or is not positive yields
/// [`DomainError::InvalidDuration`].
///
/// # Examples
///
/// ```
/// use acefit::domain::{validate_workout, DomainError};
///
/// let workout = validate_workout("Pushups", "20").unwrap();
/// assert_eq!(workout.exercise(), "Pushups");
/// assert_eq!(workout.duration(), 20);
///
/// assert_eq!(validate_workout("", "20"), Err(DomainError::EmptyFields));
/// assert!(matches!(validate_workout("Plank", "0"), Err(DomainError::InvalidDuration(_))));
/// ```
pub fn validate_workout(exercise: &str, duration: &str) -> DomainResult<NewWorkout> {
    let exercise = exercise.trim();
    let duration = duration.trim();

    if exercise.is_empty() || duration.is_empty() {
        return Err(DomainError::EmptyFields);
    }

    Ok(NewWorkout {
        exercise: exercise.to_string(),
        duration: parse_duration(duration)?,
    })
}

fn parse_duration(raw: &str) -> DomainResult<u32> {
    let invalid = || DomainError::InvalidDuration(raw.to_string());
    let minutes = raw.parse::<i64>().map_err(|_| invalid())?;
    if minutes <= 0 {
        return Err(invalid());
    }
    u32::try_from(minutes).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let workout = validate_workout("Squats", "10").unwrap();
        assert_eq!(
            workout,
            NewWorkout {
                exercise: "Squats".to_string(),
                duration: 10
            }
        );
    }

    #[test]
    fn test_input_is_trimmed() {
        let workout = validate_workout("  Yoga ", " 30 ").unwrap();
        assert_eq!(workout.exercise(), "Yoga");
        assert_eq!(workout.duration(), 30);
    }

    #[test]
    fn test_empty_exercise_takes_precedence() {
        assert_eq!(validate_workout("", "abc"), Err(DomainError::EmptyFields));
        assert_eq!(validate_workout("", "-3"), Err(DomainError::EmptyFields));
        assert_eq!(validate_workout("\t", "10"), Err(DomainError::EmptyFields));
    }

    #[test]
    fn test_empty_duration() {
        assert_eq!(validate_workout("Running", ""), Err(DomainError::EmptyFields));
        assert_eq!(validate_workout("Running", "   "), Err(DomainError::EmptyFields));
    }

    #[test]
    fn test_non_numeric_duration() {
        for raw in ["abc", "12.5", "10min", "1e3"] {
            assert_eq!(
                validate_workout("Running", raw),
                Err(DomainError::InvalidDuration(raw.to_string())),
                "expected {raw} to be rejected"
            );
        }
    }

    #[test]
    fn test_non_positive_duration() {
        assert_eq!(
            validate_workout("Sprint", "0"),
            Err(DomainError::InvalidDuration("0".to_string()))
        );
        assert_eq!(
            validate_workout("Sprint", "-15"),
            Err(DomainError::InvalidDuration("-15".to_string()))
        );
    }

    #[test]
    fn test_duration_out_of_range() {
        assert!(validate_workout("Marathon", "4294967295").is_ok());
        assert!(matches!(
            validate_workout("Marathon", "4294967296"),
            Err(DomainError::InvalidDuration(_))
        ));
        assert!(matches!(
            validate_workout("Marathon", "99999999999999999999"),
            Err(DomainError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_explicit_plus_sign_accepted() {
        assert_eq!(validate_workout("Rowing", "+25").unwrap().duration(), 25);
    }
}
