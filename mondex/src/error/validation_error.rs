use std::fmt::Display;

use thiserror::Error;

/// An error resulting from some validation process.
///
/// Carries every problem found, not just the first one, so callers can present the full list.
#[derive(Debug, Default, Clone, PartialEq, Eq, Error)]
pub struct ValidationError {
    problems: Vec<String>,
}

impl ValidationError {
    /// Creates a validation error with a single problem.
    pub fn problem<S>(problem: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            problems: Vec::from([problem.into()]),
        }
    }

    /// Adds a problem to the list.
    pub fn add_problem<S>(&mut self, problem: S)
    where
        S: Into<String>,
    {
        self.problems.push(problem.into());
    }

    /// All problems.
    pub fn problems(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|s| s.as_str())
    }

    /// Checks if the problem list is empty.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Converts the accumulated problems into a result: `Ok` when no problems were recorded.
    pub fn ok(self) -> Result<(), ValidationError> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: {}", self.problems.join("; "))
    }
}

impl<S> FromIterator<S> for ValidationError
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            problems: iter.into_iter().map(|s| s.into()).collect(),
        }
    }
}

#[cfg(test)]
mod validation_error_test {
    use crate::ValidationError;

    #[test]
    fn empty_error_is_ok() {
        assert!(ValidationError::default().ok().is_ok());
    }

    #[test]
    fn displays_all_problems() {
        let error = ValidationError::from_iter(["first problem", "second problem"]);
        assert_eq!(
            error.to_string(),
            "validation failed: first problem; second problem"
        );
    }

    #[test]
    fn accumulates_problems() {
        let mut error = ValidationError::problem("first");
        error.add_problem("second");
        assert_eq!(error.problems().count(), 2);
        assert!(error.ok().is_err());
    }
}
