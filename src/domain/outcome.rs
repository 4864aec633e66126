// src/domain/outcome.rs
//! Success-or-failure value returned by every service operation.
//!
//! An [`Outcome`] is built once by the operation that decides how it ended and
//! is consumed once by the HTTP boundary. Expected failures travel inside it as
//! an [`Error`]; misuse of the value itself (a failure without an error,
//! reading the payload of a failure) is a bug and panics.

use super::errors::Error;

static NO_ERROR: Error = Error::NONE;

/// Completion of an operation: a payload of type `T` on success, an [`Error`]
/// on failure. `Outcome` (with `T = ()`) is the payload-less form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Outcome<T = ()> {
    state: State<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State<T> {
    Success(T),
    Failure(Error),
}

impl Outcome<()> {
    /// Success without a payload.
    pub const fn ok() -> Self {
        Self {
            state: State::Success(()),
        }
    }
}

impl<T> Outcome<T> {
    pub const fn success(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    /// # Panics
    ///
    /// Panics when `error` is [`Error::NONE`].
    #[track_caller]
    pub fn failure(error: Error) -> Self {
        assert!(
            !error.is_none(),
            "a failed outcome must carry an error other than Error::NONE"
        );
        Self {
            state: State::Failure(error),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.state, State::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// # Panics
    ///
    /// Panics when the outcome is a failure.
    #[must_use]
    #[track_caller]
    pub fn value(&self) -> &T {
        match &self.state {
            State::Success(value) => value,
            State::Failure(error) => {
                panic!("value of a failed outcome cannot be accessed (error: {error})")
            }
        }
    }

    /// # Panics
    ///
    /// Panics when the outcome is a failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self.state {
            State::Success(value) => value,
            State::Failure(error) => {
                panic!("value of a failed outcome cannot be accessed (error: {error})")
            }
        }
    }

    /// The attached error, or [`Error::NONE`] for a success.
    #[must_use]
    pub fn error(&self) -> &Error {
        match &self.state {
            State::Success(_) => &NO_ERROR,
            State::Failure(error) => error,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self.state {
            State::Success(value) => Outcome::success(f(value)),
            State::Failure(error) => Outcome {
                state: State::Failure(error),
            },
        }
    }

    /// Converts into a plain `Result` so callers can use `?`.
    ///
    /// # Errors
    ///
    /// Returns the attached error when the outcome is a failure.
    pub fn into_result(self) -> Result<T, Error> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Error> for Outcome<T> {
    #[track_caller]
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    #[track_caller]
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> Error {
        Error::new("Poll.NotFound", "No Poll Was Found With The Given Id")
    }

    #[test]
    fn unit_success_has_no_error() {
        let outcome = Outcome::ok();
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.error(), &Error::NONE);
    }

    #[test]
    fn success_exposes_value() {
        let outcome = Outcome::success(vec![1, 2, 3]);
        assert!(outcome.is_success());
        assert_eq!(outcome.value(), &vec![1, 2, 3]);
        assert!(outcome.error().is_none());
        assert_eq!(outcome.into_value(), vec![1, 2, 3]);
    }

    #[test]
    fn failure_keeps_error() {
        let outcome: Outcome<u32> = Outcome::failure(not_found());
        assert!(outcome.is_failure());
        assert!(!outcome.is_success());
        assert_eq!(outcome.error(), &not_found());
    }

    #[test]
    #[should_panic(expected = "Error::NONE")]
    fn failure_with_none_panics() {
        let _ = Outcome::<()>::failure(Error::NONE);
    }

    #[test]
    #[should_panic(expected = "failed outcome")]
    fn value_of_failure_panics() {
        let outcome: Outcome<String> = Outcome::failure(not_found());
        let _ = outcome.value();
    }

    #[test]
    #[should_panic(expected = "Poll.NotFound")]
    fn into_value_of_failure_panics() {
        let outcome: Outcome<String> = not_found().into();
        let _ = outcome.into_value();
    }

    #[test]
    fn map_only_touches_success() {
        assert_eq!(Outcome::success(2).map(|v| v * 10).into_value(), 20);

        let failed: Outcome<i32> = Outcome::failure(not_found());
        let mapped = failed.map(|v| v * 10);
        assert_eq!(mapped.error(), &not_found());
    }

    #[test]
    fn result_conversions_round_trip_state() {
        let ok: Outcome<&str> = Ok("poll").into();
        assert_eq!(ok.into_result(), Ok("poll"));

        let err: Outcome<&str> = Err(not_found()).into();
        assert_eq!(err.into_result(), Err(not_found()));
    }

    #[test]
    #[should_panic(expected = "Error::NONE")]
    fn result_with_none_error_panics() {
        let _: Outcome<()> = Err(Error::NONE).into();
    }
}
