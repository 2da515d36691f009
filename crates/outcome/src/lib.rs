//! Uniform outcome container for fallible operations.
//!
//! Every fallible piece of client work, asynchronous or synchronous, is
//! wrapped into an [`Outcome`] value so calling code branches on data
//! instead of catching failures. A completion without a payload is its
//! own state ([`Outcome::Empty`]) rather than a missing value, so "no
//! payload" is never conflated with "failed".

use std::future::Future;

use thiserror::Error;

/// A value/error pair handed to [`Outcome::try_from_parts`] violated the
/// exactly-one-side rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("outcome requires exactly one of value or error, got neither")]
    Neither,
    #[error("outcome requires exactly one of value or error, got both")]
    Both,
}

/// The completion of a wrapped fallible operation.
///
/// Exactly one state holds at a time: a payload, an empty completion, or
/// the failure the operation raised. [`Outcome::Value`] and
/// [`Outcome::Empty`] are the success states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    /// The operation produced a payload.
    Value(T),
    /// The operation completed without a meaningful payload.
    Empty,
    /// The operation failed; the failure is carried verbatim.
    Failed(E),
}

impl<T, E> Outcome<T, E> {
    /// Build an outcome from an already-separated value/error pair.
    ///
    /// Exactly one side must be present; a pair with neither or both is
    /// rejected.
    pub fn try_from_parts(value: Option<T>, error: Option<E>) -> Result<Self, InvariantError> {
        match (value, error) {
            (Some(value), None) => Ok(Outcome::Value(value)),
            (None, Some(error)) => Ok(Outcome::Failed(error)),
            (None, None) => Err(InvariantError::Neither),
            (Some(_), Some(_)) => Err(InvariantError::Both),
        }
    }

    /// Like [`Outcome::try_from_parts`], but panics on a malformed pair.
    ///
    /// A malformed pair is a bug in the calling wrapper, not a runtime
    /// condition, so it fails loudly.
    #[track_caller]
    pub fn from_parts(value: Option<T>, error: Option<E>) -> Self {
        match Self::try_from_parts(value, error) {
            Ok(outcome) => outcome,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Outcome::Value(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::Empty)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// The payload, if the operation produced one.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The failure, if the operation failed.
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Consume the outcome, keeping only a produced payload.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Map the payload, leaving `Empty` and `Failed` untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Value(value) => Outcome::Value(f(value)),
            Outcome::Empty => Outcome::Empty,
            Outcome::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Map the failure, leaving the success states untouched.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Value(value) => Outcome::Value(value),
            Outcome::Empty => Outcome::Empty,
            Outcome::Failed(error) => Outcome::Failed(f(error)),
        }
    }
}

/// Conversion from an operation's native return shape into an [`Outcome`].
///
/// `Result<T, E>` maps `Ok` to [`Outcome::Value`]. `Result<Option<T>, E>`
/// additionally maps `Ok(None)` to [`Outcome::Empty`], the path for
/// operations that complete without a payload.
pub trait IntoOutcome<T, E> {
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        match self {
            Ok(value) => Outcome::Value(value),
            Err(error) => Outcome::Failed(error),
        }
    }
}

impl<T, E> IntoOutcome<T, E> for Result<Option<T>, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        match self {
            Ok(Some(value)) => Outcome::Value(value),
            Ok(None) => Outcome::Empty,
            Err(error) => Outcome::Failed(error),
        }
    }
}

/// Await `op` and capture its completion as an [`Outcome`].
///
/// Never panics and never propagates the failure; the only suspension
/// points are the operation's own.
pub async fn try_future<F, O, T, E>(op: F) -> Outcome<T, E>
where
    F: Future<Output = O>,
    O: IntoOutcome<T, E>,
{
    op.await.into_outcome()
}

/// Run `block` and capture its completion as an [`Outcome`].
pub fn try_block<O, T, E>(block: impl FnOnce() -> O) -> Outcome<T, E>
where
    O: IntoOutcome<T, E>,
{
    block().into_outcome()
}

/// Await fresh futures from `make_op` until one succeeds, retrying a
/// failed attempt up to `retry_count` more times.
///
/// Makes at most `retry_count + 1` sequential attempts and returns the
/// first success (`Value` or `Empty`) or the final failure. Each attempt
/// runs to completion before the next starts; there is no backoff and no
/// cancellation. `make_op` is called once per attempt so every attempt
/// re-runs the underlying work from the start.
pub async fn try_future_retry<F, Fut, O, T, E>(mut make_op: F, retry_count: u32) -> Outcome<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = O>,
    O: IntoOutcome<T, E>,
{
    let mut remaining = retry_count;
    loop {
        match make_op().await.into_outcome() {
            Outcome::Failed(_) if remaining > 0 => remaining -= 1,
            done => return done,
        }
    }
}
