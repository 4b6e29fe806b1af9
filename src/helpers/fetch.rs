//! Data-fetch result normalizer
//!
//! Turns the `(error, data)` outcome of a store lookup into a response:
//! 500 on error, 404 when nothing came back, 200 with the data otherwise.
//! Callers may take over any of those branches with callbacks.

use super::respond::emit_error;
use crate::handler::Response;
use hyper::StatusCode;
use serde_json::{Map, Value};
use std::fmt;

type SuccessFn<'r> = Box<dyn FnOnce(&mut Response, Value) + 'r>;
type ErrorFn<'r, E> = Box<dyn FnOnce(&mut Response, E) + 'r>;
type NotFoundFn<'r> = Box<dyn FnOnce(&mut Response, Option<Value>) + 'r>;

/// Classified result of a data fetch
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<E> {
    /// The fetch reported an error
    Failed(E),
    /// No data, or falsy data (`null`, `false`, `0`, `""`)
    Missing(Option<Value>),
    /// An empty array
    Empty,
    /// Anything else
    Found(Value),
}

impl<E> Outcome<E> {
    /// Classify a fetch result; an error always wins over data
    pub fn classify(err: Option<E>, data: Option<Value>) -> Self {
        if let Some(err) = err {
            return Self::Failed(err);
        }
        match data {
            None => Self::Missing(None),
            Some(value) if is_falsy(&value) => Self::Missing(Some(value)),
            Some(Value::Array(items)) if items.is_empty() => Self::Empty,
            Some(value) => Self::Found(value),
        }
    }
}

/// JSON values that count as "no result"
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Single-use completion of a data fetch bound to a response
///
/// Consumed by `complete`, `finish` or the closure from `into_callback`, so
/// it can only fire once.
pub struct FetchResult<'r, E> {
    res: &'r mut Response,
    on_success: Option<SuccessFn<'r>>,
    on_error: Option<ErrorFn<'r, E>>,
    on_not_found: Option<NotFoundFn<'r>>,
}

/// Start normalizing a fetch into `res`
pub fn db<'r, E: fmt::Display>(res: &'r mut Response) -> FetchResult<'r, E> {
    FetchResult {
        res,
        on_success: None,
        on_error: None,
        on_not_found: None,
    }
}

impl<'r, E: fmt::Display> FetchResult<'r, E> {
    /// Handle found data instead of sending it with 200
    #[must_use]
    pub fn on_success(mut self, f: impl FnOnce(&mut Response, Value) + 'r) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    /// Handle the fetch error instead of sending 500
    #[must_use]
    pub fn on_error(mut self, f: impl FnOnce(&mut Response, E) + 'r) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Handle missing or empty data instead of sending 404
    #[must_use]
    pub fn on_not_found(mut self, f: impl FnOnce(&mut Response, Option<Value>) + 'r) -> Self {
        self.on_not_found = Some(Box::new(f));
        self
    }

    /// Dispatch an `(error, data)` pair
    pub fn complete(self, err: Option<E>, data: Option<Value>) {
        self.dispatch(Outcome::classify(err, data));
    }

    /// Dispatch a `Result` from an async store call
    pub fn finish(self, result: Result<Option<Value>, E>) {
        match result {
            Ok(data) => self.complete(None, data),
            Err(e) => self.complete(Some(e), None),
        }
    }

    /// Wrap into a plain `(error, data)` callback
    pub fn into_callback(self) -> impl FnOnce(Option<E>, Option<Value>) + 'r
    where
        E: 'r,
    {
        move |err, data| self.complete(err, data)
    }

    fn dispatch(self, outcome: Outcome<E>) {
        let Self {
            res,
            on_success,
            on_error,
            on_not_found,
        } = self;

        match outcome {
            Outcome::Failed(err) => match on_error {
                Some(f) => f(res, err),
                None => emit_error(res, StatusCode::INTERNAL_SERVER_ERROR, &err.to_string()),
            },
            Outcome::Missing(data) => match on_not_found {
                Some(f) => f(res, data),
                None => res.emit(StatusCode::NOT_FOUND, Value::Object(Map::new())),
            },
            Outcome::Empty => match on_not_found {
                Some(f) => f(res, Some(Value::Array(Vec::new()))),
                None => res.emit(StatusCode::NOT_FOUND, Value::Array(Vec::new())),
            },
            Outcome::Found(data) => match on_success {
                Some(f) => f(res, data),
                None => res.send(data),
            },
        }
    }
}

impl<E> fmt::Debug for FetchResult<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchResult")
            .field("on_success", &self.on_success.is_some())
            .field("on_error", &self.on_error.is_some())
            .field("on_not_found", &self.on_not_found.is_some())
            .finish_non_exhaustive()
    }
}
