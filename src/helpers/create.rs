//! Model creator
//!
//! Terminal handler that builds a document from fixed data or the request
//! body, hands it to a save operation and sends back what was stored.

use super::respond::emit_error;
use crate::handler::{Handler, Request, Response};
use hyper::StatusCode;
use serde_json::{Map, Value};
use std::fmt;

/// Save a new document and send the stored object
///
/// The document is `data` when given, else the request body if `allow_body`
/// is set, else `{}`. A save error is sent as 500 with its message.
pub fn create<S, E>(save: S, data: Option<Map<String, Value>>, allow_body: bool) -> impl Handler
where
    S: Fn(Map<String, Value>) -> Result<Value, E> + Send + Sync + 'static,
    E: fmt::Display + 'static,
{
    move |req: &mut Request, res: &mut Response, _next: &mut dyn FnMut()| {
        let document = match (&data, allow_body) {
            (Some(fixed), _) => fixed.clone(),
            (None, true) => req.body.clone().unwrap_or_default(),
            (None, false) => Map::new(),
        };

        match save(document) {
            Ok(stored) => res.send(stored),
            Err(e) => emit_error(res, StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
        }
    }
}
