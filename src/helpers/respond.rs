//! Response shortcuts
//!
//! Terminal handlers that emit a fixed payload or an error body.

use crate::handler::{BoxedHandler, Handler, Request, Response};
use hyper::StatusCode;
use serde_json::{json, Map, Value};

/// Default message of `bad_request`
const BAD_REQUEST: &str = "Bad request";

/// Emit `data`, or `{}` when none is given, with 200 OK
pub fn noop(data: Option<Value>) -> impl Handler {
    let payload = data.unwrap_or_else(|| Value::Object(Map::new()));
    move |_req: &mut Request, res: &mut Response, _next: &mut dyn FnMut()| {
        res.send(payload.clone());
    }
}

/// Emit `{ "error": message }` with `code`
pub fn error(code: StatusCode, message: impl Into<String>) -> BoxedHandler {
    let message = message.into();
    Box::new(
        move |_req: &mut Request, res: &mut Response, _next: &mut dyn FnMut()| {
            emit_error(res, code, &message);
        },
    )
}

/// 400 Bad Request with `message` or "Bad request"
pub fn bad_request(message: Option<&str>) -> BoxedHandler {
    error(StatusCode::BAD_REQUEST, message.unwrap_or(BAD_REQUEST).to_string())
}

pub(crate) fn emit_error(res: &mut Response, code: StatusCode, message: &str) {
    res.emit(code, json!({ "error": message }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(handler: &impl Handler) -> (Response, bool) {
        let mut req = Request::default();
        let mut res = Response::new();
        let mut continued = false;
        handler(&mut req, &mut res, &mut || continued = true);
        (res, continued)
    }

    #[test]
    fn test_noop_without_data_sends_empty_object() {
        let (res, continued) = run(&noop(None));
        assert!(!continued);
        assert_eq!(res.emissions(), 1);
        assert_eq!(res.status(), Some(StatusCode::OK));
        assert_eq!(res.body(), Some(&json!({})));
    }

    #[test]
    fn test_noop_sends_given_data() {
        let (res, _) = run(&noop(Some(json!({ "status": "great" }))));
        assert_eq!(res.emissions(), 1);
        assert_eq!(res.body(), Some(&json!({ "status": "great" })));
    }

    #[test]
    fn test_noop_is_reusable() {
        let handler = noop(Some(json!([1, 2])));
        let (first, _) = run(&handler);
        let (second, _) = run(&handler);
        assert_eq!(first.body(), second.body());
    }

    #[test]
    fn test_bad_request_default_message() {
        let (res, continued) = run(&bad_request(None));
        assert!(!continued);
        assert_eq!(res.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(res.body(), Some(&json!({ "error": "Bad request" })));
    }

    #[test]
    fn test_bad_request_custom_message() {
        let (res, _) = run(&bad_request(Some("Missing id")));
        assert_eq!(res.body(), Some(&json!({ "error": "Missing id" })));
    }

    #[test]
    fn test_message_owned_by_handler() {
        let handler = {
            let message = format!("Missing {}", "id");
            bad_request(Some(message.as_str()))
        };
        let (res, _) = run(&handler);
        assert_eq!(res.body(), Some(&json!({ "error": "Missing id" })));
    }

    #[test]
    fn test_error_uses_given_status() {
        let (res, _) = run(&error(StatusCode::FORBIDDEN, "Nope"));
        assert_eq!(res.status(), Some(StatusCode::FORBIDDEN));
        assert_eq!(res.body(), Some(&json!({ "error": "Nope" })));
    }
}
