//! Field presence checks
//!
//! A check handler verifies that every listed key exists in one request
//! section (optionally passing a predicate) and answers 400 listing every
//! failing key at once.

use super::respond::emit_error;
use super::Keys;
use crate::handler::{BoxedHandler, Handler, Request, Response, Section};
use hyper::StatusCode;
use serde_json::{Map, Value};

/// Check that `keys` are present in `section`
///
/// `null`, `0`, `false` and `""` count as present. An absent section passes.
pub fn check(section: Section, keys: impl Into<Keys>) -> BoxedHandler {
    Box::new(checker(
        section,
        keys.into(),
        None::<fn(&Value, &Map<String, Value>) -> bool>,
    ))
}

/// Like `check`, but each present value must also satisfy `predicate`
///
/// The predicate receives the value and the whole section.
pub fn check_with<P>(section: Section, keys: impl Into<Keys>, predicate: P) -> BoxedHandler
where
    P: Fn(&Value, &Map<String, Value>) -> bool + Send + Sync + 'static,
{
    Box::new(checker(section, keys.into(), Some(predicate)))
}

pub fn check_params(keys: impl Into<Keys>) -> BoxedHandler {
    check(Section::Params, keys)
}

pub fn check_body(keys: impl Into<Keys>) -> BoxedHandler {
    check(Section::Body, keys)
}

pub fn check_query(keys: impl Into<Keys>) -> BoxedHandler {
    check(Section::Query, keys)
}

fn checker<P>(section: Section, keys: Keys, predicate: Option<P>) -> impl Handler
where
    P: Fn(&Value, &Map<String, Value>) -> bool + Send + Sync + 'static,
{
    move |req: &mut Request, res: &mut Response, next: &mut dyn FnMut()| {
        let Some(fields) = req.section(section) else {
            next();
            return;
        };

        let missing: Vec<&str> = keys
            .iter()
            .filter(|key| match fields.get(*key) {
                None => true,
                Some(value) => predicate.as_ref().is_some_and(|p| !p(value, fields)),
            })
            .collect();

        if missing.is_empty() {
            next();
        } else {
            let message = format!("Missing {} from {section}.", missing.join(", "));
            emit_error(res, StatusCode::BAD_REQUEST, &message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::Method;
    use serde_json::json;

    fn body_request(body: Value) -> Request {
        match body {
            Value::Object(map) => Request::new(Method::POST, "/").with_body(map),
            _ => panic!("expected object"),
        }
    }

    fn run(handler: &impl Handler, req: &mut Request) -> (Response, bool) {
        let mut res = Response::new();
        let mut continued = false;
        handler(req, &mut res, &mut || continued = true);
        (res, continued)
    }

    #[test]
    fn test_present_key_continues() {
        let mut req = body_request(json!({ "testKey": true }));
        let (res, continued) = run(&check_body("testKey"), &mut req);
        assert!(continued);
        assert!(!res.is_sent());
    }

    #[test]
    fn test_missing_key_sends_400() {
        let mut req = body_request(json!({ "testKey": true }));
        let (res, continued) = run(&check_body("fakeKey"), &mut req);
        assert!(!continued);
        assert_eq!(res.emissions(), 1);
        assert_eq!(res.status(), Some(StatusCode::BAD_REQUEST));
        assert_eq!(
            res.body(),
            Some(&json!({ "error": "Missing fakeKey from body." }))
        );
    }

    #[test]
    fn test_falsy_values_are_present() {
        let mut req = body_request(json!({
            "zeroKey": 0,
            "emptyKey": "",
            "falseKey": false,
            "nullKey": null
        }));
        let handler = check_body(["zeroKey", "emptyKey", "falseKey", "nullKey"]);
        let (_, continued) = run(&handler, &mut req);
        assert!(continued);
    }

    #[test]
    fn test_all_missing_keys_listed_together() {
        let mut req = body_request(json!({ "b": 1 }));
        let (res, _) = run(&check_body(vec!["a", "b", "c"]), &mut req);
        assert_eq!(res.emissions(), 1);
        assert_eq!(res.body(), Some(&json!({ "error": "Missing a, c from body." })));
    }

    #[test]
    fn test_absent_section_passes() {
        let mut req = Request::new(Method::GET, "/");
        let (res, continued) = run(&check_body("anything"), &mut req);
        assert!(continued);
        assert!(!res.is_sent());
    }

    #[test]
    fn test_removed_section_passes() {
        let mut req = Request::new(Method::GET, "/").without(Section::Params);
        let (res, continued) = run(&check_params("testParam"), &mut req);
        assert!(continued);
        assert!(!res.is_sent());
    }

    #[test]
    fn test_keys_from_local_string() {
        let handler = {
            let key = String::from("fakeKey");
            check_body(key.as_str())
        };
        let mut req = body_request(json!({ "testKey": true }));
        let (res, _) = run(&handler, &mut req);
        assert_eq!(
            res.body(),
            Some(&json!({ "error": "Missing fakeKey from body." }))
        );
    }

    #[test]
    fn test_params_section_named_in_message() {
        let mut req = Request::new(Method::GET, "/");
        let (res, continued) = run(&check_params("testParam"), &mut req);
        assert!(!continued);
        assert_eq!(
            res.body(),
            Some(&json!({ "error": "Missing testParam from params." }))
        );
    }

    #[test]
    fn test_predicate_failure_counts_as_missing() {
        let mut req = body_request(json!({ "age": 12, "name": "ada" }));
        let handler = check_with(Section::Body, ["age", "name"], |value, _fields| {
            value.as_u64().map_or(true, |age| age >= 18)
        });
        let (res, continued) = run(&handler, &mut req);
        assert!(!continued);
        assert_eq!(res.body(), Some(&json!({ "error": "Missing age from body." })));
    }

    #[test]
    fn test_predicate_sees_whole_section() {
        let mut req = body_request(json!({ "password": "x", "confirm": "x" }));
        let handler = check_with(Section::Body, "confirm", |value, fields| {
            fields.get("password") == Some(value)
        });
        let (_, continued) = run(&handler, &mut req);
        assert!(continued);
    }

    #[test]
    fn test_predicate_not_called_for_missing_key() {
        let mut req = body_request(json!({}));
        let handler = check_with(Section::Body, "id", |_value, _fields| true);
        let (res, continued) = run(&handler, &mut req);
        assert!(!continued);
        assert_eq!(res.body(), Some(&json!({ "error": "Missing id from body." })));
    }
}
