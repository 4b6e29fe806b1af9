//! Field filters
//!
//! Handlers that trim a request section before later handlers see it.
//! Both always continue the chain.

use super::Keys;
use crate::handler::{BoxedHandler, Handler, Request, Response, Section};

/// Remove `keys` from `section` when present
pub fn rm(section: Section, keys: impl Into<Keys>) -> BoxedHandler {
    Box::new(remover(section, keys.into()))
}

/// Remove every key of `section` that is not in `keys`
pub fn allow(section: Section, keys: impl Into<Keys>) -> BoxedHandler {
    Box::new(allower(section, keys.into()))
}

fn remover(section: Section, keys: Keys) -> impl Handler {
    move |req: &mut Request, _res: &mut Response, next: &mut dyn FnMut()| {
        if let Some(fields) = req.section_mut(section) {
            for key in keys.iter() {
                fields.remove(key);
            }
        }
        next();
    }
}

fn allower(section: Section, keys: Keys) -> impl Handler {
    move |req: &mut Request, _res: &mut Response, next: &mut dyn FnMut()| {
        if let Some(fields) = req.section_mut(section) {
            fields.retain(|key, _| keys.contains(key));
        }
        next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::Method;
    use serde_json::{json, Map, Value};

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn run(handler: &impl Handler, req: &mut Request) -> bool {
        let mut res = Response::new();
        let mut continued = false;
        handler(req, &mut res, &mut || continued = true);
        assert!(!res.is_sent());
        continued
    }

    #[test]
    fn test_rm_deletes_present_key() {
        let mut req =
            Request::new(Method::POST, "/").with_body(body(json!({ "testKey": true, "b": 1 })));
        assert!(run(&rm(Section::Body, "testKey"), &mut req));
        assert_eq!(req.body, Some(body(json!({ "b": 1 }))));
    }

    #[test]
    fn test_rm_missing_key_still_continues() {
        let mut req = Request::new(Method::POST, "/").with_body(body(json!({ "b": 1 })));
        assert!(run(&rm(Section::Body, "testKey"), &mut req));
        assert_eq!(req.body, Some(body(json!({ "b": 1 }))));
    }

    #[test]
    fn test_rm_absent_section_continues() {
        let mut req = Request::new(Method::POST, "/");
        assert!(run(&rm(Section::Body, "testKey"), &mut req));
        assert!(req.body.is_none());
    }

    #[test]
    fn test_rm_removes_falsy_values_too() {
        let mut req =
            Request::new(Method::POST, "/").with_body(body(json!({ "zero": 0, "keep": 1 })));
        assert!(run(&rm(Section::Body, "zero"), &mut req));
        assert_eq!(req.body, Some(body(json!({ "keep": 1 }))));
    }

    #[test]
    fn test_allow_keeps_only_listed_keys() {
        let mut req = Request::new(Method::POST, "/").with_body(body(json!({
            "stringKey": "s",
            "numberKey": 1,
            "objectKey": { "a": 1 }
        })));
        assert!(run(&allow(Section::Body, ["stringKey"]), &mut req));
        assert_eq!(req.body, Some(body(json!({ "stringKey": "s" }))));
    }

    #[test]
    fn test_allow_absent_section_continues() {
        let mut req = Request::new(Method::POST, "/");
        assert!(run(&allow(Section::Body, ["stringKey"]), &mut req));
        assert!(req.body.is_none());

        let mut req = Request::new(Method::POST, "/").without(Section::Query);
        assert!(run(&allow(Section::Query, ["a"]), &mut req));
        assert!(req.query.is_none());
    }

    #[test]
    fn test_filters_are_idempotent() {
        let original = body(json!({ "a": 1, "b": 2, "c": 3 }));

        let mut once = Request::new(Method::POST, "/").with_query(original.clone());
        let mut twice = Request::new(Method::POST, "/").with_query(original);

        let strip = rm(Section::Query, ["a"]);
        let keep = allow(Section::Query, ["b", "a"]);

        run(&strip, &mut once);
        run(&keep, &mut once);
        for _ in 0..2 {
            run(&strip, &mut twice);
            run(&keep, &mut twice);
        }

        assert_eq!(once.query, twice.query);
        assert_eq!(once.query, Some(body(json!({ "b": 2 }))));
    }
}
