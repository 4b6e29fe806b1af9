//! Reusable request-handling helpers
//!
//! Each helper is a factory returning a stateless [`Handler`]. A handler gets
//! the request, the response and a continuation; it either emits a response
//! or calls the continuation so the next handler in the [`Chain`] runs.
//!
//! ```
//! use route_kit::{check_body, noop, rm, Chain, Request, Response, Section};
//! use hyper::Method;
//! use serde_json::json;
//!
//! let chain = Chain::new()
//!     .then(check_body("name"))
//!     .then(rm(Section::Body, "internal"))
//!     .then(noop(Some(json!({ "status": "great" }))));
//!
//! let body = serde_json::from_value(json!({ "name": "ada", "internal": true })).unwrap();
//! let mut req = Request::new(Method::POST, "/users").with_body(body);
//! let mut res = Response::new();
//!
//! chain.run(&mut req, &mut res);
//! assert_eq!(res.body(), Some(&json!({ "status": "great" })));
//! assert!(req.body.unwrap().get("internal").is_none());
//! ```

pub mod access;
pub mod config;
pub mod handler;
pub mod helpers;
pub mod logger;

// Re-export public types
pub use self::config::{Config, LoggingConfig, ResponseConfig};
pub use handler::{BoxedHandler, Chain, Handler, Request, RequestError, Response, Section};
pub use helpers::{
    allow, bad_request, check, check_body, check_params, check_query, check_with, create, db,
    error, log, noop, rm, FetchResult, Keys, Outcome,
};
