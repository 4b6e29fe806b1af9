//! Request value logging

use crate::handler::{BoxedHandler, Handler, Request, Response};
use crate::logger;

/// Log the request value at `path` (e.g. `body.user.id`) and continue
pub fn log(path: impl Into<String>) -> BoxedHandler {
    Box::new(value_logger(path.into()))
}

fn value_logger(path: String) -> impl Handler {
    move |req: &mut Request, _res: &mut Response, next: &mut dyn FnMut()| {
        logger::log_value(&path, req.lookup(&path).as_deref());
        next();
    }
}
