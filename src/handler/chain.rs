//! Handler chain runner
//!
//! Runs handlers in order, stopping at the first one that does not call its
//! continuation.

use super::{BoxedHandler, Handler, Request, Response};
use crate::logger;
use std::fmt;

/// Ordered list of handlers for one route
#[derive(Default)]
pub struct Chain {
    handlers: Vec<BoxedHandler>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler to the end of the chain
    #[must_use]
    pub fn then(mut self, handler: impl Handler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the chain against one request
    ///
    /// Returns `true` when every handler called its continuation.
    pub fn run(&self, req: &mut Request, res: &mut Response) -> bool {
        let completed = self.handlers.iter().all(|handler| {
            let mut proceed = false;
            handler(req, res, &mut || proceed = true);
            proceed
        });

        let status = res.status().map_or(0, |s| s.as_u16());
        logger::log_chain_result(req.method.as_str(), &req.path, status);
        completed
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
