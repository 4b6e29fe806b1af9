//! Handler model module
//!
//! Defines the request/response pair passed along a handler chain, the
//! `Handler` shape every helper returns, and a `Chain` runner that invokes
//! handlers in declared order.

mod chain;
mod request;
mod response;

pub use chain::Chain;
pub use request::{Request, RequestError, Section};
pub use response::Response;

/// One step of request processing
///
/// A handler either emits a response (terminal) or calls the continuation to
/// let the next handler run.
pub trait Handler: Fn(&mut Request, &mut Response, &mut dyn FnMut()) + Send + Sync {}

impl<F> Handler for F where F: Fn(&mut Request, &mut Response, &mut dyn FnMut()) + Send + Sync {}

/// Owned, type-erased handler
///
/// Returned by helpers that take borrowed arguments, so the handler never
/// borrows from its caller and can be stored in a `Chain`.
pub type BoxedHandler = Box<dyn Handler>;
