//! Request model
//!
//! A request exposes three independent sections (`params`, `body`, `query`),
//! each an optional JSON mapping that handlers may inspect or trim.

use crate::access::{self, Path};
use hyper::http::request::Parts;
use hyper::Method;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Named key/value group of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Params,
    Body,
    Query,
}

impl Section {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Params => "params",
            Self::Body => "body",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "params" => Ok(Self::Params),
            "body" => Ok(Self::Body),
            "query" => Ok(Self::Query),
            other => Err(format!("Unknown request section: {other}")),
        }
    }
}

/// Errors raised while building a request from HTTP parts
#[derive(Debug)]
pub enum RequestError {
    /// Body bytes are not valid JSON
    InvalidJson(serde_json::Error),
    /// Body parsed, but is not a JSON object
    NotAnObject,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson(e) => write!(f, "Invalid JSON body: {e}"),
            Self::NotAnObject => f.write_str("Request body must be a JSON object"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidJson(e) => Some(e),
            Self::NotAnObject => None,
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidJson(e)
    }
}

/// Per-request data shared by every handler in a chain
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub params: Option<Map<String, Value>>,
    pub body: Option<Map<String, Value>>,
    pub query: Option<Map<String, Value>>,
}

impl Default for Request {
    fn default() -> Self {
        Self::new(Method::GET, "/")
    }
}

impl Request {
    /// Create a request with empty `params`/`query` and no body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Some(Map::new()),
            body: None,
            query: Some(Map::new()),
        }
    }

    /// Build a request from HTTP head parts and a collected body buffer
    ///
    /// The query string is decoded into string values. An empty body leaves
    /// the `body` section absent.
    pub fn from_parts(parts: &Parts, body: &[u8]) -> Result<Self, RequestError> {
        let mut req = Self::new(parts.method.clone(), parts.uri.path());
        req.query = Some(parts.uri.query().map(parse_query).unwrap_or_default());

        if !body.iter().all(u8::is_ascii_whitespace) {
            match serde_json::from_slice::<Value>(body)? {
                Value::Object(map) => req.body = Some(map),
                _ => return Err(RequestError::NotAnObject),
            }
        }

        Ok(req)
    }

    #[must_use]
    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = Some(params);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Map<String, Value>) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: Map<String, Value>) -> Self {
        self.query = Some(query);
        self
    }

    #[must_use]
    pub fn without(mut self, section: Section) -> Self {
        *self.section_slot(section) = None;
        self
    }

    pub const fn section(&self, section: Section) -> Option<&Map<String, Value>> {
        match section {
            Section::Params => self.params.as_ref(),
            Section::Body => self.body.as_ref(),
            Section::Query => self.query.as_ref(),
        }
    }

    pub fn section_mut(&mut self, section: Section) -> Option<&mut Map<String, Value>> {
        self.section_slot(section).as_mut()
    }

    fn section_slot(&mut self, section: Section) -> &mut Option<Map<String, Value>> {
        match section {
            Section::Params => &mut self.params,
            Section::Body => &mut self.body,
            Section::Query => &mut self.query,
        }
    }

    /// Read a value by path, e.g. `body.user.name` or `params.id`
    ///
    /// The first segment selects a section, or the `method`/`path` scalars.
    /// A bare section name yields the whole section.
    pub fn lookup(&self, path: &str) -> Option<Cow<'_, Value>> {
        let path = Path::parse(path);
        let (head, rest) = path.split_first()?;

        match head {
            "method" if rest.is_empty() => {
                Some(Cow::Owned(Value::String(self.method.to_string())))
            }
            "path" if rest.is_empty() => Some(Cow::Owned(Value::String(self.path.clone()))),
            name => {
                let section = self.section(name.parse().ok()?)?;
                match rest.split_first() {
                    None => Some(Cow::Owned(Value::Object(section.clone()))),
                    Some((key, rest)) => {
                        access::descend(section.get(key)?, rest).map(Cow::Borrowed)
                    }
                }
            }
        }
    }
}

/// Decode `a=1&b=two+words` into a string map; later duplicates win
fn parse_query(query: &str) -> Map<String, Value> {
    form_urlencoded::parse(query.as_bytes())
        .map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
        .collect()
}
