//! Handler helper factories
//!
//! Every function here takes its configuration up front and returns a
//! stateless handler ready to be placed in a chain.

mod check;
mod create;
mod fetch;
mod filter;
mod log;
mod respond;

pub use check::{check, check_body, check_params, check_query, check_with};
pub use create::create;
pub use fetch::{db, is_falsy, FetchResult, Outcome};
pub use filter::{allow, rm};
pub use log::log;
pub use respond::{bad_request, error, noop};

/// List of section keys a helper operates on
///
/// A single key converts into a one-element list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Keys(Vec<String>);

impl Keys {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Keys {
    fn from(key: &str) -> Self {
        Self(vec![key.to_string()])
    }
}

impl From<String> for Keys {
    fn from(key: String) -> Self {
        Self(vec![key])
    }
}

impl From<Vec<String>> for Keys {
    fn from(keys: Vec<String>) -> Self {
        Self(keys)
    }
}

impl From<Vec<&str>> for Keys {
    fn from(keys: Vec<&str>) -> Self {
        Self(keys.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Keys {
    fn from(keys: &[&str]) -> Self {
        Self(keys.iter().map(|k| (*k).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Keys {
    fn from(keys: [&str; N]) -> Self {
        Self(keys.iter().map(|k| (*k).to_string()).collect())
    }
}
