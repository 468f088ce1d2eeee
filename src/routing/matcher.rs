//! Path matching against the ordered route table.

use thiserror::Error;

use crate::routing::route::{ParamName, Route, Segment};

/// Raw string bindings captured during a match.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawParams {
    /// Value bound to `:breed1`, if the template captures it.
    pub breed1: Option<String>,
    /// Value bound to `:breed2`, if the template captures it.
    pub breed2: Option<String>,
    /// Value bound to `:count`, still uncoerced.
    pub count: Option<String>,
}

impl RawParams {
    fn set(&mut self, name: ParamName, value: String) {
        match name {
            ParamName::Breed1 => self.breed1 = Some(value),
            ParamName::Breed2 => self.breed2 = Some(value),
            ParamName::Count => self.count = Some(value),
        }
    }

    /// Coerce captured values once, before dispatch.
    pub fn validate(self) -> Result<Params, ParamError> {
        let count = match self.count {
            Some(raw) => Some(
                raw.parse::<usize>()
                    .map_err(|_| ParamError::BadCount(raw))?,
            ),
            None => None,
        };
        Ok(Params {
            breed1: self.breed1,
            breed2: self.breed2,
            count,
        })
    }
}

/// Validated parameter bindings handed to a handler.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params {
    /// Primary breed.
    pub breed1: Option<String>,
    /// Sub-breed qualifier.
    pub breed2: Option<String>,
    /// Requested element count (non-negative).
    pub count: Option<usize>,
}

/// Parameter coercion failure; rendered as a client error upstream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    /// The `:count` segment was not a non-negative integer.
    #[error("count must be a non-negative integer, got {0:?}")]
    BadCount(String),
}

/// Find the first route whose template matches `path`, binding its dynamic
/// segments. Returns `None` when no table entry matches.
pub fn match_route<'a>(path: &str, routes: &'a [Route]) -> Option<(&'a Route, RawParams)> {
    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    routes
        .iter()
        .find_map(|route| bind(route.template.segments(), &parts).map(|params| (route, params)))
}

/// Match one template against path segments. Literal segments require exact
/// equality; dynamic segments always succeed and bind their value.
fn bind(segments: &[Segment], parts: &[&str]) -> Option<RawParams> {
    if segments.len() != parts.len() {
        return None;
    }
    let mut params = RawParams::default();
    for (segment, part) in segments.iter().zip(parts) {
        match segment {
            Segment::Literal(literal) => {
                if literal != part {
                    return None;
                }
            }
            Segment::Param(name) => params.set(*name, (*part).to_string()),
        }
    }
    Some(params)
}
