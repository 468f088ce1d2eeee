//! Request routing subsystem.
//!
//! # Responsibilities
//! - Parse route patterns into segment templates
//! - Match request paths against the ordered route table
//! - Bind dynamic segments into typed parameters
//!
//! # Design Decisions
//! - First match in table order wins; there is NO specificity-based
//!   reordering. A literal route overlapping a dynamic route of the same
//!   length must be declared first or it is unreachable. Declaration order
//!   is part of the route table's external contract.
//! - Segment counts must match exactly; no wildcard/remainder segments.
//! - Matching binds raw strings only. Coercion (the `:count` integer) runs
//!   once at dispatch, not ad hoc per handler.
//! - Explicit no-match (`None`) rather than a silent default.

mod matcher;
mod route;

pub use matcher::{match_route, ParamError, Params, RawParams};
pub use route::{default_routes, Endpoint, ParamName, Route, RouteTemplate, Segment};
