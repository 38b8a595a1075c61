//! Building Management bounded context.
//!
//! Declares the events this service emits and the payload schemas they must
//! satisfy. The definitions are handed to a host event-sourcing framework
//! for validation and routing; no business rules live here.

pub mod event;
pub mod payload;
pub mod schema;
