//! Building Management Catalog — event-type and payload-schema machinery.
//!
//! This crate defines the catalog that maps event-type identifiers to
//! validated payload schemas. It knows nothing about any particular bounded
//! context and contains no infrastructure code; event persistence, payload
//! validation at runtime, and message brokering live in the host framework
//! that consumes the catalog's `(event type, JSON Schema)` pairs.

pub mod catalog;
pub mod error;
pub mod event_type;
pub mod field;
pub mod payload;
pub mod vocabulary;
