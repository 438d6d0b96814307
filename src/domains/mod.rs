//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the Poly Pizza API operations exposed as MCP tools
//! - **resources**: reference data for building search filters

pub mod resources;
pub mod tools;
