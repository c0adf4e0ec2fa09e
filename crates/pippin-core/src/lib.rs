//! # pippin-core
//!
//! Core types for the Pippin board state engine.
//!
//! This crate is pure: no I/O, no clock reads. It provides:
//! - Tenant context (`TenantId`) that scopes every board operation
//! - Entity structs for projects, tickets, and blocking edges
//! - The fixed four-stage ticket lifecycle with index-based adjacency
//! - Sprint window arithmetic over a configured epoch and length
//! - The append-only comment log and its tolerant parser
//! - Runtime settings, board grouping, and the export snapshot
//! - Cross-cutting error types

pub mod board;
pub mod comments;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod export;
pub mod settings;
pub mod sprint;
pub mod tenant;

/// Maximum number of live projects a tenant may own.
pub const PROJECT_LIMIT: usize = 3;
