//! Repository modules implementing board operations.
//!
//! Each module adds methods to `BoardService` via `impl BoardService` blocks.

pub mod block;
pub mod board;
pub mod comment;
pub mod export;
pub mod project;
pub mod ticket;
