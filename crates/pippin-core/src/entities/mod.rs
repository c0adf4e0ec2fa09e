//! Entity structs for the Pippin board.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON export and schema
//! validation.

mod block;
mod project;
mod ticket;

pub use block::{Blocker, BlockingEdge};
pub use project::Project;
pub use ticket::{Ticket, TicketDetail};
