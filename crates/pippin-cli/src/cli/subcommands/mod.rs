mod block;
mod project;
mod settings;
mod ticket;

pub use block::BlockCommands;
pub use project::ProjectCommands;
pub use settings::SettingsCommands;
pub use ticket::TicketCommands;
