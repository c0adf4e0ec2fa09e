use clap::{Args, Subcommand};

use crate::cli::subcommands::{BlockCommands, ProjectCommands, SettingsCommands, TicketCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Projects (at most three per account).
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Tickets.
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },
    /// Blocking relations between tickets.
    Block {
        #[command(subcommand)]
        action: BlockCommands,
    },
    /// Show the four-column board.
    Board(BoardArgs),
    /// Sprint and theme settings for this invocation.
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
    /// Dump every project and ticket as JSON.
    Export(ExportArgs),
    /// Print the JSON Schema of the export snapshot.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct BoardArgs {
    /// Project key, or ALL.
    #[arg(long)]
    pub project: Option<String>,
    /// `current` (default) or `all`.
    #[arg(long)]
    pub sprint: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Write to `pippin-export-<date>.json` in the working directory.
    #[arg(long)]
    pub save: bool,
}
