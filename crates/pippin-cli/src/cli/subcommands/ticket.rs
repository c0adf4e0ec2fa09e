use clap::Subcommand;

/// Ticket commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TicketCommands {
    /// List tickets.
    List {
        /// Project key, or ALL.
        #[arg(long)]
        project: Option<String>,
        /// `current` restricts to this sprint; anything else lists all.
        #[arg(long)]
        sprint: Option<String>,
    },
    /// Get a ticket by ID.
    Get { id: i64 },
    /// Create a ticket.
    Create {
        #[arg(long)]
        project: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        body: String,
        #[arg(long, default_value = "")]
        assignee: String,
        /// Starting column (default backlog).
        #[arg(long)]
        state: Option<String>,
    },
    /// Edit ticket fields. `--state` may jump to any column.
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        assignee: Option<String>,
        #[arg(long)]
        state: Option<String>,
    },
    /// Move a ticket one column left or right.
    Move { id: i64, direction: String },
    /// Append a comment.
    Comment { id: i64, text: String },
}
