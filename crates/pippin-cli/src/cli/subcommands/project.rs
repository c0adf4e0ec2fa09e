use clap::Subcommand;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// List projects, oldest first.
    List,
    /// Create a project.
    Create {
        /// Short key, e.g. WEB.
        key: String,
        #[arg(long)]
        name: String,
    },
    /// Delete a project with all its tickets and their blocks.
    Delete { key: String },
}
