use clap::Subcommand;

/// Settings commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SettingsCommands {
    /// Show the active settings and current sprint window.
    Show,
    /// Change settings for the rest of this invocation.
    Update {
        /// Zero or anything over 36500 is ignored.
        #[arg(long)]
        sprint_length_days: Option<u32>,
        /// YYYY-MM-DD
        #[arg(long)]
        sprint_epoch: Option<String>,
        /// warm or forest
        #[arg(long)]
        theme: Option<String>,
    },
}
