use clap::Subcommand;

/// Blocking relation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BlockCommands {
    /// Mark `blocker` as blocking `blocked`.
    Add { blocker: i64, blocked: i64 },
    /// Remove a blocking relation.
    Remove { blocker: i64, blocked: i64 },
}
