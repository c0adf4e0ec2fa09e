use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BlockCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pippin block`.
pub async fn handle(
    action: &BlockCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        BlockCommands::Add { blocker, blocked } => {
            ctx.service.add_block(&ctx.tenant, *blocker, *blocked).await?;
            let blocked_by = ctx.service.blockers_of(&ctx.tenant, *blocked).await?;
            output(
                &json!({ "ticket_id": blocked, "blocked_by": blocked_by }),
                flags.format,
            )
        }
        BlockCommands::Remove { blocker, blocked } => {
            ctx.service
                .remove_block(&ctx.tenant, *blocker, *blocked)
                .await?;
            output(
                &json!({ "removed": { "blocker": blocker, "blocked": blocked } }),
                flags.format,
            )
        }
    }
}
