use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pippin project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::List => {
            let projects = ctx.service.list_projects(&ctx.tenant).await?;
            output(&projects, flags.format)
        }
        ProjectCommands::Create { key, name } => {
            let project = ctx.service.create_project(&ctx.tenant, key, name).await?;
            output(&project, flags.format)
        }
        ProjectCommands::Delete { key } => {
            ctx.service.delete_project(&ctx.tenant, key).await?;
            output(&json!({ "deleted": key }), flags.format)
        }
    }
}
