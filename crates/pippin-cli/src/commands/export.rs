use anyhow::Context;
use chrono::Utc;
use pippin_core::export::export_file_name;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `pippin export`.
pub async fn handle(args: &ExportArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.service.export(&ctx.tenant).await?;

    if !args.save {
        return output(&snapshot, flags.format);
    }

    let file_name = export_file_name(Utc::now().date_naive());
    let body = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(&file_name, body).with_context(|| format!("failed to write {file_name}"))?;

    tracing::info!(tenant = %ctx.tenant, file = %file_name, "export written");
    output(
        &json!({
            "file": file_name,
            "projects": snapshot.projects.len(),
            "tickets": snapshot.tickets.len(),
        }),
        flags.format,
    )
}
