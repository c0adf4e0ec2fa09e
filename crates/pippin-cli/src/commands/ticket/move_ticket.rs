use pippin_core::enums::Direction;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: i64,
    direction: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let direction: Direction = direction.parse()?;
    let state = ctx.service.move_ticket(&ctx.tenant, id, direction).await?;
    output(&json!({ "id": id, "state": state }), flags.format)
}
