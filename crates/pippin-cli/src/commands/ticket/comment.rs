use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, text: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let comments = ctx.service.append_comment(&ctx.tenant, id, text).await?;
    output(&json!({ "id": id, "comments": comments }), flags.format)
}
