use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let ticket = ctx.service.get_ticket(&ctx.tenant, id).await?;
    output(&ticket, flags.format)
}
