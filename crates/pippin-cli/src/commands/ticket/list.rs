use pippin_core::board::{ProjectFilter, SprintFilter, TicketFilter};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    project: Option<&str>,
    sprint: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = TicketFilter {
        project: ProjectFilter::parse(project),
        sprint: SprintFilter::parse(sprint),
    };
    let tickets = ctx.service.list_tickets(&ctx.tenant, &filter).await?;
    output(&tickets, flags.format)
}
