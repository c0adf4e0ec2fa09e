use pippin_core::board::{ProjectFilter, SprintFilter, TicketFilter};

use crate::cli::root_commands::BoardArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{board::render_board, output, table_options};

/// Handle `pippin board`.
pub async fn handle(args: &BoardArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = board_filter(args.project.as_deref(), args.sprint.as_deref());
    let board = ctx.service.board(&ctx.tenant, &filter).await?;

    if flags.format == OutputFormat::Table {
        println!("{}", render_board(&board, table_options()));
        return Ok(());
    }
    output(&board, flags.format)
}

/// The board opens on the current sprint unless told otherwise.
fn board_filter(project: Option<&str>, sprint: Option<&str>) -> TicketFilter {
    TicketFilter {
        project: ProjectFilter::parse(project),
        sprint: sprint.map_or(SprintFilter::Current, |raw| SprintFilter::parse(Some(raw))),
    }
}
