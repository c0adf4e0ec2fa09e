use pippin_core::enums::TicketState;
use pippin_db::repos::ticket::NewTicket;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub project: String,
    pub title: String,
    pub body: String,
    pub assignee: String,
    pub state: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = params
        .state
        .as_deref()
        .map(str::parse::<TicketState>)
        .transpose()?;

    let new = NewTicket {
        project_key: params.project,
        title: params.title,
        body: params.body,
        assignee: params.assignee,
        state,
    };
    let ticket = ctx.service.create_ticket(&ctx.tenant, &new).await?;
    output(&ticket, flags.format)
}
