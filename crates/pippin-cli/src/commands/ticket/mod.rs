mod comment;
mod create;
mod get;
mod list;
mod move_ticket;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TicketCommands;
use crate::context::AppContext;

/// Handle `pippin ticket`.
pub async fn handle(
    action: &TicketCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TicketCommands::List { project, sprint } => {
            list::run(project.as_deref(), sprint.as_deref(), ctx, flags).await
        }
        TicketCommands::Get { id } => get::run(*id, ctx, flags).await,
        TicketCommands::Create {
            project,
            title,
            body,
            assignee,
            state,
        } => {
            create::run(
                create::Params {
                    project: project.clone(),
                    title: title.clone(),
                    body: body.clone(),
                    assignee: assignee.clone(),
                    state: state.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        TicketCommands::Update {
            id,
            title,
            body,
            assignee,
            state,
        } => {
            update::run(
                update::Params {
                    id: *id,
                    title: title.clone(),
                    body: body.clone(),
                    assignee: assignee.clone(),
                    state: state.clone(),
                },
                ctx,
                flags,
            )
            .await
        }
        TicketCommands::Move { id, direction } => move_ticket::run(*id, direction, ctx, flags).await,
        TicketCommands::Comment { id, text } => comment::run(*id, text, ctx, flags).await,
    }
}
