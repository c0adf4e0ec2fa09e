use pippin_core::enums::TicketState;
use pippin_db::updates::ticket::TicketUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub assignee: Option<String>,
    pub state: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = TicketUpdateBuilder::new();
    if let Some(title) = params.title {
        builder = builder.title(title);
    }
    if let Some(body) = params.body {
        builder = builder.body(body);
    }
    if let Some(assignee) = params.assignee {
        builder = builder.assignee(assignee);
    }
    if let Some(state) = params.state.as_deref() {
        builder = builder.state(state.parse::<TicketState>()?);
    }

    let ticket = ctx
        .service
        .update_ticket(&ctx.tenant, params.id, &builder.build())
        .await?;
    output(&ticket, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.title.is_none()
        && params.body.is_none()
        && params.assignee.is_none()
        && params.state.is_none()
    {
        anyhow::bail!("At least one of --title, --body, --assignee, or --state must be provided");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Params {
        Params {
            id: 1,
            title: None,
            body: None,
            assignee: None,
            state: None,
        }
    }

    #[test]
    fn empty_update_is_rejected() {
        let err = validate_update_params(&params()).unwrap_err();
        assert!(err.to_string().contains("--title"));
    }

    #[test]
    fn any_single_field_is_enough() {
        let with_state = Params {
            state: Some("done".into()),
            ..params()
        };
        assert!(validate_update_params(&with_state).is_ok());
    }
}
