use anyhow::Context;
use chrono::{NaiveDate, Utc};
use pippin_core::enums::Theme;
use pippin_core::settings::{Settings, SettingsUpdate};
use pippin_core::sprint::SprintWindow;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SettingsCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct SettingsView<'a> {
    #[serde(flatten)]
    settings: &'a Settings,
    current_sprint: SprintWindow,
    database_path: &'a str,
}

/// Handle `pippin settings`.
pub async fn handle(
    action: &SettingsCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let SettingsCommands::Update {
        sprint_length_days,
        sprint_epoch,
        theme,
    } = action
    {
        let update = parse_update(*sprint_length_days, sprint_epoch.as_deref(), theme.as_deref())?;
        if update.is_empty() {
            anyhow::bail!(
                "At least one of --sprint-length-days, --sprint-epoch, or --theme must be provided"
            );
        }
        ctx.service.update_settings(&update);
    }

    let settings = ctx.service.settings();
    let view = SettingsView {
        settings,
        current_sprint: settings.current_window(Utc::now()),
        database_path: &ctx.config.database.path,
    };
    output(&view, flags.format)
}

fn parse_update(
    sprint_length_days: Option<u32>,
    sprint_epoch: Option<&str>,
    theme: Option<&str>,
) -> anyhow::Result<SettingsUpdate> {
    let sprint_epoch = sprint_epoch
        .map(|raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .with_context(|| format!("invalid sprint epoch '{raw}', expected YYYY-MM-DD"))
        })
        .transpose()?;
    let theme = theme.map(str::parse::<Theme>).transpose()?;

    Ok(SettingsUpdate {
        sprint_length_days,
        sprint_epoch,
        theme,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_all_fields() {
        let update = parse_update(Some(14), Some("2025-03-03"), Some("forest")).unwrap();
        assert_eq!(
            update,
            SettingsUpdate {
                sprint_length_days: Some(14),
                sprint_epoch: NaiveDate::from_ymd_opt(2025, 3, 3),
                theme: Some(Theme::Forest),
            }
        );
    }

    #[test]
    fn rejects_malformed_epoch_and_unknown_theme() {
        let err = parse_update(None, Some("03/03/2025"), None).unwrap_err();
        assert!(err.to_string().contains("invalid sprint epoch"));
        assert!(parse_update(None, None, Some("neon")).is_err());
    }

    #[test]
    fn nothing_given_is_empty() {
        assert!(parse_update(None, None, None).unwrap().is_empty());
    }
}
