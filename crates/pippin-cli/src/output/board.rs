//! Side-by-side rendering of the four board columns.

use pippin_core::board::{Board, SprintFilter};
use pippin_core::entities::TicketDetail;
use pippin_core::enums::TicketState;

use super::table::{TableOptions, render_entity_table};

const HEADERS: [&str; 4] = ["Backlog", "To do", "In progress", "Done"];

/// Render a board as a summary line followed by one column per state.
#[must_use]
pub fn render_board(board: &Board, options: TableOptions) -> String {
    let sprint = match (board.sprint, board.window) {
        (SprintFilter::Current, Some(window)) => format!(
            "sprint {} to {}",
            window.start.format("%Y-%m-%d"),
            window.end.format("%Y-%m-%d")
        ),
        _ => "all sprints".to_string(),
    };
    let summary = format!(
        "{} · project {} · theme {} · {} tickets",
        sprint,
        board.project,
        board.theme,
        board.columns.len()
    );

    let columns = TicketState::ALL.map(|state| board.columns.column(state));
    let depth = columns.iter().map(|c| c.len()).max().unwrap_or(0);
    let rows = (0..depth)
        .map(|i| {
            columns
                .iter()
                .map(|column| column.get(i).map_or_else(String::new, card_label))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    format!("{summary}\n\n{}", render_entity_table(&HEADERS, &rows, options))
}

/// `#12 [WEB] Fix login (blocked by T-3 (API))`
fn card_label(ticket: &TicketDetail) -> String {
    let mut label = format!(
        "#{} [{}] {}",
        ticket.ticket.id, ticket.project_key, ticket.ticket.title
    );
    if ticket.is_blocked() {
        let blockers = ticket
            .blocked_by
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        label.push_str(&format!(" (blocked by {blockers})"));
    }
    label
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pippin_core::board::{BoardColumns, ProjectFilter};
    use pippin_core::comments::CommentLog;
    use pippin_core::entities::{Blocker, Ticket};
    use pippin_core::enums::Theme;
    use pippin_core::sprint::SprintWindow;
    use pippin_core::tenant::TenantId;

    use super::*;

    fn ticket(id: i64, state: TicketState, blocked_by: Vec<Blocker>) -> TicketDetail {
        let at = Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap();
        TicketDetail {
            ticket: Ticket {
                id,
                tenant: TenantId::new("demo").unwrap(),
                project_id: 1,
                title: format!("Task {id}"),
                body: String::new(),
                state,
                assignee: String::new(),
                comments: CommentLog::default(),
                created_at: at,
                updated_at: at,
            },
            project_key: "WEB".into(),
            blocked_by,
        }
    }

    #[test]
    fn blocked_cards_show_their_blockers() {
        let card = ticket(
            2,
            TicketState::Todo,
            vec![Blocker {
                ticket_id: 1,
                project_key: "API".into(),
            }],
        );
        assert_eq!(card_label(&card), "#2 [WEB] Task 2 (blocked by T-1 (API))");
    }

    #[test]
    fn board_lists_cards_under_their_column() {
        let board = Board {
            theme: Theme::Forest,
            sprint: SprintFilter::Current,
            project: ProjectFilter::All,
            window: Some(SprintWindow {
                start: Utc.with_ymd_and_hms(2025, 1, 8, 0, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
            }),
            projects: Vec::new(),
            columns: [
                ticket(1, TicketState::Backlog, Vec::new()),
                ticket(2, TicketState::Done, Vec::new()),
                ticket(3, TicketState::Backlog, Vec::new()),
            ]
            .into_iter()
            .collect::<BoardColumns>(),
        };

        let out = render_board(
            &board,
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let mut lines = out.lines();
        let summary = lines.next().unwrap();
        assert!(summary.contains("sprint 2025-01-08 to 2025-01-15"));
        assert!(summary.contains("theme forest"));
        assert!(summary.contains("3 tickets"));

        let body: Vec<&str> = out.lines().skip(2).collect();
        assert!(body[0].starts_with("Backlog"));
        assert_eq!(body.len(), 4, "header, divider, two card rows");
        assert!(body[2].contains("#1 [WEB]") && body[2].contains("#2 [WEB]"));
        assert!(body[3].contains("#3 [WEB]"));
    }
}
