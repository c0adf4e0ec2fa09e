use std::num::NonZeroU32;

use chrono::{NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;

use pippin_core::board::{ProjectFilter, SprintFilter, TicketFilter};
use pippin_core::enums::{Direction, TicketState};
use pippin_core::export::ExportSnapshot;
use pippin_core::settings::Settings;
use pippin_core::tenant::TenantId;
use pippin_db::error::ErrorKind;
use pippin_db::repos::ticket::NewTicket;
use pippin_db::service::BoardService;

fn demo() -> TenantId {
    TenantId::new("demo").unwrap()
}

fn weekly_from_new_year() -> Settings {
    Settings {
        sprint_length_days: NonZeroU32::new(7).unwrap(),
        sprint_epoch: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        ..Settings::default()
    }
}

async fn service() -> BoardService {
    BoardService::new_local(":memory:", weekly_from_new_year())
        .await
        .unwrap()
}

#[tokio::test]
async fn ticket_leaves_the_board_when_its_sprint_ends() {
    let svc = service().await;
    let demo = demo();
    svc.create_project(&demo, "WEB", "Website").await.unwrap();

    let created = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
    svc.create_ticket_at(&demo, &NewTicket::new("WEB", "Fix login"), created)
        .await
        .unwrap();

    let filter = TicketFilter::board_default();

    let board = svc.board_at(&demo, &filter, created).await.unwrap();
    assert_eq!(board.columns.backlog.len(), 1);
    let window = board.window.unwrap();
    assert_eq!(window.start, Utc.with_ymd_and_hms(2025, 1, 8, 0, 0, 0).unwrap());
    assert_eq!(window.end, Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap());

    let later = Utc.with_ymd_and_hms(2025, 1, 20, 9, 0, 0).unwrap();
    let board = svc.board_at(&demo, &filter, later).await.unwrap();
    assert!(board.columns.is_empty());

    let everything = TicketFilter {
        sprint: SprintFilter::All,
        ..filter
    };
    assert_eq!(svc.board_at(&demo, &everything, later).await.unwrap().columns.len(), 1);
}

#[tokio::test]
async fn shorter_sprints_take_effect_for_the_process() {
    let mut svc = service().await;
    let demo = demo();
    svc.create_project(&demo, "WEB", "Website").await.unwrap();

    let created = Utc.with_ymd_and_hms(2025, 1, 8, 12, 0, 0).unwrap();
    svc.create_ticket_at(&demo, &NewTicket::new("WEB", "t"), created)
        .await
        .unwrap();

    let now = Utc.with_ymd_and_hms(2025, 1, 9, 12, 0, 0).unwrap();
    let current = TicketFilter::board_default();
    assert_eq!(svc.list_tickets_at(&demo, &current, now).await.unwrap().len(), 1);

    svc.update_settings(&pippin_core::settings::SettingsUpdate {
        sprint_length_days: Some(1),
        ..Default::default()
    });
    assert!(svc.list_tickets_at(&demo, &current, now).await.unwrap().is_empty());
}

#[tokio::test]
async fn full_lifecycle_with_blockers_and_comments() {
    let svc = service().await;
    let demo = demo();
    svc.create_project(&demo, "WEB", "Website").await.unwrap();
    svc.create_project(&demo, "API", "Backend").await.unwrap();

    let api = svc
        .create_ticket(&demo, &NewTicket::new("API", "Token endpoint"))
        .await
        .unwrap();
    let web = svc
        .create_ticket(&demo, &NewTicket::new("WEB", "Login page"))
        .await
        .unwrap();

    svc.add_block(&demo, api.ticket.id, web.ticket.id).await.unwrap();
    svc.append_comment(&demo, web.ticket.id, "waiting on API").await.unwrap();

    for expected in [TicketState::Todo, TicketState::InProgress, TicketState::Done] {
        let state = svc
            .move_ticket(&demo, web.ticket.id, Direction::Right)
            .await
            .unwrap();
        assert_eq!(state, expected);
    }

    let detail = svc.get_ticket(&demo, web.ticket.id).await.unwrap();
    assert_eq!(detail.ticket.state, TicketState::Done);
    assert_eq!(detail.blocked_by[0].to_string(), format!("T-{} (API)", api.ticket.id));
    assert_eq!(detail.ticket.comments.entries()[0].text(), "waiting on API");

    let err = svc
        .move_ticket(&demo, web.ticket.id, Direction::Right)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidMove);

    let filter = TicketFilter {
        project: ProjectFilter::parse(Some("API")),
        sprint: SprintFilter::All,
    };
    let board = svc.board(&demo, &filter).await.unwrap();
    assert_eq!(board.columns.backlog.len(), 1);
    assert!(board.columns.done.is_empty());

    svc.delete_project(&demo, "API").await.unwrap();
    let detail = svc.get_ticket(&demo, web.ticket.id).await.unwrap();
    assert!(!detail.is_blocked());
}

#[tokio::test]
async fn export_snapshot_serializes_and_reads_back() {
    let svc = service().await;
    let demo = demo();
    svc.create_project(&demo, "WEB", "Website").await.unwrap();
    let ticket = svc
        .create_ticket(&demo, &NewTicket::new("WEB", "Export me"))
        .await
        .unwrap();
    svc.append_comment(&demo, ticket.ticket.id, "note").await.unwrap();

    let snapshot = svc.export(&demo).await.unwrap();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: ExportSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(back, snapshot);
    assert_eq!(back.tickets[0].project_key, "WEB");
}

#[tokio::test]
async fn state_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pippin.db");
    let path = path.to_string_lossy();
    let demo = demo();

    let id = {
        let svc = BoardService::new_local(&path, weekly_from_new_year())
            .await
            .unwrap();
        svc.create_project(&demo, "WEB", "Website").await.unwrap();
        let t = svc
            .create_ticket(&demo, &NewTicket::new("WEB", "persist"))
            .await
            .unwrap();
        svc.move_ticket(&demo, t.ticket.id, Direction::Right).await.unwrap();
        t.ticket.id
    };

    let svc = BoardService::new_local(&path, weekly_from_new_year())
        .await
        .unwrap();
    let detail = svc.get_ticket(&demo, id).await.unwrap();
    assert_eq!(detail.ticket.state, TicketState::Todo);
    assert_eq!(svc.list_projects(&demo).await.unwrap().len(), 1);
}
