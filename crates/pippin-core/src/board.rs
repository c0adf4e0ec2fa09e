//! Ticket filters and the four-column board view.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::{Project, TicketDetail};
use crate::enums::{Theme, TicketState};
use crate::sprint::SprintWindow;

/// Sentinel project filter meaning "every project".
pub const ALL_PROJECTS: &str = "ALL";

/// Restrict a listing to one project, or not at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ProjectFilter {
    #[default]
    All,
    Key(String),
}

impl ProjectFilter {
    /// Build from an optional raw value; absent, empty and `"ALL"` mean all.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("" | ALL_PROJECTS) => Self::All,
            Some(key) => Self::Key(key.to_string()),
        }
    }

    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Key(key) => Some(key),
        }
    }
}

impl From<String> for ProjectFilter {
    fn from(raw: String) -> Self {
        Self::parse(Some(&raw))
    }
}

impl From<ProjectFilter> for String {
    fn from(filter: ProjectFilter) -> Self {
        match filter {
            ProjectFilter::All => ALL_PROJECTS.to_string(),
            ProjectFilter::Key(key) => key,
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key().unwrap_or(ALL_PROJECTS))
    }
}

/// Restrict a listing to tickets created in the current sprint window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SprintFilter {
    Current,
    #[default]
    All,
}

impl SprintFilter {
    /// Only `"current"` restricts; any other value means no time restriction.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("current") => Self::Current,
            _ => Self::All,
        }
    }
}

/// Listing filter for the ticket repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketFilter {
    pub project: ProjectFilter,
    pub sprint: SprintFilter,
}

impl TicketFilter {
    /// The board's default view: current sprint, every project.
    #[must_use]
    pub const fn board_default() -> Self {
        Self {
            project: ProjectFilter::All,
            sprint: SprintFilter::Current,
        }
    }
}

/// Tickets grouped by lifecycle column, each column in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColumns {
    pub backlog: Vec<TicketDetail>,
    pub todo: Vec<TicketDetail>,
    pub in_progress: Vec<TicketDetail>,
    pub done: Vec<TicketDetail>,
}

impl BoardColumns {
    #[must_use]
    pub fn column(&self, state: TicketState) -> &[TicketDetail] {
        match state {
            TicketState::Backlog => &self.backlog,
            TicketState::Todo => &self.todo,
            TicketState::InProgress => &self.in_progress,
            TicketState::Done => &self.done,
        }
    }

    fn column_mut(&mut self, state: TicketState) -> &mut Vec<TicketDetail> {
        match state {
            TicketState::Backlog => &mut self.backlog,
            TicketState::Todo => &mut self.todo,
            TicketState::InProgress => &mut self.in_progress,
            TicketState::Done => &mut self.done,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        TicketState::ALL.iter().map(|s| self.column(*s).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<TicketDetail> for BoardColumns {
    fn from_iter<I: IntoIterator<Item = TicketDetail>>(iter: I) -> Self {
        let mut columns = Self::default();
        for ticket in iter {
            columns.column_mut(ticket.ticket.state).push(ticket);
        }
        columns
    }
}

/// Everything the board page needs, already filtered and grouped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub theme: Theme,
    pub sprint: SprintFilter,
    pub project: ProjectFilter,
    /// The window used when `sprint` is `current`.
    pub window: Option<SprintWindow>,
    pub projects: Vec<Project>,
    pub columns: BoardColumns,
}
