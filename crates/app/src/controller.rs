//! Navigation and interaction state: the active tab, the modal, the agenda
//! form mode and the case filters.

use crate::host::{HostBridge, ImpactStyle};
use dioxus::prelude::*;
use shared_types::CaseRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Cases,
    Departments,
    Staff,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Cases,
        Tab::Departments,
        Tab::Staff,
        Tab::Profile,
    ];

    /// Id of the pane element.
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Cases => "cases",
            Tab::Departments => "departments",
            Tab::Staff => "staff",
            Tab::Profile => "profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Cases => "Cases",
            Tab::Departments => "Departments",
            Tab::Staff => "Staff",
            Tab::Profile => "Profile",
        }
    }
}

/// What the modal is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalContent {
    NewCase,
    /// Time entry, optionally preselecting a case.
    TimeEntry { case_id: Option<i64> },
    LeaveRequest,
    AddAgenda,
    CaseDetails(i64),
    Department(&'static str),
}

impl ModalContent {
    pub fn title(&self) -> String {
        match self {
            ModalContent::NewCase => "Register New Case".to_string(),
            ModalContent::TimeEntry { .. } => "Log Billable Time".to_string(),
            ModalContent::LeaveRequest => "Request Time Off".to_string(),
            ModalContent::AddAgenda => "Add to Agenda".to_string(),
            ModalContent::CaseDetails(_) => "Case Details".to_string(),
            ModalContent::Department(name) => name.to_string(),
        }
    }

    /// Action forms get a firmer tap than detail views.
    pub fn haptic(&self) -> ImpactStyle {
        match self {
            ModalContent::CaseDetails(_) | ModalContent::Department(_) => ImpactStyle::Light,
            _ => ImpactStyle::Medium,
        }
    }
}

/// Field group shown by the add-agenda form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgendaFormMode {
    #[default]
    Court,
    Task,
}

pub const COURT_REQUIRED: &[&str] = &["case_number", "court_name", "date_time", "purpose"];
pub const TASK_REQUIRED: &[&str] = &["title", "deadline"];

impl AgendaFormMode {
    pub fn toggled(self) -> Self {
        match self {
            AgendaFormMode::Court => AgendaFormMode::Task,
            AgendaFormMode::Task => AgendaFormMode::Court,
        }
    }

    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            AgendaFormMode::Court => COURT_REQUIRED,
            AgendaFormMode::Task => TASK_REQUIRED,
        }
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.required_fields().contains(&field)
    }
}

/// Case list filters. Empty values match everything.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CaseFilter {
    pub status: String,
    pub priority: String,
    pub search: String,
}

impl CaseFilter {
    pub fn matches(&self, case: &CaseRecord) -> bool {
        let status_ok = self.status.is_empty() || case.status == self.status;
        let priority_ok = self.priority.is_empty() || case.priority == self.priority;
        let needle = self.search.trim().to_lowercase();
        let search_ok = needle.is_empty()
            || [&case.case_number, &case.title, &case.client]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        status_ok && priority_ok && search_ok
    }

    pub fn apply(&self, cases: &[CaseRecord]) -> Vec<CaseRecord> {
        cases.iter().filter(|c| self.matches(c)).cloned().collect()
    }
}

/// Tab and modal state shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct NavState {
    pub tab: Signal<Tab>,
    pub modal: Signal<Option<ModalContent>>,
}

impl NavState {
    pub fn new() -> Self {
        Self {
            tab: Signal::new(Tab::default()),
            modal: Signal::new(None),
        }
    }

    pub fn select_tab(&mut self, host: &dyn HostBridge, tab: Tab) {
        self.tab.set(tab);
        host.haptic_impact(ImpactStyle::Light);
    }

    /// Show `content`, replacing whatever the modal held.
    pub fn open_modal(&mut self, host: &dyn HostBridge, content: ModalContent) {
        host.haptic_impact(content.haptic());
        self.modal.set(Some(content));
    }

    pub fn close_modal(&mut self) {
        self.modal.set(None);
    }
}

/// Hook to access navigation state.
pub fn use_nav() -> NavState {
    use_context::<NavState>()
}
