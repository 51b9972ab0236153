//! Office page building blocks. Everything here renders from props so the
//! pieces can be checked with server-side rendering.

pub mod agenda_list;
pub mod badges;
pub mod case_card;
pub mod case_details;
pub mod department_details;
pub mod department_grid;
pub mod notification_list;
pub mod profile_card;
pub mod staff_grid;
pub mod stats;

pub use agenda_list::AgendaList;
pub use badges::{PriorityBadge, StatusBadge};
pub use case_card::CaseCard;
pub use case_details::CaseDetails;
pub use department_details::DepartmentDetails;
pub use department_grid::DepartmentGrid;
pub use notification_list::NotificationList;
pub use profile_card::ProfileCard;
pub use staff_grid::StaffGrid;
pub use stats::StatsGrid;

#[cfg(test)]
pub(crate) fn render(element: dioxus::prelude::Element) -> String {
    dioxus_ssr::render_element(element)
}
