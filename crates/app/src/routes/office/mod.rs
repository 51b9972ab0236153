//! The virtual office page: header, five tab panes, the bottom tab bar and
//! the shared modal.

mod cases;
mod dashboard;
mod modal;
mod profile;
mod staff;

use crate::animation::sleep_ms;
use crate::components::DepartmentGrid;
use crate::controller::{use_nav, ModalContent, NavState, Tab};
use crate::host::{self, use_host, HostHandle};
use crate::launch::LaunchParams;
use crate::session::use_session;
use cases::CasesPane;
use dashboard::DashboardPane;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdLayoutDashboard, LdScale, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use gateway::{fetch_all, GatewayClient, UserId};
use modal::ModalBody;
use profile::ProfilePane;
use shared_types::{with_broadcast, CaseRecord};
use shared_ui::{Modal, TabBar, TabButton, TabPane};
use staff::StaffPane;

/// Click handler that opens `content` in the modal.
pub(super) fn open_modal_on_click(
    host: &HostHandle,
    mut nav: NavState,
    content: ModalContent,
) -> impl FnMut(MouseEvent) + 'static {
    let host = host.clone();
    move |_| nav.open_modal(&*host, content.clone())
}

/// Title of the modal. Case details are titled with the case number.
pub fn modal_title(content: &ModalContent, cases: &[CaseRecord]) -> String {
    match content {
        ModalContent::CaseDetails(id) => cases
            .iter()
            .find(|c| c.id == *id)
            .map(|c| c.case_number.clone())
            .unwrap_or_else(|| content.title()),
        other => other.title(),
    }
}

#[component]
pub fn Office(query: String) -> Element {
    let launch = use_hook(|| LaunchParams::parse(&query));
    let host = use_host();
    let mut session = use_session();
    let mut nav = use_nav();
    let client = use_context::<GatewayClient>();

    // Resolve the user, load everything once, then follow the deep link.
    {
        let host = host.clone();
        let client = client.clone();
        let launch = launch.clone();
        use_future(move || {
            let host = host.clone();
            let client = client.clone();
            let launch = launch.clone();
            async move {
                let config = client.config();
                let raw_user = host::read_user_id().await;
                let user = UserId::from_host_value(&raw_user, config.default_user_id);
                session.user.set(user);
                tracing::info!(%user, "Loading office data");

                let batch = fetch_all(&client, user).await;
                session.apply(batch);

                if launch.opens_new_case() && !session.is_closed() {
                    nav.select_tab(&*host, Tab::Cases);
                    sleep_ms(config.new_case_delay_ms).await;
                    nav.open_modal(&*host, ModalContent::NewCase);
                }
            }
        });
    }

    let snapshot = session.snapshot.read().clone();
    let broadcast = launch.broadcast_notification();
    let notifications = with_broadcast(&snapshot.notifications.value, broadcast.as_ref());
    let active_tab = *nav.tab.read();
    let modal = nav.modal.read().clone();
    let modal_open = modal.is_some();
    let title = modal
        .as_ref()
        .map(|m| modal_title(m, &snapshot.cases.value))
        .unwrap_or_default();

    let tab_buttons = Tab::ALL.into_iter().map(|tab| {
        let host = host.clone();
        rsx! {
            TabButton {
                key: "{tab.id()}",
                active: tab == active_tab,
                label: tab.label(),
                onclick: move |_| nav.select_tab(&*host, tab),
                TabIcon { tab }
            }
        }
    });

    let open_department = {
        let host = host.clone();
        move |name: &'static str| nav.open_modal(&*host, ModalContent::Department(name))
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./office.css") }

        div { class: "office-app",
            header { class: "office-header",
                h1 { "City Law Firm" }
                p { class: "office-subtitle", "Virtual Office" }
                if snapshot.has_fallback_data() {
                    span { class: "offline-hint", "Offline data" }
                }
            }

            main { class: "office-main",
                TabPane { id: Tab::Dashboard.id(), active: active_tab == Tab::Dashboard,
                    DashboardPane {
                        stats: snapshot.stats,
                        agenda: snapshot.agenda.value.items.clone(),
                        notifications,
                    }
                }
                TabPane { id: Tab::Cases.id(), active: active_tab == Tab::Cases,
                    CasesPane { cases: snapshot.cases.value.clone() }
                }
                TabPane { id: Tab::Departments.id(), active: active_tab == Tab::Departments,
                    DepartmentGrid { on_open: open_department }
                }
                TabPane { id: Tab::Staff.id(), active: active_tab == Tab::Staff,
                    StaffPane { staff: snapshot.staff.value.clone() }
                }
                TabPane { id: Tab::Profile.id(), active: active_tab == Tab::Profile,
                    ProfilePane { profile: snapshot.profile.value.clone() }
                }
            }

            TabBar { {tab_buttons} }

            Modal {
                open: modal_open,
                on_close: move |_| nav.close_modal(),
                title,
                if let Some(content) = modal {
                    ModalBody { content }
                }
            }
        }
    }
}

#[component]
fn TabIcon(tab: Tab) -> Element {
    match tab {
        Tab::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 20, height: 20 } },
        Tab::Cases => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 20, height: 20 } },
        Tab::Departments => rsx! { Icon::<LdScale> { icon: LdScale, width: 20, height: 20 } },
        Tab::Staff => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
        Tab::Profile => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 20, height: 20 } },
    }
}
