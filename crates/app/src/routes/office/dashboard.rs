use super::open_modal_on_click;
use crate::components::{AgendaList, NotificationList, StatsGrid};
use crate::controller::{use_nav, ModalContent};
use crate::host::{use_host, HostBridge, NotificationFeedback};
use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdCalendar, LdClock, LdFileText};
use dioxus_free_icons::Icon;
use gateway::{api, FetchBatch, GatewayClient};
use shared_types::{AgendaItem, Notification, OfficeStats};
use shared_ui::{Button, ButtonVariant, Card, CardAction, CardContent, CardHeader, CardTitle};

#[component]
pub fn DashboardPane(
    stats: OfficeStats,
    agenda: Vec<AgendaItem>,
    notifications: Vec<Notification>,
) -> Element {
    let host = use_host();
    let nav = use_nav();
    let mut session = use_session();
    let client = use_context::<GatewayClient>();
    let duration_ms = client.config().stat_animation_ms;

    let refresh_agenda = {
        let host = host.clone();
        move |_: MouseEvent| {
            host.haptic_notification(NotificationFeedback::Success);
            host.show_alert("Agenda refreshed!");
            let client = client.clone();
            spawn(async move {
                let user = *session.user.peek();
                let agenda = api::fetch_agenda(&client, user).await;
                session.apply(FetchBatch::agenda_only(agenda));
            });
        }
    };

    rsx! {
        StatsGrid { stats, duration_ms }

        Card {
            CardHeader {
                CardTitle { "Quick Actions" }
            }
            CardContent {
                div { class: "quick-actions",
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: open_modal_on_click(&host, nav, ModalContent::NewCase),
                        Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                        "New Case"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: open_modal_on_click(&host, nav, ModalContent::TimeEntry { case_id: None }),
                        Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
                        "Log Time"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: open_modal_on_click(&host, nav, ModalContent::LeaveRequest),
                        Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                        "Request Leave"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: open_modal_on_click(&host, nav, ModalContent::AddAgenda),
                        Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                        "Add Agenda"
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Today's Agenda" }
                CardAction {
                    Button { variant: ButtonVariant::Small, onclick: refresh_agenda, "Refresh" }
                }
            }
            CardContent {
                AgendaList { items: agenda }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Notifications" }
            }
            CardContent {
                NotificationList { notifications }
            }
        }
    }
}
