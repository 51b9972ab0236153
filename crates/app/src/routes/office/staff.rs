use crate::components::StaffGrid;
use dioxus::prelude::*;
use gateway::{api, FetchBatch, GatewayClient};
use shared_types::StaffMember;
use shared_ui::{Button, ButtonVariant, Card, CardAction, CardContent, CardHeader, CardTitle};

use crate::session::use_session;

#[component]
pub fn StaffPane(staff: Vec<StaffMember>) -> Element {
    let mut session = use_session();
    let client = use_context::<GatewayClient>();
    let mut refreshing = use_signal(|| false);

    let refresh = move |_: MouseEvent| {
        if *refreshing.read() {
            return;
        }
        refreshing.set(true);
        let client = client.clone();
        spawn(async move {
            let staff = api::fetch_staff(&client).await;
            session.apply(FetchBatch::staff_only(staff));
            refreshing.set(false);
        });
    };

    let online = staff.iter().filter(|m| m.status.is_online()).count();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Team Directory" }
                CardAction {
                    Button {
                        variant: ButtonVariant::Small,
                        disabled: *refreshing.read(),
                        onclick: refresh,
                        if *refreshing.read() { "Refreshing..." } else { "Refresh" }
                    }
                }
            }
            CardContent {
                p { class: "staff-summary", "{online} of {staff.len()} online" }
                StaffGrid { staff }
            }
        }
    }
}
