use crate::components::ProfileCard;
use crate::host::{use_host, HostBridge, ImpactStyle};
use dioxus::prelude::*;
use shared_types::Profile;

#[component]
pub fn ProfilePane(profile: Option<Profile>) -> Element {
    let host = use_host();

    let on_edit = move |_: ()| {
        host.haptic_impact(ImpactStyle::Medium);
        host.show_alert("Profile editing will be available in the next update!");
    };

    rsx! {
        ProfileCard { profile, on_edit }
    }
}
