use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUserCheck;
use dioxus_free_icons::Icon;
use shared_types::{or_not_available, Profile};
use shared_ui::{Button, ButtonVariant};

/// Rows of the profile detail list, with blanks shown as `N/A`.
pub fn profile_rows(profile: &Profile) -> Vec<(&'static str, String)> {
    [
        ("Employee ID", &profile.employee_id),
        ("Department", &profile.department),
        ("Email", &profile.email),
        ("Phone", &profile.phone),
        ("Specialization", &profile.specialization),
        ("Bar Number", &profile.bar_number),
        ("Joined", &profile.join_date),
    ]
    .into_iter()
    .map(|(label, value)| (label, or_not_available(value).to_string()))
    .collect()
}

#[component]
pub fn ProfileCard(profile: Option<Profile>, on_edit: EventHandler<()>) -> Element {
    let Some(profile) = profile else {
        return rsx! {
            div { class: "profile-card",
                h2 { class: "profile-name", "Loading..." }
            }
        };
    };
    let rows = profile_rows(&profile);

    rsx! {
        div { class: "profile-card",
            div { class: "profile-header",
                div { class: "profile-avatar",
                    Icon::<LdUserCheck> { icon: LdUserCheck, width: 32, height: 32 }
                }
                h2 { class: "profile-name", "{or_not_available(&profile.name)}" }
                p { class: "profile-position", "{or_not_available(&profile.position)}" }
            }
            dl { class: "profile-details",
                for (label, value) in rows {
                    div { key: "{label}", class: "profile-row",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
            Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| on_edit.call(()),
                "Edit Profile"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render;

    #[test]
    fn loading_until_profile_arrives() {
        let html = render(rsx! {
            ProfileCard { profile: None, on_edit: move |_| {} }
        });
        assert!(html.contains("Loading..."));
        assert!(!html.contains("Edit Profile"));
    }

    #[test]
    fn blank_fields_show_not_available() {
        let profile = Profile {
            name: "Jane Roe".into(),
            employee_id: "CLF-7".into(),
            ..Profile::default()
        };
        let rows = profile_rows(&profile);
        assert_eq!(rows[0], ("Employee ID", "CLF-7".to_string()));
        assert!(rows[1..].iter().all(|(_, v)| v == "N/A"));

        let html = render(rsx! {
            ProfileCard { profile: Some(profile), on_edit: move |_| {} }
        });
        assert!(html.contains("Jane Roe"));
        assert!(html.contains("Edit Profile"));
    }
}
