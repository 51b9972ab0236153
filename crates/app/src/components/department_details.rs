use dioxus::prelude::*;
use shared_types::Department;

#[component]
pub fn DepartmentDetails(dept: Department) -> Element {
    rsx! {
        div { class: "details-view",
            div { class: "details-hero",
                span { class: "department-icon", "{dept.icon}" }
                p { "{dept.members} team members" }
            }
            h4 { class: "details-heading", "Channels" }
            ul { class: "channel-list",
                for channel in dept.channel_names() {
                    li { key: "{channel}", "#{channel}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render;
    use shared_types::find_department;

    #[test]
    fn lists_channels_with_hash() {
        let dept = *find_department("Administration & HR").unwrap();
        let html = render(rsx! {
            DepartmentDetails { dept }
        });
        assert!(html.contains("4 team members"));
        assert!(html.contains("#hr-announcements"));
        assert_eq!(html.matches("<li").count(), 3);
    }
}
