use dioxus::prelude::*;
use shared_types::{Department, DEPARTMENTS};

/// Cards for the fixed department list. Clicking one reports its name.
#[component]
pub fn DepartmentGrid(on_open: EventHandler<&'static str>) -> Element {
    rsx! {
        div { class: "department-grid",
            for dept in DEPARTMENTS.iter() {
                DepartmentCard { key: "{dept.name}", dept: *dept, on_open }
            }
        }
    }
}

#[component]
fn DepartmentCard(dept: Department, on_open: EventHandler<&'static str>) -> Element {
    let name = dept.name;
    rsx! {
        div { class: "department-card", onclick: move |_| on_open.call(name),
            div { class: "department-icon", "{dept.icon}" }
            h3 { class: "department-name", "{dept.name}" }
            p { class: "department-members", "{dept.members}/{dept.max_members} members" }
            div { class: "department-channels",
                for channel in dept.channel_names() {
                    span { key: "{channel}", class: "channel-tag", "{channel}" }
                }
            }
        }
    }
}
