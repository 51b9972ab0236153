use dioxus::prelude::*;
use shared_types::AgendaItem;

#[component]
pub fn AgendaList(items: Vec<AgendaItem>) -> Element {
    if items.is_empty() {
        return rsx! {
            p { class: "empty-state", "No items scheduled for today" }
        };
    }

    rsx! {
        div { class: "agenda-list",
            for (i, item) in items.iter().enumerate() {
                div { key: "{i}", class: "agenda-item", "data-kind": item.kind.as_str(),
                    div { class: "agenda-time", "{item.time}" }
                    div { class: "agenda-details",
                        h4 { "{item.title}" }
                        p { "{item.description}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render;
    use shared_types::AgendaKind;

    #[test]
    fn empty_agenda_message() {
        let html = render(rsx! {
            AgendaList { items: Vec::new() }
        });
        assert!(html.contains("No items scheduled for today"));
    }

    #[test]
    fn items_keep_order_and_kind() {
        let items = vec![
            AgendaItem {
                time: "10:00 AM".into(),
                title: "Court Appearance".into(),
                description: "District Court - Hearing".into(),
                kind: AgendaKind::Court,
            },
            AgendaItem {
                time: "Anytime".into(),
                title: "Task".into(),
                description: "File motion".into(),
                kind: AgendaKind::Deadline,
            },
        ];
        let html = render(rsx! {
            AgendaList { items }
        });
        let court = html.find("District Court - Hearing").unwrap();
        let task = html.find("File motion").unwrap();
        assert!(court < task);
        assert!(html.contains(r#"data-kind="court""#));
        assert!(html.contains(r#"data-kind="deadline""#));
    }
}
