use crate::animation::format_counter;
use dioxus::prelude::*;
use shared_types::OfficeStats;

/// Dashboard counters.
#[component]
pub fn StatsGrid(stats: OfficeStats, duration_ms: u64) -> Element {
    let active = stats.active_cases as f64;
    let court = stats.court_dates as f64;
    let hours = stats.billable_hours;

    rsx! {
        div { class: "stats-grid",
            AnimatedStat {
                key: "active-{active}",
                id: "activeCases",
                label: "Active Cases",
                target: active,
                decimal: false,
                duration_ms,
            }
            AnimatedStat {
                key: "court-{court}",
                id: "courtDates",
                label: "Court Dates",
                target: court,
                decimal: false,
                duration_ms,
            }
            AnimatedStat {
                key: "hours-{hours}",
                id: "billableHours",
                label: "Billable Hours",
                target: hours,
                decimal: true,
                duration_ms,
            }
        }
    }
}

/// One counter. Keyed by its target, so a new value remounts it and the
/// count starts again from zero.
#[component]
fn AnimatedStat(id: String, label: String, target: f64, decimal: bool, duration_ms: u64) -> Element {
    let shown = use_signal(|| if cfg!(target_arch = "wasm32") { 0.0 } else { target });

    #[cfg(target_arch = "wasm32")]
    {
        let mut shown = shown;
        use_future(move || async move {
            let mut anim = crate::animation::CounterAnimation::new(target, duration_ms);
            while !anim.is_done() {
                crate::animation::sleep_ms(crate::animation::FRAME_MS).await;
                shown.set(anim.advance());
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = duration_ms;

    let text = format_counter(*shown.read(), decimal);

    rsx! {
        div { class: "stat-card",
            div { id: id, class: "stat-value", "{text}" }
            div { class: "stat-label", "{label}" }
        }
    }
}
