use dioxus::prelude::*;

mod animation;
mod components;
mod controller;
mod error_reporter;
mod format_helpers;
mod forms;
mod host;
mod launch;
mod routes;
mod session;

use controller::NavState;
use error_reporter::ErrorReporter;
use gateway::{load_config, GatewayClient, UserId};
use host::{HostBridge, HostEvent, HostHandle};
use routes::Route;
use session::OfficeSession;
use shared_ui::apply_theme;

const OFFICE_CSS: Asset = asset!("/assets/office.css");

fn main() {
    dioxus::launch(App);
}

/// Re-read the host theme and push it into the page.
async fn sync_theme() {
    let params = host::read_theme_params().await;
    tracing::debug!(?params, "Applying host theme");
    apply_theme(&params);
}

#[component]
fn App() -> Element {
    let config = load_config();

    let host = use_context_provider(HostHandle::telegram);
    use_context_provider(|| GatewayClient::new(config.clone()));
    use_context_provider(|| OfficeSession::new(UserId::new(config.default_user_id)));
    use_context_provider(NavState::new);
    let reporter = use_context_provider({
        let host = host.clone();
        move || ErrorReporter::new(host)
    });

    // Tell the host the app is up and take the full height
    {
        let host = host.clone();
        use_effect(move || {
            host.expand();
            host.ready();
        });
    }

    use_future(sync_theme);

    // Host events for the lifetime of the app
    use_future(move || {
        let host = host.clone();
        let reporter = reporter.clone();
        async move {
            host::listen_host_events(move |event| match event {
                HostEvent::ThemeChanged => {
                    spawn(sync_theme());
                }
                HostEvent::BackButton => host.close(),
                HostEvent::Error { message, line, url } => {
                    reporter.report_script_error(&message, line, &url)
                }
            })
            .await
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: OFFICE_CSS }
        Router::<Route> {}
    }
}
