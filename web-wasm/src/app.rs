//! Root component: owns the session and dispatches to the active screen

use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::personalize::{personalize_with_timeout, MockPersonalizer, Personalizer};
use crate::components::{
    error_screen::ErrorScreen, output_screen::OutputScreen, processing_screen::ProcessingScreen,
    upload_screen::UploadScreen,
};
use pickabook_common::{AppState, ImagePayload, Session, GENERATION_TIMEOUT_MS};

/// Main application component
///
/// The whole UI state lives in one `Session` signal. Screens get read-only
/// access plus callbacks; only the callbacks here mutate the session.
#[component]
pub fn App() -> impl IntoView {
    let (session, set_session) = signal(Session::new());

    // Swap in HttpPersonalizer::default() once the real endpoint exists.
    let backend: Arc<dyn Personalizer> = Arc::new(MockPersonalizer::default());

    let on_upload = move |payload: ImagePayload| {
        set_session.update(|s| s.submit_image(payload));
    };

    let on_generate = {
        let backend = backend.clone();
        move |_: ()| {
            let mut ticket = None;
            set_session.update(|s| ticket = s.begin_generation());
            let Some(ticket) = ticket else {
                return;
            };

            let backend = backend.clone();
            spawn_local(async move {
                let started = js_sys::Date::now();
                let outcome = personalize_with_timeout(
                    backend.as_ref(),
                    ticket.request(),
                    GENERATION_TIMEOUT_MS,
                )
                .await;

                match &outcome {
                    Ok(_) => gloo::console::log!(format!(
                        "personalization finished in {:.0} ms",
                        js_sys::Date::now() - started
                    )),
                    Err(error) => {
                        gloo::console::error!("personalization failed:", error.to_string())
                    }
                }

                set_session.update(|s| {
                    if !s.finish_generation(ticket, outcome) {
                        gloo::console::warn!("discarded stale personalization result");
                    }
                });
            });
        }
    };

    let on_reset = move |_: ()| {
        set_session.update(|s| s.reset());
    };

    view! {
        <div class="app">
            {move || match session.get().state() {
                AppState::Upload => view! {
                    <UploadScreen
                        session=session
                        on_upload=on_upload
                        on_generate=on_generate.clone()
                    />
                }
                .into_any(),
                AppState::Processing => view! { <ProcessingScreen /> }.into_any(),
                AppState::Output => view! {
                    <OutputScreen session=session on_reset=on_reset />
                }
                .into_any(),
                AppState::Error => view! {
                    <ErrorScreen session=session on_reset=on_reset />
                }
                .into_any(),
            }}
        </div>
    }
}
