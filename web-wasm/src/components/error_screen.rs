//! Error screen with the fixed failure message and a way back

use leptos::prelude::*;

use pickabook_common::Session;

#[component]
pub fn ErrorScreen<F>(session: ReadSignal<Session>, on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <section class="screen error-screen">
            <div class="error-card">
                <div class="error-icon">"😢"</div>
                <h2>"Oops!"</h2>
                <p class="error-message">
                    {move || session.get().error_message().to_string()}
                </p>
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "Try Another Photo"
                </button>
            </div>
        </section>
    }
}
