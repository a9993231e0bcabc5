//! Processing screen shown while a generation call is in flight
//!
//! Purely decorative; progress through the listed steps is not reported by
//! the backend, so the animation runs on CSS alone.

use leptos::prelude::*;

#[component]
pub fn ProcessingScreen() -> impl IntoView {
    view! {
        <section class="screen processing-screen">
            <div class="spinner">
                <div class="spinner-ring"></div>
                <div class="spinner-glow"></div>
                <div class="spinner-icon">"✨"</div>
            </div>

            <h2>"Creating your personalized illustration…"</h2>
            <p class="text-muted">"This may take 5–10 seconds"</p>

            <div class="process-steps">
                <ProcessStep icon="🔍" text="Detecting your child's face" />
                <ProcessStep icon="🎨" text="Stylizing the illustration" />
                <ProcessStep icon="📖" text="Inserting into storybook template" />
            </div>

            <div class="loading-bar">
                <div class="loading-fill"></div>
            </div>
        </section>
    }
}

#[component]
fn ProcessStep(icon: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="process-step">
            <span class="step-icon">{icon}</span>
            <span class="step-text">{text}</span>
        </div>
    }
}
