//! Output screen: result image, before/after comparison and download

use leptos::prelude::*;

use pickabook_common::{ComparisonSlider, Session, DEFAULT_SLIDER_POSITION};

use crate::download;

#[component]
pub fn OutputScreen<F>(session: ReadSignal<Session>, on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let (show_comparison, set_show_comparison) = signal(false);
    let (slider, set_slider) = signal(ComparisonSlider::default());

    let generated_src = move || {
        session
            .get()
            .generated_image()
            .map(|image| image.as_str().to_string())
            .unwrap_or_default()
    };
    let original_src = move || {
        session
            .get()
            .uploaded_image()
            .map(|image| image.as_str().to_string())
            .unwrap_or_default()
    };
    let has_original = move || session.get().uploaded_image().is_some();

    let on_download = move |_| {
        if let Some(image) = session.get().generated_image() {
            download::save_data_url(image.as_str(), download::DOWNLOAD_FILE_NAME);
        }
    };

    view! {
        <section class="screen output-screen">
            <header class="app-header">
                <h1>"✨ Your Personalized Story"</h1>
                <p class="tagline">"Your child is ready for an adventure!"</p>
            </header>

            <div class="output-frame">
                <Show
                    when=move || show_comparison.get() && has_original()
                    fallback=move || view! {
                        <img
                            class="output-image"
                            src=generated_src
                            alt="Generated personalized illustration"
                        />
                    }
                >
                    <div class="comparison-container">
                        <img
                            class="comparison-base"
                            src=generated_src
                            alt="Generated illustration"
                        />
                        <div
                            class="comparison-overlay"
                            style=move || format!("width: {}%", slider.get().overlay_width_percent())
                        >
                            <img
                                class="comparison-original"
                                src=original_src
                                alt="Original photo"
                                style=move || format!("width: {}%", slider.get().original_width_percent())
                            />
                        </div>
                        <input
                            type="range"
                            min="0"
                            max="100"
                            class="comparison-range"
                            prop:value=move || slider.get().position().to_string()
                            on:input=move |ev| {
                                let position = event_target_value(&ev)
                                    .parse()
                                    .unwrap_or(i32::from(DEFAULT_SLIDER_POSITION));
                                set_slider.set(ComparisonSlider::new(position));
                            }
                        />
                        <div
                            class="comparison-handle"
                            style=move || format!("left: {}%", slider.get().position())
                        ></div>
                    </div>
                </Show>
            </div>

            <div class="info-card info-card-blue">
                <p class="info-title">"📖 Ready for the storybook!"</p>
                <p class="text-muted">"Your personalized character is now part of an illustrated adventure"</p>
            </div>

            <button class="btn btn-primary" on:click=on_download>
                "⬇️ Download Image"
            </button>

            <Show when=has_original>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| set_show_comparison.update(|visible| *visible = !*visible)
                >
                    {move || {
                        if show_comparison.get() {
                            "Hide Comparison"
                        } else {
                            "👀 Before → After"
                        }
                    }}
                </button>
            </Show>

            <button
                class="btn btn-secondary"
                on:click={
                    let on_reset = on_reset.clone();
                    move |_| on_reset(())
                }
            >
                "Try Another Photo"
            </button>

            <p class="footer-tip text-muted">
                "💡 Tip: You can personalize multiple children and create a family collection!"
            </p>
        </section>
    }
}
