//! Upload screen: drop zone, file picker and photo preview

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, File, FileReader, HtmlInputElement};

use pickabook_common::{check_upload, picker_accept, ImagePayload, Session};

#[component]
pub fn UploadScreen<FU, FG>(
    session: ReadSignal<Session>,
    on_upload: FU,
    on_generate: FG,
) -> impl IntoView
where
    FU: Fn(ImagePayload) + 'static + Clone + Send + Sync,
    FG: Fn(()) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    // Both the drop path and the picker path go through here, so every
    // file faces the same checks.
    let handle_file = {
        let on_upload = on_upload.clone();
        move |file: File| {
            if let Err(error) = check_upload(&file.type_(), file.size() as u64) {
                alert(&error.to_string());
                return;
            }
            read_file(file, on_upload.clone());
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let dropped = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = dropped {
                handle_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let open_picker = {
        let handle_file = handle_file.clone();
        move || {
            let document = web_sys::window().unwrap().document().unwrap();
            let input: HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept(&picker_accept());

            let handle_file = handle_file.clone();
            let picker = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(file) = picker.files().and_then(|files| files.get(0)) {
                    handle_file(file);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    let preview_src = move || {
        session
            .get()
            .uploaded_image()
            .map(|image| image.as_str().to_string())
            .unwrap_or_default()
    };

    let picker_for_drop_zone = open_picker.clone();
    let picker_for_change = open_picker;

    view! {
        <section class="screen upload-screen">
            <header class="app-header">
                <h1>"✨ Pickabook"</h1>
                <p class="tagline">"Create a Personalized Storybook"</p>
            </header>

            <Show
                when=move || session.get().can_generate()
                fallback=move || view! {
                    <div
                        class=move || {
                            let mut classes = vec!["drop-zone"];
                            if is_dragover.get() {
                                classes.push("dragover");
                            }
                            classes.join(" ")
                        }
                        on:drop=on_drop.clone()
                        on:dragover=on_dragover
                        on:dragleave=on_dragleave
                        on:click={
                            let open_picker = picker_for_drop_zone.clone();
                            move |_| open_picker()
                        }
                    >
                        <div class="drop-zone-icon">"📸"</div>
                        <h2>"Upload your child's photo"</h2>
                        <p>"Drag and drop or click to select"</p>
                        <p class="text-muted">"JPEG, PNG (Max 10MB)"</p>
                    </div>

                    <div class="info-card info-card-blue">
                        <p class="info-title">"🎨 AI-Powered Illustration"</p>
                        <p class="text-muted">"Your photo becomes a magical illustrated character"</p>
                    </div>
                    <div class="info-card info-card-purple">
                        <p class="info-title">"📖 Storybook Ready"</p>
                        <p class="text-muted">"Instantly placed in a beautiful storybook template"</p>
                    </div>
                }
            >
                <div class="preview-frame">
                    <img src=preview_src alt="Uploaded preview" />
                </div>
                <div class="preview-note">
                    <p>"✓ Photo ready for personalization"</p>
                </div>

                <button
                    class="btn btn-primary"
                    on:click={
                        let on_generate = on_generate.clone();
                        move |_| on_generate(())
                    }
                >
                    "✨ Generate Personalized Illustration"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click={
                        let open_picker = picker_for_change.clone();
                        move |_| open_picker()
                    }
                >
                    "Change Photo"
                </button>
            </Show>
        </section>
    }
}

fn alert(message: &str) {
    let _ = web_sys::window().unwrap().alert_with_message(message);
}

fn read_file<F>(file: File, on_upload: F)
where
    F: Fn(ImagePayload) + 'static,
{
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                match ImagePayload::from_data_url(data_url) {
                    Ok(payload) => on_upload(payload),
                    Err(error) => alert(&error.to_string()),
                }
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
