//! Saving the generated image to disk
//!
//! A data URL works directly as an anchor `href`, so downloading is a
//! synthesized click on a temporary `<a download>` element.

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// File name offered for the downloaded illustration.
pub const DOWNLOAD_FILE_NAME: &str = "personalized-storybook.png";

fn build_anchor(data_url: &str, file_name: &str) -> HtmlAnchorElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .unwrap()
        .dyn_into()
        .unwrap();
    anchor.set_href(data_url);
    anchor.set_download(file_name);
    anchor
}

pub fn save_data_url(data_url: &str, file_name: &str) {
    let anchor = build_anchor(data_url, file_name);

    // The anchor must be in the document for the click to trigger a
    // download in every browser.
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    let _ = body.append_child(&anchor);
    anchor.click();
    anchor.remove();
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_anchor_carries_file_name_and_href() {
        let anchor = build_anchor("data:image/png;base64,AAAA", DOWNLOAD_FILE_NAME);

        assert_eq!(anchor.download(), DOWNLOAD_FILE_NAME);
        assert!(anchor.href().contains("data:image/png;base64,AAAA"));
    }
}
