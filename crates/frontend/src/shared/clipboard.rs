//! Clipboard access through the Web Clipboard API

use wasm_bindgen_futures::spawn_local;

/// Copy text to the clipboard, then report whether it worked
pub fn copy_with_result<F>(text: &str, on_done: F)
where
    F: FnOnce(bool) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let copied = match web_sys::window() {
            Some(window) => {
                let clipboard = window.navigator().clipboard();
                wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
                    .await
                    .is_ok()
            }
            None => false,
        };
        if !copied {
            log::warn!("Clipboard write failed");
        }
        on_done(copied);
    });
}
