mod app;
mod renderer;
mod theme;

pub use app::{FolioApp, Notice, UiAction};

// WASM entry point
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "folio_canvas";

#[cfg(target_arch = "wasm32")]
fn canvas() -> Result<web_sys::HtmlCanvasElement, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str(&format!("no canvas element with id '{CANVAS_ID}'")))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("element is not a canvas"))
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let canvas = canvas()?;
    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async {
        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(FolioApp::new(cc)?))),
            )
            .await;
        if let Err(e) = start_result {
            web_sys::console::error_1(&format!("folio: failed to start eframe: {e:?}").into());
        }
    });
    Ok(())
}
