use std::collections::HashMap;
use std::sync::Mutex;

use folio_core::views::{modal_view, nav_items, project_cards};
use folio_core::{ContactForm, SiteCatalog, ViewStateController};
use folio_protocol::{Extent, SectionId};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The page's catalog and its controller. JS holds no UI state of its own;
/// it calls in on every event and re-renders from the returned JSON.
struct Page {
    catalog: SiteCatalog,
    controller: ViewStateController,
}

static PAGE: Mutex<Option<Page>> = Mutex::new(None);

fn with_page<T>(f: impl FnOnce(&mut Page) -> Result<T, JsError>) -> Result<T, JsError> {
    let mut guard = PAGE
        .lock()
        .map_err(|_| JsError::new("page state lock poisoned"))?;
    let page = guard
        .as_mut()
        .ok_or_else(|| JsError::new("init() has not been called"))?;
    f(page)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Section extents as measured by the DOM, keyed by element id:
/// `{"home": {"start": 0, "height": 812}, ...}`. Sections missing from the
/// map are treated as not mounted.
fn parse_extents(json: &str) -> Result<HashMap<SectionId, Extent>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load a catalog (the bundled one when `catalog_json` is absent) and reset
/// all UI state. Returns the initial snapshot as JSON.
#[wasm_bindgen]
pub fn init(catalog_json: Option<String>) -> Result<String, JsError> {
    let catalog = match catalog_json {
        Some(json) => SiteCatalog::from_json(json.as_bytes()),
        None => SiteCatalog::bundled(),
    }
    .map_err(|e| JsError::new(&e.to_string()))?;
    log::debug!(
        "page initialised: {} sections, {} projects",
        catalog.sections.len(),
        catalog.projects.len()
    );
    let controller = ViewStateController::from_catalog(&catalog);
    let snapshot = to_json(&controller.snapshot())?;

    let mut guard = PAGE
        .lock()
        .map_err(|_| JsError::new("page state lock poisoned"))?;
    *guard = Some(Page {
        catalog,
        controller,
    });
    Ok(snapshot)
}

/// Feed one scroll event. Returns whether the active section changed.
#[wasm_bindgen]
pub fn on_scroll(scroll_y: f64, extents_json: &str) -> Result<bool, JsError> {
    let extents = parse_extents(extents_json).map_err(|e| JsError::new(&e.to_string()))?;
    with_page(|page| Ok(page.controller.on_scroll(scroll_y, &extents)))
}

/// Handle a navigation click. Returns the command for the page to run.
#[wasm_bindgen]
pub fn navigate(section: &str) -> Result<String, JsError> {
    with_page(|page| {
        let command = page
            .controller
            .navigate(section)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_json(&command)
    })
}

#[wasm_bindgen]
pub fn toggle_menu() -> Result<bool, JsError> {
    with_page(|page| Ok(page.controller.toggle_menu()))
}

#[wasm_bindgen]
pub fn open_project(index: usize) -> Result<(), JsError> {
    with_page(|page| {
        page.controller
            .open_project_at(index)
            .map_err(|e| JsError::new(&e.to_string()))
    })
}

#[wasm_bindgen]
pub fn close_modal() -> Result<(), JsError> {
    with_page(|page| {
        page.controller.close_modal();
        Ok(())
    })
}

/// Validate and acknowledge a contact message. An empty field is rejected
/// here and never reaches the controller.
#[wasm_bindgen]
pub fn submit_contact(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<String, JsError> {
    let form = ContactForm {
        name,
        email,
        subject,
        message,
    };
    let submission = form.validate().map_err(|e| JsError::new(&e.to_string()))?;
    with_page(|page| to_json(&page.controller.submit_contact(&submission)))
}

/// Current `{activeSection, menuOpen, modal}` as JSON.
#[wasm_bindgen]
pub fn snapshot() -> Result<String, JsError> {
    with_page(|page| to_json(&page.controller.snapshot()))
}

#[wasm_bindgen]
pub fn get_nav_items() -> Result<String, JsError> {
    with_page(|page| {
        let snapshot = page.controller.snapshot();
        to_json(&nav_items(&page.catalog.sections, &snapshot))
    })
}

#[wasm_bindgen]
pub fn get_project_cards() -> Result<String, JsError> {
    with_page(|page| to_json(&project_cards(&page.catalog.projects, &page.catalog.owner)))
}

/// The open modal's contents, or `null`.
#[wasm_bindgen]
pub fn get_modal_view() -> Result<String, JsError> {
    with_page(|page| to_json(&modal_view(page.controller.modal(), &page.catalog.owner)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents_parse_from_dom_shape() {
        let extents =
            parse_extents(r#"{"home":{"start":0,"height":500},"about":{"start":500,"height":400}}"#)
                .unwrap();
        assert_eq!(extents.get("about"), Some(&Extent::new(500.0, 400.0)));
        assert_eq!(extents.len(), 2);
    }

    #[test]
    fn extents_feed_the_controller() {
        let extents =
            parse_extents(r#"{"home":{"start":0,"height":500},"about":{"start":500,"height":400}}"#)
                .unwrap();
        let catalog = SiteCatalog::bundled().unwrap();
        let mut controller = ViewStateController::from_catalog(&catalog);
        assert!(controller.on_scroll(450.0, &extents));
        assert_eq!(
            controller.active_section().map(SectionId::as_str),
            Some("about")
        );
    }

    #[test]
    fn malformed_extents_are_an_error() {
        assert!(parse_extents(r#"{"home": 5}"#).is_err());
    }
}
