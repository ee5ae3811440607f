//! Browser entry point for Lexicon.
//!
//! Resolves the word entries on the current page, indexes them once and
//! re-runs the search every time the query input changes.

mod config;
mod web_dom;

use lexicon_search::{SearchOptions, Searcher, normalize_query};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlInputElement, Node};

pub use config::AppConfig;
pub use web_dom::WebDom;

/// Mounts with the default config when the page has a search input.
///
/// Pages with a different layout call [`mount_with_config`] instead.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let document = current_document()?;
    let config = AppConfig::default();
    if document.get_element_by_id(&config.search_input_id).is_none() {
        log::debug!("no #{} input, waiting for an explicit mount", config.search_input_id);
        return Ok(());
    }
    mount(&document, &config)
}

/// Mounts using a JSON config; see [`AppConfig`] for the accepted fields.
#[wasm_bindgen(js_name = mountWithConfig)]
pub fn mount_with_config(config_json: &str) -> Result<(), JsValue> {
    let config =
        AppConfig::from_json(config_json).map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
    mount(&current_document()?, &config)
}

fn current_document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Wires a searcher over the entries of `document` to its query input.
///
/// The searcher moves into the input listener, which lives as long as the
/// page does.
pub fn mount(document: &Document, config: &AppConfig) -> Result<(), JsValue> {
    let input: HtmlInputElement = document
        .get_element_by_id(&config.search_input_id)
        .ok_or_else(|| {
            JsValue::from_str(&format!("no element with id '{}'", config.search_input_id))
        })?
        .dyn_into()
        .map_err(|_| {
            JsValue::from_str(&format!("'{}' is not an input element", config.search_input_id))
        })?;

    let found = document.query_selector_all(&config.entry_selector)?;
    let entries: Vec<Node> = (0..found.length()).filter_map(|i| found.item(i)).collect();

    let mut dom = WebDom::new(config.display.clone());
    let options = SearchOptions {
        marker_class: config.marker_class.clone(),
    };
    let searcher = Searcher::with_options(&dom, entries, options);
    log::info!(
        "mounted search over {} entries matching {}",
        searcher.len(),
        config.entry_selector
    );

    let source = input.clone();
    let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let query = normalize_query(&source.value());
        searcher.search(&mut dom, &query);
    });
    input.add_event_listener_with_callback(&config.event, on_input.as_ref().unchecked_ref())?;
    on_input.forget();

    Ok(())
}
