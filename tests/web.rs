#![cfg(target_arch = "wasm32")]

use lexicon::WebDom;
use lexicon_search::Searcher;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, Node};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn fixture(document: &Document) -> (Element, Vec<Node>) {
    let list = document.create_element("section").unwrap();
    list.set_inner_html(
        r#"<div class="entry">Apple</div><div class="entry">Banana split</div><div class="entry"><span>Pine</span>apple</div>"#,
    );
    document.body().unwrap().append_child(&list).unwrap();

    let found = list.query_selector_all("div[class=entry]").unwrap();
    let entries = (0..found.length()).filter_map(|i| found.item(i)).collect();
    (list, entries)
}

fn display(node: &Node) -> String {
    node.dyn_ref::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

fn order(list: &Element) -> Vec<String> {
    let children = list.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .map(|child| child.text_content().unwrap_or_default())
        .collect()
}

#[wasm_bindgen_test]
fn exact_matches_are_marked_and_moved_last() {
    let document = document();
    let (list, entries) = fixture(&document);
    let mut dom = WebDom::new("flex");
    let searcher = Searcher::new(&dom, entries.clone());

    let summary = searcher.search(&mut dom, "apple");

    assert_eq!(summary.exact, 2);
    assert_eq!(order(&list), vec!["Banana split", "Apple", "Pineapple"]);
    assert_eq!(display(&entries[1]), "none");
    assert_eq!(display(&entries[2]), "flex");
    let pine = entries[2].dyn_ref::<Element>().unwrap();
    assert!(pine.class_list().contains("exact-match"));
}

#[wasm_bindgen_test]
fn reset_restores_order_and_clears_markers() {
    let document = document();
    let (list, entries) = fixture(&document);
    let mut dom = WebDom::new("flex");
    let searcher = Searcher::new(&dom, entries.clone());

    searcher.search(&mut dom, "an");
    assert_eq!(display(&entries[0]), "none");

    searcher.reset(&mut dom);
    assert_eq!(order(&list), vec!["Apple", "Banana split", "Pineapple"]);
    for entry in &entries {
        assert_eq!(display(entry), "flex");
        assert!(!entry.dyn_ref::<Element>().unwrap().class_list().contains("exact-match"));
    }
}
