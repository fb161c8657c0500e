// Browser tests for mounting and releasing cards.
// Run with `wasm-pack test --headless --firefox` (or --chrome).

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

const MOUNTED_ATTR: &str = "data-holo-mounted";

fn document() -> web::Document {
    web::window().unwrap().document().unwrap()
}

fn add_card(id: &str) -> web::Element {
    let body = document().body().unwrap();
    let markup = format!(
        r#"<div id="{id}" style="width:320px;height:200px">
             <canvas class="holo-canvas"></canvas>
             <div class="licence-glare"></div>
           </div>"#
    );
    body.insert_adjacent_html("beforeend", &markup).unwrap();
    document().get_element_by_id(id).unwrap()
}

#[wasm_bindgen_test]
fn two_cards_mount_independently() {
    let a = add_card("card-a");
    let b = add_card("card-b");
    let ha = licence_web::mount("card-a").unwrap();
    let hb = licence_web::mount("card-b").unwrap();
    assert!(a.has_attribute(MOUNTED_ATTR));
    assert!(b.has_attribute(MOUNTED_ATTR));

    ha.unmount();
    assert!(!ha.mounted());
    assert!(!a.has_attribute(MOUNTED_ATTR));
    assert!(hb.mounted());
    assert!(b.has_attribute(MOUNTED_ATTR));

    hb.unmount();
    a.remove();
    b.remove();
}

#[wasm_bindgen_test]
fn second_mount_of_same_card_is_refused() {
    let card = add_card("card-twice");
    let first = licence_web::mount("card-twice").unwrap();
    assert!(licence_web::mount("card-twice").is_err());
    assert!(first.mounted());

    first.unmount();
    // Once released the card can be mounted again.
    let again = licence_web::mount("card-twice").unwrap();
    assert!(again.mounted());
    again.unmount();
    card.remove();
}

#[wasm_bindgen_test]
fn dropping_the_handle_releases_the_card() {
    let card = add_card("card-dropped");
    let handle = licence_web::mount("card-dropped").unwrap();
    assert!(card.has_attribute(MOUNTED_ATTR));
    drop(handle);
    assert!(!card.has_attribute(MOUNTED_ATTR));
    assert!(!card.class_list().contains("tilt-active"));
    card.remove();
}

#[wasm_bindgen_test]
fn card_without_canvas_is_refused() {
    let body = document().body().unwrap();
    body.insert_adjacent_html("beforeend", r#"<div id="card-bare"></div>"#)
        .unwrap();
    assert!(licence_web::mount("card-bare").is_err());
    let card = document().get_element_by_id("card-bare").unwrap();
    assert!(!card.has_attribute(MOUNTED_ATTR));
    card.remove();
}
