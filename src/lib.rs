#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod view;

use view::View;

thread_local! {
    // Card mounted by `start`, kept alive until `unmount_default` is called.
    static AUTO_MOUNTED: RefCell<Option<HoloCard>> = const { RefCell::new(None) };
}

/// Handle to a mounted card. Freeing it (`free()` from JS, or finalization)
/// unmounts the card the same way `unmount` does.
#[wasm_bindgen]
pub struct HoloCard {
    view: Rc<View>,
}

#[wasm_bindgen]
impl HoloCard {
    /// Detach all listeners, cancel the pending frame and release GPU
    /// resources. Further calls do nothing.
    pub fn unmount(&self) {
        self.view.unmount();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.view.is_mounted()
    }
}

/// Mount the holographic effect on the card element with id `card_id`.
#[wasm_bindgen]
pub fn mount(card_id: &str) -> Result<HoloCard, JsValue> {
    mount_card(card_id)
        .map(|view| HoloCard { view })
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Tear down the card mounted automatically at start-up, if any.
#[wasm_bindgen]
pub fn unmount_default() {
    if let Some(card) = AUTO_MOUNTED.with(|slot| slot.borrow_mut().take()) {
        card.unmount();
    }
}

fn mount_card(card_id: &str) -> anyhow::Result<Rc<View>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    View::mount(&document, card_id)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("licence-web starting");

    let has_card = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::CARD_ID))
        .is_some();
    if !has_card {
        log::info!("no #{} on page; waiting for mount()", constants::CARD_ID);
        return Ok(());
    }
    match mount_card(constants::CARD_ID) {
        Ok(view) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(HoloCard { view })),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}
