use crate::constants::{
    CANVAS_SELECTOR, DATA_EASE, DATA_SENSITIVITY, GLARE_SELECTOR, MOUNTED_ATTR,
    TILT_ACTIVE_CLASS,
};
use crate::core::HoloConfig;
use crate::dom::{self, Listener};
use crate::events;
use crate::frame::FrameDriver;
use crate::overlay;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// One mounted card: its elements, the frame driver and every listener
/// registered on its behalf.
pub struct View {
    card: web::Element,
    driver: Rc<FrameDriver>,
    listeners: RefCell<Vec<Listener>>,
    mounted: Cell<bool>,
    tilt_active: Cell<bool>,
    permission_asked: Cell<bool>,
}

impl View {
    /// Mount on the card with id `card_id`. The canvas and glare element are
    /// looked up inside that card; a card that is already mounted is refused.
    pub fn mount(document: &web::Document, card_id: &str) -> anyhow::Result<Rc<Self>> {
        let card = document
            .get_element_by_id(card_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", card_id))?;
        if card.has_attribute(MOUNTED_ATTR) {
            anyhow::bail!("#{} is already mounted", card_id);
        }
        let canvas: web::HtmlCanvasElement = card
            .query_selector(CANVAS_SELECTOR)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
            .ok_or_else(|| anyhow::anyhow!("#{} has no {}", card_id, CANVAS_SELECTOR))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let glare = card
            .query_selector(GLARE_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if glare.is_none() {
            log::warn!("[mount] no {} in #{}; specular glare disabled", GLARE_SELECTOR, card_id);
        }

        let config = HoloConfig::default().with_overrides(
            card.get_attribute(DATA_SENSITIVITY).as_deref(),
            card.get_attribute(DATA_EASE).as_deref(),
        );
        log::info!(
            "[mount] #{} sensitivity={:.2} ease={:.3}",
            card_id,
            config.sensitivity,
            config.ease
        );

        _ = card.set_attribute(MOUNTED_ATTR, "");
        dom::sync_canvas_backing_size(&canvas);
        let driver = FrameDriver::new(config, canvas.clone(), glare);
        let view = Rc::new(Self {
            card,
            driver,
            listeners: RefCell::new(Vec::new()),
            mounted: Cell::new(true),
            tilt_active: Cell::new(false),
            permission_asked: Cell::new(false),
        });

        events::wire_pointer_handlers(&view);
        events::wire_motion(&view);
        view.wire_resize();
        view.driver.redraw();

        let weak = Rc::downgrade(&view);
        spawn_local(async move {
            let result = render::GpuState::new(&canvas).await;
            let Some(view) = weak.upgrade() else {
                return;
            };
            if !view.is_mounted() {
                return;
            }
            match result {
                Ok(gpu) => view.driver.attach_gpu(gpu),
                Err(e) if e.is_context_unavailable() => {
                    log::warn!("holographic layer unavailable: {}", e);
                    overlay::mark_fallback(&view.card);
                }
                Err(e) => {
                    log::error!("holographic layer disabled: {}", e);
                    overlay::mark_fallback(&view.card);
                }
            }
        });

        Ok(view)
    }

    fn wire_resize(self: &Rc<Self>) {
        let Some(window) = web::window() else {
            return;
        };
        let weak = Rc::downgrade(self);
        let listener = Listener::new(window.as_ref(), "resize", move |_ev: web::Event| {
            if let Some(view) = weak.upgrade() {
                view.driver.on_resize();
            }
        });
        self.add_listener(listener);
    }

    #[inline]
    pub fn card(&self) -> &web::Element {
        &self.card
    }

    #[inline]
    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    pub fn add_listener(&self, listener: Listener) {
        // Dropping the listener unregisters it straight away.
        if self.is_mounted() {
            self.listeners.borrow_mut().push(listener);
        }
    }

    #[inline]
    pub fn tilt_active(&self) -> bool {
        self.tilt_active.get()
    }

    pub fn set_tilt_active(&self, active: bool) {
        if self.tilt_active.replace(active) == active {
            return;
        }
        let classes = self.card.class_list();
        _ = if active {
            classes.add_1(TILT_ACTIVE_CLASS)
        } else {
            classes.remove_1(TILT_ACTIVE_CLASS)
        };
    }

    /// Claims the single permission prompt; `false` if one was already made.
    pub fn begin_permission_request(&self) -> bool {
        !self.permission_asked.replace(true)
    }

    /// Remove listeners, cancel any pending frame and release the GPU layer.
    pub fn unmount(&self) {
        if !self.mounted.replace(false) {
            return;
        }
        self.listeners.borrow_mut().clear();
        self.driver.teardown();
        self.set_tilt_active(false);
        overlay::clear_fallback(&self.card);
        _ = self.card.remove_attribute(MOUNTED_ATTR);
        log::info!("[unmount] card released");
    }
}

impl Drop for View {
    fn drop(&mut self) {
        self.unmount();
    }
}
