use crate::core::{tick, ticks_to_settle, AnimationState, FrameSlot, HoloConfig, Point2D};
use crate::dom;
use crate::overlay;
use crate::render;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Owns the animation state and everything a frame touches. Frames are
/// requested only while the eased position is still moving.
pub struct FrameDriver {
    config: HoloConfig,
    state: Cell<AnimationState>,
    slot: Cell<FrameSlot>,
    canvas: web::HtmlCanvasElement,
    glare: Option<web::HtmlElement>,
    gpu: RefCell<Option<render::GpuState>>,
    tick_cb: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameDriver {
    pub fn new(
        config: HoloConfig,
        canvas: web::HtmlCanvasElement,
        glare: Option<web::HtmlElement>,
    ) -> Rc<Self> {
        let driver = Rc::new(Self {
            config,
            state: Cell::new(AnimationState::default()),
            slot: Cell::new(FrameSlot::default()),
            canvas,
            glare,
            gpu: RefCell::new(None),
            tick_cb: RefCell::new(None),
        });
        // The callback holds a weak handle so the driver is not kept alive by
        // its own closure.
        let weak: Weak<Self> = Rc::downgrade(&driver);
        *driver.tick_cb.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(d) = weak.upgrade() {
                d.on_frame();
            }
        }) as Box<dyn FnMut()>));
        driver
    }

    #[inline]
    pub fn config(&self) -> &HoloConfig {
        &self.config
    }

    pub fn attach_gpu(&self, gpu: render::GpuState) {
        if self.slot.get().is_closed() {
            return;
        }
        *self.gpu.borrow_mut() = Some(gpu);
        self.redraw();
    }

    /// Point the animation at a new target, waking the loop if it was idle.
    pub fn set_target(&self, target: Point2D) {
        let mut state = self.state.get();
        let wake = state.set_target(target);
        self.state.set(state);
        if wake {
            let err = (state.target - state.current).abs().max_element();
            log::debug!(
                "[frame] wake -> ({:.1},{:.1}) ~{} frames",
                target.x,
                target.y,
                ticks_to_settle(err, self.config.ease, self.config.epsilon)
            );
            self.request_frame();
        }
    }

    /// Draw the current position without advancing the animation.
    pub fn redraw(&self) {
        let current = self.state.get();
        if let Some(glare) = &self.glare {
            overlay::set_glare(glare, current.current);
        }
        if let Some(g) = self.gpu.borrow_mut().as_mut() {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(current.tilt_vector()) {
                log::warn!("render error: {:?}", e);
            }
        }
    }

    pub fn on_resize(&self) {
        dom::sync_canvas_backing_size(&self.canvas);
        self.redraw();
    }

    fn request_frame(&self) {
        let mut slot = self.slot.get();
        if !slot.wants_request() {
            return;
        }
        let Some(window) = web::window() else {
            self.halt();
            return;
        };
        let cb = self.tick_cb.borrow();
        let Some(cb) = cb.as_ref() else {
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => {
                slot.armed(id);
                self.slot.set(slot);
            }
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                self.halt();
            }
        }
    }

    // Idle with nothing scheduled, so the next target change wakes the loop.
    fn halt(&self) {
        let mut state = self.state.get();
        state.halt();
        self.state.set(state);
    }

    fn on_frame(&self) {
        let mut slot = self.slot.get();
        let live = slot.fired();
        self.slot.set(slot);
        if !live {
            return;
        }
        let (next, done) = tick(self.state.get(), &self.config);
        self.state.set(next);
        self.redraw();
        if done {
            log::debug!(
                "[frame] settled at ({:.2},{:.2})",
                next.current.x,
                next.current.y
            );
        } else {
            self.request_frame();
        }
    }

    /// Cancel any outstanding frame, then release the GPU layer. Safe to
    /// call more than once.
    pub fn teardown(&self) {
        let mut slot = self.slot.get();
        let pending = slot.close();
        self.slot.set(slot);
        if let (Some(id), Some(window)) = (pending, web::window()) {
            _ = window.cancel_animation_frame(id);
        }
        self.halt();
        self.gpu.borrow_mut().take();
        self.tick_cb.borrow_mut().take();
    }
}

impl Drop for FrameDriver {
    fn drop(&mut self) {
        self.teardown();
    }
}
