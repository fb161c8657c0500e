use crate::core::{map_pointer, NEUTRAL};
use crate::dom::{self, Listener};
use crate::view::View;
use std::rc::Rc;
use web_sys as web;

/// Pointer hover drives the target when tilt is not available; leaving the
/// card recentres it.
pub fn wire_pointer_handlers(view: &Rc<View>) {
    wire_pointermove(view);
    wire_pointerleave(view);
}

fn wire_pointermove(view: &Rc<View>) {
    let weak = Rc::downgrade(view);
    let listener = Listener::typed(
        view.card().as_ref(),
        "pointermove",
        move |ev: web::PointerEvent| {
            let Some(view) = weak.upgrade() else {
                return;
            };
            if view.tilt_active() {
                return;
            }
            let rect = dom::container_rect(view.card());
            let target = map_pointer(ev.client_x() as f32, ev.client_y() as f32, rect);
            view.driver().set_target(target);
        },
    );
    view.add_listener(listener);
}

fn wire_pointerleave(view: &Rc<View>) {
    let weak = Rc::downgrade(view);
    let listener = Listener::typed(
        view.card().as_ref(),
        "pointerleave",
        move |_ev: web::PointerEvent| {
            match weak.upgrade() {
                Some(view) if !view.tilt_active() => view.driver().set_target(NEUTRAL),
                _ => {}
            }
        },
    );
    view.add_listener(listener);
}
