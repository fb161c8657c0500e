use crate::core::{
    classify_permission_response, map_tilt, MotionPermission, MotionSupport, NEUTRAL,
};
use crate::dom::Listener;
use crate::view::View;
use js_sys::Reflect;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const EVENT_TYPE: &str = "DeviceOrientationEvent";
const REQUEST_PERMISSION: &str = "requestPermission";

fn orientation_constructor(window: &web::Window) -> Option<JsValue> {
    Reflect::get(window, &JsValue::from_str(EVENT_TYPE))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Probe the page for orientation events and the permission API.
pub fn detect_support() -> MotionSupport {
    let Some(window) = web::window() else {
        return MotionSupport::Unsupported;
    };
    let ctor = orientation_constructor(&window);
    let has_request = ctor
        .as_ref()
        .and_then(|c| Reflect::get(c, &JsValue::from_str(REQUEST_PERMISSION)).ok())
        .map(|f| f.is_function())
        .unwrap_or(false);
    MotionSupport::detect(ctor.is_some(), has_request)
}

async fn try_request_permission() -> Result<MotionPermission, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let ctor = orientation_constructor(&window)
        .ok_or_else(|| JsValue::from_str("no DeviceOrientationEvent"))?;
    let request: js_sys::Function =
        Reflect::get(&ctor, &JsValue::from_str(REQUEST_PERMISSION))?.dyn_into()?;
    let promise: js_sys::Promise = request.call0(&ctor)?.dyn_into()?;
    let response = JsFuture::from(promise).await?;
    Ok(classify_permission_response(
        &response.as_string().unwrap_or_default(),
    ))
}

/// Ask for orientation access. Rejections and exceptions count as a denial.
pub async fn request_permission() -> MotionPermission {
    match try_request_permission().await {
        Ok(p) => p,
        Err(e) => {
            log::debug!("[tilt] permission request failed: {:?}", e);
            MotionPermission::Denied
        }
    }
}

/// Set up tilt input according to what the browser supports. When a
/// permission prompt is needed it is deferred to the first click on the card.
pub fn wire_motion(view: &Rc<View>) {
    let support = detect_support();
    log::info!("[tilt] support={:?}", support);
    match support.immediate() {
        Some(permission) => apply_permission(view, permission),
        None => wire_permission_gesture(view),
    }
}

fn wire_permission_gesture(view: &Rc<View>) {
    let weak = Rc::downgrade(view);
    let listener = Listener::new(view.card().as_ref(), "click", move |_ev: web::Event| {
        let Some(view) = weak.upgrade() else {
            return;
        };
        if !view.begin_permission_request() {
            return;
        }
        let weak = Rc::downgrade(&view);
        spawn_local(async move {
            let permission = request_permission().await;
            if let Some(view) = weak.upgrade() {
                apply_permission(&view, permission);
            }
        });
    });
    view.add_listener(listener);
}

fn apply_permission(view: &Rc<View>, permission: MotionPermission) {
    if !view.is_mounted() {
        return;
    }
    log::info!("[tilt] permission={:?}", permission);
    match permission {
        MotionPermission::Granted => wire_deviceorientation(view),
        MotionPermission::Denied | MotionPermission::Unsupported => {
            view.driver().set_target(NEUTRAL)
        }
    }
}

fn wire_deviceorientation(view: &Rc<View>) {
    let Some(window) = web::window() else {
        return;
    };
    let weak = Rc::downgrade(view);
    let listener = Listener::typed(
        window.as_ref(),
        "deviceorientation",
        move |ev: web::DeviceOrientationEvent| {
            let Some(view) = weak.upgrade() else {
                return;
            };
            // Desktop browsers expose the event type but report null angles.
            let (Some(gamma), Some(beta)) = (ev.gamma(), ev.beta()) else {
                return;
            };
            view.set_tilt_active(true);
            let sensitivity = view.driver().config().sensitivity;
            view.driver()
                .set_target(map_tilt(gamma as f32, beta as f32, sensitivity));
        },
    );
    view.add_listener(listener);
}
