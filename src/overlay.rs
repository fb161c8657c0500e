use crate::constants::FALLBACK_CLASS;
use crate::core::{glare_gradient, Point2D};
use web_sys as web;

/// Move the CSS glare highlight to `at`.
#[inline]
pub fn set_glare(glare: &web::HtmlElement, at: Point2D) {
    _ = glare
        .style()
        .set_property("background", &glare_gradient(at));
}

/// Flag the card so CSS can show a static sheen instead of the shader layer.
#[inline]
pub fn mark_fallback(card: &web::Element) {
    _ = card.class_list().add_1(FALLBACK_CLASS);
}

#[inline]
pub fn clear_fallback(card: &web::Element) {
    _ = card.class_list().remove_1(FALLBACK_CLASS);
}
