//! Render surface: writes each frame's parameters where the stylesheet can
//! read them. Background layers use the `--bg-*` custom properties, the hero
//! mask uses `--mask-reveal`, the navbar keys off the `data-nav-*` attributes.

use crate::dom;
use verdanza_core::FrameOutput;
use web_sys as web;

const SPOTLIGHT_ID: &str = "cursor-spotlight";

#[derive(Default)]
pub struct Surface {
    last: Option<FrameOutput>,
}

impl Surface {
    pub fn apply(&mut self, document: &web::Document, out: &FrameOutput) {
        if self.last.as_ref() == Some(out) {
            return;
        }
        self.last = Some(*out);

        if let Some(root) = dom::root_element(document) {
            let style = root.style();
            let p = &out.params;
            _ = style.set_property("--bg-translate-y", &format!("{:.2}px", p.translate_y));
            _ = style.set_property("--bg-scale", &format!("{:.4}", p.scale));
            _ = style.set_property("--bg-blur", &format!("{:.2}px", p.blur_radius_px));
            _ = style.set_property("--bg-overlay", &format!("{:.3}", p.overlay_opacity));
            _ = style.set_property("--mask-reveal", &format!("{:.2}%", p.mask_reveal_percent));
            _ = style.set_property("--nav-offset", &format!("{:.1}px", out.navbar.offset_y));
            _ = root.set_attribute("data-nav-visible", bool_attr(p.navbar_visible));
            _ = root.set_attribute("data-nav-condensed", bool_attr(out.navbar.condensed));
            _ = root.set_attribute("data-nav-menu", bool_attr(out.navbar.menu_open));
        }

        if let Some(el) = dom::html_element_by_id(document, SPOTLIGHT_ID) {
            _ = el
                .style()
                .set_property("background", &out.spotlight.css_background());
        }
    }
}

#[inline]
fn bool_attr(v: bool) -> &'static str {
    if v {
        "true"
    } else {
        "false"
    }
}
