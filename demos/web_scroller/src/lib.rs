// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: a parallax-scrolling page driven by `midground-backend-web`.
//!
//! Builds a scrolling column of alternating parallax backdrops and cover
//! panels, then hands the scope to [`initialize_parallax`]. The backdrops
//! recede at different depths as you scroll: the first and last use explicit
//! `parallax` rates, the middle one infers its depth from the cover
//! boundaries around it.
//!
//! Build with: `wasm-pack build --target web demos/web_scroller`
//!
//! Then serve `demos/web_scroller/` and open `index.html` in a browser.
//!
//! [`initialize_parallax`]: midground_backend_web::initialize_parallax

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::format;
use alloc::string::String;

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use midground_backend_web::initialize_parallax;

const CLIP_HEIGHT: f64 = 600.0;
const BACKDROP_HEIGHT: f64 = 1400.0;
const COVER_HEIGHT: f64 = 900.0;

/// Backdrop specs: (rate attribute value, background).
const BACKDROPS: [(&str, &str); 3] = [
    ("2", "linear-gradient(#0b2a4a, #16507e)"),
    ("", "linear-gradient(#16507e, #2a7ab0)"),
    ("4", "linear-gradient(#2a7ab0, #7db9d9)"),
];

fn element(document: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    Ok(document.create_element(tag)?.unchecked_into())
}

fn set_styles(el: &HtmlElement, styles: &[(&str, String)]) -> Result<(), JsValue> {
    let s = el.style();
    for (property, value) in styles {
        s.set_property(property, value)?;
    }
    Ok(())
}

/// Entry point — called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .expect("no global window")
        .document()
        .expect("no document");
    let body = document.body().expect("no body");

    // The scrolling clip element (the engine's scope).
    let clip = element(&document, "div")?;
    set_styles(
        &clip,
        &[
            ("overflow", "auto".into()),
            ("height", format!("{CLIP_HEIGHT}px")),
            ("position", "relative".into()),
        ],
    )?;

    // The non-clipping container holding backdrops and covers.
    let container = element(&document, "div")?;
    set_styles(&container, &[("overflow", "visible".into())])?;

    for (index, (rate, background)) in BACKDROPS.iter().enumerate() {
        let backdrop = element(&document, "div")?;
        backdrop.set_attribute("parallax", rate)?;
        set_styles(
            &backdrop,
            &[
                ("height", format!("{BACKDROP_HEIGHT}px")),
                ("background", String::from(*background)),
            ],
        )?;
        container.append_child(&backdrop)?;

        let cover = element(&document, "div")?;
        cover.set_attribute("parallax-cover", "")?;
        cover.set_text_content(Some(&format!("cover panel {}", index + 1)));
        set_styles(
            &cover,
            &[
                ("height", format!("{COVER_HEIGHT}px")),
                ("background", "#f5f2ea".into()),
                ("position", "relative".into()),
                ("z-index", "1".into()),
                ("padding", "2rem".into()),
                ("font", "24px sans-serif".into()),
            ],
        )?;
        container.append_child(&cover)?;
    }

    clip.append_child(&container)?;
    body.append_child(&clip)?;

    let bindings = initialize_parallax(clip);
    // The listeners must outlive this entry point.
    core::mem::forget(bindings);
    Ok(())
}
