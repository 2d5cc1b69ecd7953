// Copyright 2026 the Midground Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize and scroll listener wiring.
//!
//! [`EventBindings`] owns the engine for one scrolling scope together with
//! the two JS closures that drive it: a host-wide `resize` listener that
//! re-solves every layer, and a scope-scoped `scroll` listener that runs the
//! visibility hook. Both recompute synchronously on the calling task, as the
//! engine requires.
//!
//! Listeners are unregistered (and the closures dropped, so they don't leak)
//! when the `EventBindings` is dropped.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

use midground_core::diag::DiagSink;
use midground_core::engine::Engine;

use crate::ConsoleSink;
use crate::host::DomHost;

type Listener = Closure<dyn FnMut()>;

/// An initialized parallax scope with live event listeners.
///
/// Created by [`install`](Self::install) (or the crate-level
/// [`initialize_parallax`](crate::initialize_parallax)). Keep it alive for
/// as long as the scope should stay parallaxed.
pub struct EventBindings {
    engine: Rc<RefCell<Engine<DomHost>>>,
    host: Rc<RefCell<DomHost>>,
    scope: HtmlElement,
    resize: Option<Listener>,
    scroll: Option<Listener>,
}

impl EventBindings {
    /// Discovers and classifies the marked elements under `scope`, applies
    /// the initial transforms, and registers the resize/scroll listeners.
    #[must_use]
    pub fn install(scope: HtmlElement, diag: &mut dyn DiagSink) -> Self {
        let mut host = DomHost::new();
        let marked = host.discover(&scope);
        let engine = Engine::initialize(&mut host, scope.clone(), &marked, diag);

        let engine = Rc::new(RefCell::new(engine));
        let host = Rc::new(RefCell::new(host));

        let resize = {
            let engine = Rc::clone(&engine);
            let host = Rc::clone(&host);
            Closure::wrap(Box::new(move || {
                engine
                    .borrow()
                    .resize(&mut host.borrow_mut(), &mut ConsoleSink);
            }) as Box<dyn FnMut()>)
        };
        let scroll = {
            let engine = Rc::clone(&engine);
            let host = Rc::clone(&host);
            Closure::wrap(Box::new(move || {
                engine.borrow_mut().scroll(&mut host.borrow_mut());
            }) as Box<dyn FnMut()>)
        };

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        }
        let _ = scope.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref());

        Self {
            engine,
            host,
            scope,
            resize: Some(resize),
            scroll: Some(scroll),
        }
    }

    /// Re-solves every layer immediately (outside of a resize event).
    pub fn resize_now(&self, diag: &mut dyn DiagSink) {
        self.engine.borrow().resize(&mut self.host.borrow_mut(), diag);
    }

    /// The scrolling scope these bindings are attached to.
    #[must_use]
    pub fn scope(&self) -> &HtmlElement {
        &self.scope
    }

    /// Number of classified layers under the scope.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.engine.borrow().slots().len()
    }
}

impl Drop for EventBindings {
    fn drop(&mut self) {
        if let Some(resize) = self.resize.take()
            && let Some(window) = web_sys::window()
        {
            let _ = window
                .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
        }
        if let Some(scroll) = self.scroll.take() {
            let _ = self
                .scope
                .remove_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref());
        }
    }
}

impl core::fmt::Debug for EventBindings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventBindings")
            .field("layers", &self.layer_count())
            .field("listening", &self.resize.is_some())
            .finish_non_exhaustive()
    }
}
