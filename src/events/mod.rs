pub mod motion;
pub mod pointer;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An owned DOM event listener registration.
///
/// Holding the value keeps the listener (and its closure) alive; dropping it
/// removes the listener. Repeated mount/unmount cycles therefore cannot leak
/// handlers — teardown is tied to ownership, not to a cleanup call someone
/// has to remember.
pub struct Subscription {
    target: web::EventTarget,
    event: &'static str,
    callback: js_sys::Function,
    _closure: Box<dyn std::any::Any>,
}

impl Subscription {
    /// Register `handler` for `event` on `target`.
    ///
    /// Registration failure is logged and otherwise ignored; a missing
    /// listener degrades the effect, never the page.
    pub fn listen<E>(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> Self
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        let callback: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        if let Err(e) = target.add_event_listener_with_callback(event, &callback) {
            log::warn!("failed to add {} listener: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            callback,
            _closure: Box::new(closure),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.callback);
    }
}
