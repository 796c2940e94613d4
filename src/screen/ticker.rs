//! Cancellable `setInterval` wrapper.
//!
//! The ticker owns its JS closure, so the callback can never outlive the
//! ticker. `cancel()` only clears the interval and may be called from inside
//! the callback itself; the closure is released when the ticker is dropped,
//! which must happen outside the callback.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

pub(crate) struct Ticker {
    handle: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Ticker {
    pub(crate) fn start(period_ms: i32, on_tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback = Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>);
        let handle = win.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms,
        )?;
        log::debug!("ticker {} started ({}ms)", handle, period_ms);
        Ok(Self {
            handle: Some(handle),
            _callback: callback,
        })
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(w) = window() {
                w.clear_interval_with_handle(handle);
            }
            log::debug!("ticker {} cancelled", handle);
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
