//! Browser `localStorage` backend
//!
//! The page's `window.localStorage` is the store, and the window `storage`
//! event is the cross-context transport. Browsers only fire that event in
//! documents other than the writer, which is exactly the delivery rule the
//! queue sync expects.

use crate::error::{Result, StorageError};
use crate::events::{ExternalChanges, StorageEvent};
use crate::store::KeyValueStore;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// `localStorage` of the current window
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the current window's `localStorage`
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| StorageError::backend("no window"))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::backend("localStorage unavailable"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: String) -> Result<()> {
        self.storage.set_item(key, &value).map_err(js_error)
    }

    fn subscribe(&self) -> Result<ExternalChanges> {
        let window = web_sys::window().ok_or_else(|| StorageError::backend("no window"))?;
        let (tx, changes) = ExternalChanges::channel();

        let listener = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
            move |event: web_sys::StorageEvent| {
                // `key` is null when another document called `clear()`
                let Some(key) = event.key() else {
                    return;
                };
                let _ = tx.send(StorageEvent {
                    key,
                    old_value: event.old_value(),
                    new_value: event.new_value(),
                });
            },
        );
        window
            .add_event_listener_with_callback("storage", listener.as_ref().unchecked_ref())
            .map_err(js_error)?;
        // Lives as long as the page
        listener.forget();

        Ok(changes)
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::backend(format!("{:?}", value))
}
