use js_sys::{Array, Reflect};
use wasm_bindgen::{JsCast, JsValue, prelude::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

// intersection observer with teardown
//
// disconnects when dropped.  the handler is called once per entry, with the observer
// itself so that it can stop watching a target
pub struct Observer {
    inner: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Observer {
    pub fn new<F>(options: &IntersectionObserverInit, mut handler: F) -> anyhow::Result<Self>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    handler(&entry, &observer);
                }
            }
        });

        let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
            .map_err(|err| anyhow::Error::msg(format!("failed to create observer: {err:?}")))?;

        Ok(Observer {
            inner,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.inner.observe(target);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}

pub fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

// whether HTMLImageElement understands the loading attribute
pub fn native_lazy_supported() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    Reflect::get(&window, &JsValue::from_str("HTMLImageElement"))
        .and_then(|class| Reflect::get(&class, &JsValue::from_str("prototype")))
        .and_then(|prototype| Reflect::has(&prototype, &JsValue::from_str("loading")))
        .unwrap_or(false)
}

// per-element ids, so that observer callbacks can find their bookkeeping
pub fn tag(element: &Element, attribute: &str, id: u32) {
    let _ = element.set_attribute(attribute, &id.to_string());
}

pub fn read_tag(element: &Element, attribute: &str) -> Option<u32> {
    element.get_attribute(attribute)?.parse().ok()
}
