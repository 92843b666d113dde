use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::motion::reveal::{Intersection, RevealMargin};

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// One `IntersectionObserver` for a margin configuration. Disconnects on drop.
pub struct IntersectionWatch {
    margin: RevealMargin,
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl IntersectionWatch {
    /// `on_entry` receives every observed element with its intersection and
    /// returns true when the element should no longer be observed.
    pub fn new<F>(margin: RevealMargin, threshold: f64, mut on_entry: F) -> Result<Self, JsValue>
    where
        F: FnMut(&Element, Intersection) -> bool + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let intersection = Intersection {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if on_entry(&target, intersection) {
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&margin.root_margin());
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            margin,
            observer,
            _callback: callback,
        })
    }

    pub fn margin(&self) -> RevealMargin {
        self.margin
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
