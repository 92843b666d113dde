use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::browser::listener::Listener;
use crate::motion::parallax::{ParallaxField, PointerOffset};
use crate::motion::reveal::Rect;

/// Moves registered layers against the pointer while it is over a container.
#[derive(Default)]
pub struct ParallaxTracker {
    layers: Rc<RefCell<ParallaxField<HtmlElement>>>,
    listener: Option<Listener>,
}

impl ParallaxTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listens for pointer moves on `container`, replacing any earlier one.
    pub fn attach_container(&mut self, container: &HtmlElement) {
        let layers = self.layers.clone();
        let bounds = container.clone();
        self.listener = Listener::new(container, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = bounds.get_bounding_client_rect();
            let rect = Rect::new(rect.left(), rect.top(), rect.width(), rect.height());
            let Some(offset) =
                PointerOffset::within(event.client_x() as f64, event.client_y() as f64, &rect)
            else {
                return;
            };
            for (layer, translation) in layers.borrow().translations(offset) {
                let _ = layer.style().set_property("transform", &translation.to_css());
            }
        });
    }

    pub fn register_layer(&mut self, layer: HtmlElement) -> usize {
        self.layers.borrow_mut().register_layer(layer)
    }

    pub fn detach(&mut self) {
        if self.listener.take().is_some() {
            debug!("Parallax detached from {} layers", self.layers.borrow().len());
        }
        self.layers.borrow_mut().clear();
    }
}

impl Drop for ParallaxTracker {
    fn drop(&mut self) {
        self.detach();
    }
}
