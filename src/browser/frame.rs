use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameCallback = Closure<dyn FnMut(f64)>;

struct FrameShared {
    window: Window,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<FrameCallback>>,
}

impl FrameShared {
    fn schedule(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let handle = self.callback.borrow().as_ref().and_then(|cb| {
            self.window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .ok()
        });
        self.pending.set(handle);
    }
}

/// A `requestAnimationFrame` loop. It runs while the frame callback returns
/// `true`, sleeps once it returns `false`, and is woken again through a
/// [`FrameWaker`]. Dropping the loop cancels any pending frame.
pub struct FrameLoop {
    shared: Rc<FrameShared>,
}

/// Restarts a sleeping [`FrameLoop`]. Does nothing once the loop is gone.
#[derive(Clone, Default)]
pub struct FrameWaker {
    shared: Weak<FrameShared>,
}

impl FrameWaker {
    pub fn wake(&self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.schedule();
        }
    }
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let shared = Rc::new(FrameShared {
            window: web_sys::window()?,
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&shared);
        *shared.callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            shared.pending.set(None);
            if on_frame(timestamp) {
                shared.schedule();
            }
        }) as Box<dyn FnMut(f64)>));

        shared.schedule();
        Some(Self { shared })
    }

    pub fn waker(&self) -> FrameWaker {
        FrameWaker {
            shared: Rc::downgrade(&self.shared),
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(handle) = self.shared.pending.take() {
            let _ = self.shared.window.cancel_animation_frame(handle);
        }
        self.shared.callback.borrow_mut().take();
    }
}
