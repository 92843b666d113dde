use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent};

use crate::browser::frame::{FrameLoop, FrameWaker};
use crate::browser::listener::Listener;
use crate::config::INTERACTIVE_SELECTOR;
use crate::motion::cursor::{CursorFollower, LayerFrame};

/// Binds the cursor follower to the document and paints both layers on
/// animation frames. The frame loop sleeps once both layers are at rest and
/// wakes on the next pointer event. Everything is released when this is
/// dropped.
///
/// Hover tracking covers the interactive elements present at mount time
/// only. Links or buttons inserted later do not grow the cursor.
pub struct CursorTracker {
    _listeners: Vec<Listener>,
    _frames: Option<FrameLoop>,
}

impl CursorTracker {
    pub fn mount(dot: HtmlElement, ring: HtmlElement) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let follower = Rc::new(RefCell::new(CursorFollower::new()));

        let frames = {
            let follower = follower.clone();
            let mut painted: Option<(LayerFrame, LayerFrame)> = None;
            FrameLoop::start(move |now| {
                let mut follower = follower.borrow_mut();
                let frame = follower.advance(now);
                if painted != Some(frame) {
                    paint(&dot, &frame.0);
                    paint(&ring, &frame.1);
                    painted = Some(frame);
                }
                if follower.is_settled() {
                    follower.rest();
                    return false;
                }
                true
            })
        };
        let waker = frames.as_ref().map(FrameLoop::waker).unwrap_or_default();

        let mut listeners = Vec::new();
        listeners.extend(document_listeners(&document, &follower, &waker));
        let interactive = hover_listeners(&document, &follower, &waker);
        debug!("Cursor tracking {} interactive elements", interactive.len() / 2);
        listeners.extend(interactive);

        Some(Self {
            _listeners: listeners,
            _frames: frames,
        })
    }
}

/// Applies `update` to the follower, then makes sure a frame is coming.
fn driven<F>(
    follower: &Rc<RefCell<CursorFollower>>,
    waker: &FrameWaker,
    mut update: F,
) -> impl FnMut(Event) + 'static
where
    F: FnMut(&mut CursorFollower, &Event) + 'static,
{
    let follower = follower.clone();
    let waker = waker.clone();
    move |event: Event| {
        update(&mut *follower.borrow_mut(), &event);
        waker.wake();
    }
}

fn document_listeners(
    document: &Document,
    follower: &Rc<RefCell<CursorFollower>>,
    waker: &FrameWaker,
) -> Vec<Listener> {
    let on_move = driven(follower, waker, |follower, event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            follower.move_to(event.client_x() as f64, event.client_y() as f64);
        }
    });
    let on_press = driven(follower, waker, |follower, event| {
        follower.press(event.time_stamp())
    });
    let on_leave = driven(follower, waker, |follower, _| follower.set_hidden(true));
    let on_enter = driven(follower, waker, |follower, _| follower.set_hidden(false));

    [
        Listener::new(document, "mousemove", on_move),
        Listener::new(document, "mousedown", on_press),
        Listener::new(document, "mouseleave", on_leave),
        Listener::new(document, "mouseenter", on_enter),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn hover_listeners(
    document: &Document,
    follower: &Rc<RefCell<CursorFollower>>,
    waker: &FrameWaker,
) -> Vec<Listener> {
    let Ok(nodes) = document.query_selector_all(INTERACTIVE_SELECTOR) else {
        return Vec::new();
    };
    let mut listeners = Vec::new();
    for i in 0..nodes.length() {
        let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        listeners.extend(Listener::new(
            &element,
            "mouseenter",
            driven(follower, waker, |follower, _| follower.set_hovering(true)),
        ));
        listeners.extend(Listener::new(
            &element,
            "mouseleave",
            driven(follower, waker, |follower, _| follower.set_hovering(false)),
        ));
    }
    listeners
}

fn paint(layer: &HtmlElement, frame: &LayerFrame) {
    let style = layer.style();
    let _ = style.set_property("transform", &frame.transform());
    let _ = style.set_property("opacity", &frame.opacity.to_string());
}
