use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use web_sys::Element;
use yew::Callback;

use crate::browser::observer::IntersectionWatch;
use crate::config::REVEAL_THRESHOLD;
use crate::motion::reveal::{Intersection, RegionId, RevealMargin, RevealTracker};

struct Watched {
    id: RegionId,
    element: Element,
    on_reveal: Callback<()>,
}

struct Registry {
    tracker: RevealTracker,
    watched: Vec<Watched>,
}

impl Registry {
    /// Returns the reveal callback if this intersection revealed the element.
    fn observe(
        &mut self,
        margin: RevealMargin,
        element: &Element,
        entry: Intersection,
    ) -> Option<Callback<()>> {
        let pos = self
            .watched
            .iter()
            .position(|w| &w.element == element && self.tracker.margin(w.id) == Some(margin))?;
        let id = self.watched[pos].id;
        if !self.tracker.observe(id, entry) {
            return None;
        }
        let watched = self.watched.swap_remove(pos);
        debug!("Region {:?} revealed ({:?} margin)", id, margin);
        Some(watched.on_reveal)
    }

    /// Forgets `id`, returning its element and the margin it was watched under.
    fn remove(&mut self, id: RegionId) -> Option<(Element, RevealMargin)> {
        let margin = self.tracker.margin(id)?;
        self.tracker.unregister(id);
        let pos = self.watched.iter().position(|w| w.id == id)?;
        Some((self.watched.swap_remove(pos).element, margin))
    }
}

/// Page-wide reveal engine: one intersection watch per margin, shared by
/// every region that registers with it.
pub struct RevealEngine {
    registry: Rc<RefCell<Registry>>,
    watches: Vec<IntersectionWatch>,
}

impl RevealEngine {
    pub fn new() -> Self {
        let registry = Rc::new(RefCell::new(Registry {
            tracker: RevealTracker::new(REVEAL_THRESHOLD),
            watched: Vec::new(),
        }));

        let watches = RevealMargin::ALL
            .iter()
            .filter_map(|&margin| {
                let registry = Rc::downgrade(&registry);
                let watch = IntersectionWatch::new(margin, REVEAL_THRESHOLD, move |element, entry| {
                    let Some(registry) = registry.upgrade() else {
                        return true;
                    };
                    let revealed = registry.borrow_mut().observe(margin, element, entry);
                    match revealed {
                        Some(on_reveal) => {
                            on_reveal.emit(());
                            true
                        }
                        None => false,
                    }
                });
                match watch {
                    Ok(watch) => Some(watch),
                    Err(e) => {
                        warn!("IntersectionObserver unavailable for {:?}: {:?}", margin, e);
                        None
                    }
                }
            })
            .collect();

        debug!("Reveal engine mounted");
        Self { registry, watches }
    }

    fn watch(&self, margin: RevealMargin) -> Option<&IntersectionWatch> {
        self.watches.iter().find(|w| w.margin() == margin)
    }

    /// Starts observing `element`. Without a working observer the region is
    /// revealed on the spot and no handle is returned.
    pub fn register(
        &self,
        element: &Element,
        margin: RevealMargin,
        on_reveal: Callback<()>,
    ) -> Option<RegionId> {
        let Some(watch) = self.watch(margin) else {
            on_reveal.emit(());
            return None;
        };
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.tracker.register(margin);
            registry.watched.push(Watched {
                id,
                element: element.clone(),
                on_reveal,
            });
            id
        };
        watch.observe(element);
        Some(id)
    }

    pub fn unregister(&self, id: RegionId) {
        let removed = self.registry.borrow_mut().remove(id);
        if let Some((element, margin)) = removed {
            if let Some(watch) = self.watch(margin) {
                watch.unobserve(&element);
            }
        }
    }

    pub fn pending(&self, margin: RevealMargin) -> usize {
        self.registry.borrow().tracker.pending(margin)
    }
}

impl Default for RevealEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RevealEngine {
    fn drop(&mut self) {
        debug!(
            "Reveal engine torn down with {} regions still pending",
            RevealMargin::ALL.iter().map(|&m| self.pending(m)).sum::<usize>()
        );
    }
}
