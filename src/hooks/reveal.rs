use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::browser::reveal::RevealEngine;
use crate::motion::reveal::RevealMargin;

/// Shared handle to the page's reveal engine.
#[derive(Clone)]
pub struct RevealContext(Rc<RevealEngine>);

impl RevealContext {
    pub fn new() -> Self {
        Self(Rc::new(RevealEngine::new()))
    }

    pub fn engine(&self) -> &RevealEngine {
        &self.0
    }
}

impl Default for RevealContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RevealContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// True once the element behind `node` has been revealed. Outside a
/// [`RevealContext`] everything counts as revealed.
#[hook]
pub fn use_reveal(node: NodeRef, margin: RevealMargin) -> bool {
    let context = use_context::<RevealContext>();
    let revealed = use_state(|| context.is_none());

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, margin)| {
                let region = context.and_then(|context| {
                    let element = node.cast::<Element>()?;
                    let on_reveal = Callback::from(move |_| revealed.set(true));
                    let id = context.engine().register(&element, *margin, on_reveal)?;
                    Some((context, id))
                });
                move || {
                    if let Some((context, id)) = region {
                        context.engine().unregister(id);
                    }
                }
            },
            (node, margin),
        );
    }

    *revealed
}
