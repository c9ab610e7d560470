use log::warn;
use yew::prelude::*;

use crate::dom::{ScrollFrame, ScrollSubscription, ViewportObserver};

/// Calls `on_scroll` for every window scroll event while the component is
/// mounted. The listener is removed on unmount and replaced when `deps`
/// changes.
#[hook]
pub fn use_window_scroll<D>(deps: D, on_scroll: Callback<ScrollFrame>)
where
    D: PartialEq + 'static,
{
    use_effect_with_deps(
        move |_| {
            let subscription = match ScrollSubscription::new(move |frame| on_scroll.emit(frame)) {
                Ok(subscription) => Some(subscription),
                Err(e) => {
                    warn!("Scroll tracking disabled: {}", e);
                    None
                }
            };
            move || drop(subscription)
        },
        deps,
    );
}

/// Becomes true the first time `node` enters the viewport and stays true.
#[hook]
pub fn use_in_view_once(node: NodeRef, root_margin: &'static str) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<web_sys::Element>().and_then(|element| {
                    let reveal = in_view.clone();
                    let on_enter = Callback::from(move |_| reveal.set(true));
                    match ViewportObserver::observe_once(&element, root_margin, on_enter) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            // Show the content rather than leave it hidden.
                            warn!("Viewport tracking disabled: {}", e);
                            in_view.set(true);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            node,
        );
    }

    *in_view
}
