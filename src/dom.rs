use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions,
    Window,
};
use yew::Callback;

use crate::motion::RevealLatch;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("{op} failed: {reason}")]
    Js { op: &'static str, reason: String },
}

impl DomError {
    fn js(op: &'static str) -> impl FnOnce(JsValue) -> DomError {
        move |value| DomError::Js {
            op,
            reason: format!("{:?}", value),
        }
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Current scroll offset and viewport height, read on every scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub scroll_y: f64,
    pub viewport_height: f64,
}

impl ScrollFrame {
    pub fn read(window: &Window) -> Self {
        ScrollFrame {
            scroll_y: window.scroll_y().unwrap_or_default(),
            viewport_height: window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default(),
        }
    }
}

/// Something that emits scroll events. The app only uses the browser window.
pub trait ScrollSource: Clone + 'static {
    type Listener;

    fn frame(&self) -> ScrollFrame;
    fn listen(&self, on_scroll: Box<dyn FnMut()>) -> Result<Self::Listener, DomError>;
    fn unlisten(&self, listener: &Self::Listener) -> Result<(), DomError>;
}

impl ScrollSource for Window {
    type Listener = Closure<dyn FnMut()>;

    fn frame(&self) -> ScrollFrame {
        ScrollFrame::read(self)
    }

    fn listen(&self, on_scroll: Box<dyn FnMut()>) -> Result<Self::Listener, DomError> {
        let listener = Closure::wrap(on_scroll);
        self.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .map_err(DomError::js("add scroll listener"))?;
        Ok(listener)
    }

    fn unlisten(&self, listener: &Self::Listener) -> Result<(), DomError> {
        self.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .map_err(DomError::js("remove scroll listener"))
    }
}

/// Scroll listener that is removed when dropped.
pub struct ScrollSubscription<S: ScrollSource = Window> {
    source: S,
    listener: S::Listener,
}

impl ScrollSubscription<Window> {
    pub fn new<F>(on_scroll: F) -> Result<Self, DomError>
    where
        F: FnMut(ScrollFrame) + 'static,
    {
        ScrollSubscription::on(window()?, on_scroll)
    }
}

impl<S: ScrollSource> ScrollSubscription<S> {
    /// Registers `on_scroll` and runs it once with the current position.
    pub fn on<F>(source: S, mut on_scroll: F) -> Result<Self, DomError>
    where
        F: FnMut(ScrollFrame) + 'static,
    {
        on_scroll(source.frame());

        let reader = source.clone();
        let listener = source.listen(Box::new(move || on_scroll(reader.frame())))?;

        Ok(ScrollSubscription { source, listener })
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        if let Err(e) = self.source.unlisten(&self.listener) {
            log::warn!("Failed to remove scroll listener: {}", e);
        }
    }
}

/// Inline style writes, so styling code can run against any element.
pub trait StyleTarget {
    fn set_style(&self, property: &str, value: &str) -> Result<(), DomError>;
}

impl StyleTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) -> Result<(), DomError> {
        self.style()
            .set_property(property, value)
            .map_err(DomError::js("set style"))
    }
}

/// Fires `on_enter` the first time `target` intersects the viewport, then
/// stops observing. Disconnects on drop as well.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn observe_once(
        target: &Element,
        root_margin: &str,
        on_enter: Callback<()>,
    ) -> Result<Self, DomError> {
        let mut latch = RevealLatch::default();
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if latch.observe(visible) {
                observer.disconnect();
                on_enter.emit(());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(DomError::js("create intersection observer"))?;
        observer.observe(target);

        Ok(ViewportObserver {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Smoothly scrolls the element with `id` into view.
pub fn scroll_to_section(id: &str) -> Result<(), DomError> {
    let document = window()?.document().ok_or(DomError::NoDocument)?;
    let section = document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Smoothly scrolls the page down by one viewport height.
pub fn scroll_one_screen() -> Result<(), DomError> {
    let window = window()?;
    let frame = ScrollFrame::read(&window);
    let options = ScrollToOptions::new();
    options.set_top(frame.viewport_height);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn scroll_to_top() -> Result<(), DomError> {
    window()?.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}

/// Callback for buttons that jump to a page section.
pub fn section_link(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        if let Err(e) = scroll_to_section(id) {
            log::warn!("Could not scroll to #{}: {}", id, e);
        }
    })
}

#[cfg(test)]
pub mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::{DomError, ScrollFrame, ScrollSource, StyleTarget};

    /// In-memory window: scrolling it calls every registered listener.
    #[derive(Clone, Default)]
    pub struct FakeWindow {
        scroll_y: Rc<Cell<f64>>,
        next_id: Rc<Cell<usize>>,
        listeners: Rc<RefCell<HashMap<usize, Box<dyn FnMut()>>>>,
    }

    impl FakeWindow {
        pub fn scroll_to(&self, y: f64) {
            self.scroll_y.set(y);
            for listener in self.listeners.borrow_mut().values_mut() {
                listener();
            }
        }

        pub fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl ScrollSource for FakeWindow {
        type Listener = usize;

        fn frame(&self) -> ScrollFrame {
            ScrollFrame {
                scroll_y: self.scroll_y.get(),
                viewport_height: 800.0,
            }
        }

        fn listen(&self, on_scroll: Box<dyn FnMut()>) -> Result<usize, DomError> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().insert(id, on_scroll);
            Ok(id)
        }

        fn unlisten(&self, listener: &usize) -> Result<(), DomError> {
            self.listeners
                .borrow_mut()
                .remove(listener)
                .map(|_| ())
                .ok_or_else(|| DomError::MissingElement(format!("listener {}", listener)))
        }
    }

    /// Records inline style writes.
    #[derive(Default)]
    pub struct FakeElement {
        pub styles: RefCell<HashMap<String, String>>,
    }

    impl FakeElement {
        pub fn style(&self, property: &str) -> Option<String> {
            self.styles.borrow().get(property).cloned()
        }
    }

    impl StyleTarget for FakeElement {
        fn set_style(&self, property: &str, value: &str) -> Result<(), DomError> {
            self.styles
                .borrow_mut()
                .insert(property.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::testing::FakeWindow;
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl FnMut(ScrollFrame) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |frame: ScrollFrame| sink.borrow_mut().push(frame.scroll_y))
    }

    #[test]
    fn subscription_reports_initial_position_then_scrolls() {
        let window = FakeWindow::default();
        window.scroll_to(120.0);
        let (seen, on_scroll) = recorder();

        let _subscription = ScrollSubscription::on(window.clone(), on_scroll).unwrap();
        window.scroll_to(300.0);

        assert_eq!(*seen.borrow(), vec![120.0, 300.0]);
        assert_eq!(window.listener_count(), 1);
    }

    #[test]
    fn dropping_subscription_removes_listener() {
        let window = FakeWindow::default();
        let (seen, on_scroll) = recorder();

        let subscription = ScrollSubscription::on(window.clone(), on_scroll).unwrap();
        window.scroll_to(60.0);
        drop(subscription);
        window.scroll_to(500.0);

        assert_eq!(window.listener_count(), 0);
        assert_eq!(*seen.borrow(), vec![0.0, 60.0]);
    }

    #[test]
    fn resubscribing_leaves_one_listener() {
        let window = FakeWindow::default();
        let (first, on_first) = recorder();
        let (second, on_second) = recorder();

        let subscription = ScrollSubscription::on(window.clone(), on_first).unwrap();
        drop(subscription);
        let _subscription = ScrollSubscription::on(window.clone(), on_second).unwrap();
        window.scroll_to(42.0);

        assert_eq!(window.listener_count(), 1);
        assert_eq!(*first.borrow(), vec![0.0]);
        assert_eq!(*second.borrow(), vec![0.0, 42.0]);
    }
}
