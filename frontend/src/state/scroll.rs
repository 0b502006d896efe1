use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::config::HEADER_BLUR_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderState {
    Transparent,
    Blurred,
}

impl HeaderState {
    pub fn from_offset(offset: f64) -> Self {
        if offset > HEADER_BLUR_THRESHOLD {
            HeaderState::Blurred
        } else {
            HeaderState::Transparent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            HeaderState::Transparent => "site-header transparent",
            HeaderState::Blurred => "site-header blurred",
        }
    }
}

/// Something that emits vertical scroll offsets to registered listeners.
pub trait ScrollSource {
    type Handle;

    fn offset(&self) -> f64;
    fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Option<Self::Handle>;
    fn unsubscribe(&self, handle: Self::Handle);
}

/// Keeps a scroll listener registered for as long as it is alive.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    pub fn new(source: S, on_scroll: Box<dyn FnMut(f64)>) -> Option<Self> {
        let handle = source.subscribe(on_scroll)?;
        Some(Self { source, handle: Some(handle) })
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unsubscribe(handle);
        }
    }
}

pub struct WindowScroll {
    window: Window,
}

impl WindowScroll {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl ScrollSource for WindowScroll {
    type Handle = Closure<dyn FnMut()>;

    fn offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn subscribe(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> Option<Self::Handle> {
        let window = self.window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Ok(scroll_y) = window.scroll_y() {
                on_scroll(scroll_y);
            }
        });

        match self.window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
            Ok(()) => {
                debug!("Scroll listener registered");
                Some(callback)
            }
            Err(e) => {
                error!("Failed to register scroll listener: {:?}", e);
                None
            }
        }
    }

    fn unsubscribe(&self, handle: Self::Handle) {
        if let Err(e) = self.window.remove_event_listener_with_callback("scroll", handle.as_ref().unchecked_ref()) {
            error!("Failed to remove scroll listener: {:?}", e);
        } else {
            debug!("Scroll listener removed");
        }
    }
}

/// Current vertical scroll offset of the window, refreshed on every scroll event.
#[hook]
pub fn use_scroll_offset() -> f64 {
    let offset = use_state(|| 0.0_f64);

    {
        let offset = offset.clone();
        use_effect_with_deps(move |_| {
            let subscription = web_sys::window().map(WindowScroll::new).and_then(|source| {
                offset.set(source.offset());
                let setter = offset.setter();
                ScrollSubscription::new(source, Box::new(move |scroll_y| setter.set(scroll_y)))
            });

            move || drop(subscription)
        }, ());
    }

    *offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeScroll {
        listeners: Rc<RefCell<Vec<(usize, Box<dyn FnMut(f64)>)>>>,
        next_id: Rc<Cell<usize>>,
    }

    impl FakeScroll {
        fn emit(&self, offset: f64) {
            for (_, listener) in self.listeners.borrow_mut().iter_mut() {
                listener(offset);
            }
        }

        fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl ScrollSource for FakeScroll {
        type Handle = usize;

        fn offset(&self) -> f64 {
            0.0
        }

        fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Option<usize> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, on_scroll));
            Some(id)
        }

        fn unsubscribe(&self, handle: usize) {
            self.listeners.borrow_mut().retain(|(id, _)| *id != handle);
        }
    }

    #[test]
    fn threshold_is_exclusive_at_fifty() {
        for offset in [-12.0, 0.0, 1.0, 49.9, 50.0] {
            assert_eq!(HeaderState::from_offset(offset), HeaderState::Transparent, "offset {offset}");
        }
        for offset in [50.01, 51.0, 600.0, 10_000.0] {
            assert_eq!(HeaderState::from_offset(offset), HeaderState::Blurred, "offset {offset}");
        }
    }

    #[test]
    fn header_state_ignores_scroll_direction() {
        let down: Vec<_> = [0.0, 40.0, 80.0, 120.0].into_iter().map(HeaderState::from_offset).collect();
        let up: Vec<_> = [120.0, 80.0, 40.0, 0.0].into_iter().map(HeaderState::from_offset).collect();
        let mut reversed = up.clone();
        reversed.reverse();
        assert_eq!(down, reversed);
    }

    #[test]
    fn subscription_forwards_offsets_while_alive() {
        let source = FakeScroll::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let subscription = ScrollSubscription::new(source.clone(), Box::new(move |y| sink.borrow_mut().push(y)));
        assert!(subscription.is_some());

        source.emit(10.0);
        source.emit(75.0);
        assert_eq!(*seen.borrow(), vec![10.0, 75.0]);
    }

    #[test]
    fn dropping_subscription_removes_listener() {
        let source = FakeScroll::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let subscription = ScrollSubscription::new(source.clone(), Box::new(move |y| sink.borrow_mut().push(y)));
        assert_eq!(source.listener_count(), 1);

        drop(subscription);
        assert_eq!(source.listener_count(), 0);

        source.emit(200.0);
        assert!(seen.borrow().is_empty());
    }
}
