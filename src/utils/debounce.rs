use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::EventTarget;

/// Listens for `event` on `target` and runs `callback` once the events have
/// stopped for `delay_ms`.
///
/// Each new event cancels the pending timeout. Dropping the returned
/// listener also cancels any pending call.
///
/// ```rust,ignore
/// let window = web_sys::window().unwrap();
/// let listener = debounced_listener(&window, "resize", 150, move || redraw());
/// move || drop(listener)
/// ```
pub fn debounced_listener<F>(
    target: &EventTarget,
    event: &'static str,
    delay_ms: u32,
    callback: F,
) -> EventListener
where
    F: Fn() + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    EventListener::new(target, event, move |_| {
        let callback = callback.clone();
        // Replacing the handle drops, and thereby cancels, the previous timeout
        pending
            .borrow_mut()
            .replace(Timeout::new(delay_ms, move || callback()));
    })
}

/// Debounced `resize` listener on the window, if there is one.
pub fn on_window_resize<F>(delay_ms: u32, callback: F) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    web_sys::window().map(|window| debounced_listener(&window, "resize", delay_ms, callback))
}
