use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Listens for `event` on the window and runs `callback` once events stop for `delay_ms`.
///
/// Returns `None` outside a browser window. Dropping the listener removes it
/// and cancels any pending run.
pub fn debounced_window_listener<F>(
    event: &'static str,
    delay_ms: u32,
    callback: F,
) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, event, move |_| {
        // Dropping a Timeout cancels it
        pending.borrow_mut().take();

        let cb = callback.clone();
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
