use gloo_timers::callback::Timeout;
use std::cell::RefCell;

/// Delays a callback until input has been quiet for a while.
///
/// Each call to [`Debouncer::call`] cancels the pending timeout and schedules a
/// new one, so only the last value of a burst of keystrokes is delivered.
/// Dropping the debouncer cancels anything still pending.
///
/// # Example
///
/// ```rust,ignore
/// let debouncer = use_mut_ref(|| Debouncer::new(500));
/// let oninput = Callback::from(move |e: InputEvent| {
///     let value = e.target_unchecked_into::<HtmlInputElement>().value();
///     let on_change = on_change.clone();
///     debouncer.borrow().call(move || on_change.emit(value));
/// });
/// ```
pub struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn call<F>(&self, callback: F)
    where
        F: FnOnce() + 'static,
    {
        // Cancel pending timeout
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.cancel();
        }

        let handle = Timeout::new(self.delay_ms, callback);
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
