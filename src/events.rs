use std::fmt;

type Handler<T> = Box<dyn FnMut(&T) + Send>;

/// Synchronous observer list.
///
/// `notify` calls every handler in registration order before returning, so a
/// downstream cascade completes inside the triggering call.
pub struct Event<T> {
    handlers: Vec<Handler<T>>,
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }
}

impl<T> Event<T> {
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    pub fn notify(&mut self, payload: &T) {
        for handler in self.handlers.iter_mut() {
            handler(payload);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.len()
    }
}

impl<T> fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("subscribers", &self.handlers.len())
            .finish()
    }
}
