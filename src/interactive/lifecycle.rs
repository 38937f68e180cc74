//! Process exit handlers
//!
//! Cleanup callbacks registered during setup run exactly once: on a normal
//! exit, an error exit, or from the panic hook.

use std::panic;
use std::sync::{Arc, Mutex, MutexGuard};

type Handler = Box<dyn FnOnce() + Send>;

#[derive(Clone)]
pub struct ExitHandlers {
    /// `None` once the handlers have run
    handlers: Arc<Mutex<Option<Vec<Handler>>>>,
}

impl ExitHandlers {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(Some(Vec::new()))),
        }
    }

    /// Add a callback; ignored once the handlers have run
    pub fn register<F>(&self, handler: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handlers) = self.lock().as_mut() {
            handlers.push(Box::new(handler));
        }
    }

    /// Run every callback in registration order; later calls do nothing
    pub fn run(&self) {
        let handlers = self.lock().take();
        for handler in handlers.into_iter().flatten() {
            handler();
        }
    }

    /// Run the handlers before the default panic output
    pub fn install_panic_hook(&self) {
        let handlers = self.clone();
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            handlers.run();
            previous(info);
        }));
    }

    #[must_use]
    pub fn has_run(&self) -> bool {
        self.lock().is_none()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Vec<Handler>>> {
        self.handlers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for ExitHandlers {
    fn default() -> Self {
        Self::new()
    }
}
