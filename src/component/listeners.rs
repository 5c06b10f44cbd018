use std::fmt;

use super::RenderedView;

type Listener = Box<dyn Fn(&RenderedView)>;

/// Synchronous change callbacks, run in registration order.
#[derive(Default)]
pub struct ChangeListeners {
    listeners: Vec<Listener>,
}

impl ChangeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, listener: F)
    where
        F: Fn(&RenderedView) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&self, view: &RenderedView) {
        for listener in &self.listeners {
            listener(view);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("len", &self.listeners.len())
            .finish()
    }
}
