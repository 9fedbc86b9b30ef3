//! Change propagation to the owning screen.

use std::fmt;

use sid_model::LineItem;

/// Field name reported with every change notification.
pub const ITEMS_FIELD: &str = "items";

type Sink = Box<dyn FnMut(&str, &[LineItem]) + Send>;

/// Single-callback notifier for the owning screen.
///
/// Each successful store mutation produces exactly one call carrying
/// the [`ITEMS_FIELD`] key and the full row sequence. No batching, no
/// debouncing; no-ops and failed mutations emit nothing.
#[derive(Default)]
pub struct ChangeNotifier {
    sink: Option<Sink>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the parent callback, replacing any previous one.
    pub fn register<F>(&mut self, sink: F)
    where
        F: FnMut(&str, &[LineItem]) + Send + 'static,
    {
        self.sink = Some(Box::new(sink));
    }

    pub fn is_registered(&self) -> bool {
        self.sink.is_some()
    }

    /// Emit the full sequence to the registered callback, if any.
    pub fn emit(&mut self, items: &[LineItem]) {
        if let Some(sink) = self.sink.as_mut() {
            sink(ITEMS_FIELD, items);
        }
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("registered", &self.is_registered())
            .finish()
    }
}
