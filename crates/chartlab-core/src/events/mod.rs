use std::sync::Arc;
use parking_lot::Mutex;
use ahash::AHashMap;

/// System-wide event bus
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<std::any::TypeId, Vec<Box<dyn EventHandler>>>>>,
}

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// Common gallery events
pub mod events {
    use super::Event;
    use crate::locale::Locale;

    /// The active locale was switched
    #[derive(Debug, Clone)]
    pub struct LocaleChanged {
        pub locale: Locale,
    }

    /// A dataset snapshot was regenerated
    #[derive(Debug, Clone)]
    pub struct DatasetRefreshed {
        pub dataset_id: String,
    }

    /// A demo view was opened
    #[derive(Debug, Clone)]
    pub struct DemoOpened {
        pub view_id: String,
        pub view_type: String,
    }

    /// A demo view was closed
    #[derive(Debug, Clone)]
    pub struct DemoClosed {
        pub view_id: String,
    }

    /// Theme settings changed
    #[derive(Debug, Clone)]
    pub struct ThemeChanged {
        pub dark_mode: bool,
    }

    // Implement Event trait for all event types
    macro_rules! impl_event {
        ($($t:ty),*) => {
            $(
                impl Event for $t {
                    fn as_any(&self) -> &dyn std::any::Any {
                        self
                    }
                }
            )*
        }
    }

    impl_event!(
        LocaleChanged,
        DatasetRefreshed,
        DemoOpened,
        DemoClosed,
        ThemeChanged
    );
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();
        handlers.entry(type_id).or_insert_with(Vec::new).push(handler);
    }

    /// Publish an event
    pub fn publish<E: Event>(&self, event: E) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();

        if let Some(event_handlers) = handlers.get_mut(&type_id) {
            for handler in event_handlers.iter_mut() {
                handler.handle(&event);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for creating event handlers from closures
pub struct ClosureEventHandler<F> {
    handler: F,
    _phantom: std::marker::PhantomData<()>,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(ClosureEventHandler {
        handler: f,
        _phantom: std::marker::PhantomData,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_publish_reaches_subscriber() {
        let bus = EventBus::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_clone = seen.clone();
        bus.subscribe::<events::DatasetRefreshed>(handler_from_fn(move |event| {
            if let Some(refreshed) = event.as_any().downcast_ref::<events::DatasetRefreshed>() {
                assert_eq!(refreshed.dataset_id, "candles");
                seen_clone.fetch_add(1, Ordering::SeqCst);
            }
        }));

        bus.publish(events::DatasetRefreshed {
            dataset_id: "candles".to_string(),
        });
        bus.publish(events::DatasetRefreshed {
            dataset_id: "candles".to_string(),
        });

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_publish_without_subscribers_is_noop() {
        let bus = EventBus::new();
        bus.publish(events::DemoClosed {
            view_id: "bar".to_string(),
        });
    }

    #[test]
    fn test_handlers_are_per_event_type() {
        let bus = EventBus::new();
        let locale_hits = Arc::new(AtomicUsize::new(0));

        let hits = locale_hits.clone();
        bus.subscribe::<events::LocaleChanged>(handler_from_fn(move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        }));

        bus.publish(events::ThemeChanged { dark_mode: false });
        assert_eq!(locale_hits.load(Ordering::SeqCst), 0);

        bus.publish(events::LocaleChanged {
            locale: crate::locale::Locale::Ja,
        });
        assert_eq!(locale_hits.load(Ordering::SeqCst), 1);
    }
}
