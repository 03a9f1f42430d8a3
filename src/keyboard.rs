//! Document-level keyboard events.
//!
//! The root component installs [`KEY_BRIDGE_SCRIPT`] once and feeds every key
//! name it reports into a [`KeyboardHub`] shared through context. Components
//! subscribe to the hub and hold the returned [`KeySubscription`] for as long
//! as they want events; dropping it deregisters the listener.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Forwards the key name of every `keydown` on the document to Rust.
pub const KEY_BRIDGE_SCRIPT: &str = r#"
    document.addEventListener('keydown', (event) => {
        dioxus.send(event.key);
    });
"#;

type Listener = Rc<dyn Fn(&str)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl Registry {
    fn get(&self, id: u64) -> Option<Listener> {
        self.listeners
            .iter()
            .find(|(listener_id, _)| *listener_id == id)
            .map(|(_, listener)| listener.clone())
    }
}

#[derive(Clone, Default)]
pub struct KeyboardHub {
    registry: Rc<RefCell<Registry>>,
}

impl PartialEq for KeyboardHub {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl KeyboardHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// The listener is live as soon as this returns.
    pub fn subscribe(&self, listener: impl Fn(&str) + 'static) -> KeySubscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));

        KeySubscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Calls every live listener with `key` and returns how many were called.
    ///
    /// The registry is not borrowed while a listener runs, so listeners may
    /// subscribe or drop subscriptions. A listener removed by an earlier one
    /// during the same dispatch is skipped.
    pub fn dispatch(&self, key: &str) -> usize {
        let ids: Vec<u64> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, _)| *id)
            .collect();

        let mut called = 0;
        for id in ids {
            let listener = self.registry.borrow().get(id);
            if let Some(listener) = listener {
                listener(key);
                called += 1;
            }
        }
        called
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Registration guard returned by [`KeyboardHub::subscribe`].
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct KeySubscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let removed = {
                let mut registry = registry.borrow_mut();
                let index = registry
                    .listeners
                    .iter()
                    .position(|(id, _)| *id == self.id);
                index.map(|index| registry.listeners.remove(index))
            };
            drop(removed);
            tracing::trace!(id = self.id, "key listener released");
        }
    }
}

/// At most one subscription, tied to the identity of the callback it serves.
pub struct ListenerSlot<K> {
    current: Option<(K, KeySubscription)>,
}

impl<K> Default for ListenerSlot<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: PartialEq> ListenerSlot<K> {
    /// Returns `true` when a new subscription was taken. The previous one, if
    /// any, is released before the new listener is registered.
    pub fn bind(
        &mut self,
        hub: &KeyboardHub,
        identity: K,
        listener: impl Fn(&str) + 'static,
    ) -> bool {
        if matches!(&self.current, Some((bound, _)) if *bound == identity) {
            return false;
        }
        self.release();
        self.current = Some((identity, hub.subscribe(listener)));
        true
    }

    pub fn release(&mut self) {
        self.current = None;
    }

    #[cfg(test)]
    pub fn is_bound(&self) -> bool {
        self.current.is_some()
    }
}

/// Provides a [`KeyboardHub`] to descendants and pumps document key events
/// into it for the lifetime of the calling component.
pub fn use_key_bridge() -> KeyboardHub {
    let hub = use_context_provider(KeyboardHub::new);

    use_effect({
        let hub = hub.clone();
        move || {
            let hub = hub.clone();
            spawn(async move {
                let mut bridge = dioxus::document::eval(KEY_BRIDGE_SCRIPT);
                loop {
                    match bridge.recv::<String>().await {
                        Ok(key) => {
                            let listeners = hub.listener_count();
                            let called = hub.dispatch(&key);
                            tracing::trace!(%key, listeners, called, "key event dispatched");
                        }
                        Err(e) => {
                            tracing::warn!("keyboard bridge closed: {}", e);
                            break;
                        }
                    }
                }
            });
        }
    });

    hub
}
