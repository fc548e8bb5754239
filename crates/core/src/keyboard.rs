//! Keyboard control for gallery slideshows.
//!
//! [`KeyboardHub`] is the single source of key presses, backed by a
//! `tokio::sync::broadcast` channel. Listening is an owned resource: a
//! [`KeySubscription`] receives keys for as long as it is alive and stops
//! the moment it is dropped, whichever way the owner exits.
//!
//! [`GallerySession`] ties a [`GalleryController`] to the hub and holds a
//! subscription exactly while the slideshow is open.

use std::str::FromStr;

use serde::Serialize;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

use crate::gallery::{GalleryCommand, GalleryController, GalleryPolicy, GalleryState, Navigator};

// ---------------------------------------------------------------------------
// Keys and bindings
// ---------------------------------------------------------------------------

/// A key press, named after DOM `KeyboardEvent.key` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other(String),
}

impl Key {
    /// The DOM `key` name.
    pub fn as_str(&self) -> &str {
        match self {
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Escape => "Escape",
            Key::Other(name) => name,
        }
    }
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        })
    }
}

/// A single key-to-command entry, serializable for page templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub key: &'static str,
    pub command: &'static str,
}

/// Maps keys to gallery commands for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bind_escape: bool,
}

impl KeyBindings {
    /// Left retreats, right advances, and Escape closes when the policy
    /// allows closing.
    pub fn for_policy(policy: &GalleryPolicy) -> Self {
        Self {
            bind_escape: policy.bind_escape,
        }
    }

    /// Command bound to `key` while the gallery is in `state`.
    ///
    /// Nothing is bound while the gallery is closed.
    pub fn command_for(&self, key: &Key, state: GalleryState) -> Option<GalleryCommand> {
        if !state.is_open() {
            return None;
        }
        match key {
            Key::ArrowLeft => Some(GalleryCommand::Retreat),
            Key::ArrowRight => Some(GalleryCommand::Advance),
            Key::Escape if self.bind_escape => Some(GalleryCommand::Close),
            _ => None,
        }
    }

    /// Every active binding, in display order.
    pub fn bindings(&self) -> Vec<Binding> {
        let mut bindings = vec![
            Binding {
                key: "ArrowLeft",
                command: "retreat",
            },
            Binding {
                key: "ArrowRight",
                command: "advance",
            },
        ];
        if self.bind_escape {
            bindings.push(Binding {
                key: "Escape",
                command: "close",
            });
        }
        bindings
    }
}

// ---------------------------------------------------------------------------
// KeyboardHub
// ---------------------------------------------------------------------------

/// Default buffer capacity for the key channel.
const DEFAULT_CAPACITY: usize = 64;

/// Fan-out source of key presses.
pub struct KeyboardHub {
    sender: broadcast::Sender<Key>,
}

impl KeyboardHub {
    /// Create a hub with a specific channel capacity.
    ///
    /// When the buffer is full the oldest unread keys are dropped.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Deliver a key press to every live subscription.
    pub fn press(&self, key: Key) {
        // A send error only means nobody is listening.
        let _ = self.sender.send(key);
    }

    /// Start listening. Dropping the returned subscription stops it.
    pub fn subscribe(&self) -> KeySubscription {
        KeySubscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for KeyboardHub {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// A live key listener.
pub struct KeySubscription {
    receiver: broadcast::Receiver<Key>,
}

impl KeySubscription {
    /// Next pending key, if any, without waiting.
    ///
    /// Keys lost to a full buffer are skipped.
    pub fn try_next(&mut self) -> Option<Key> {
        loop {
            match self.receiver.try_recv() {
                Ok(key) => return Some(key),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    /// Wait for the next key. `None` once the hub is gone.
    pub async fn next(&mut self) -> Option<Key> {
        loop {
            match self.receiver.recv().await {
                Ok(key) => return Some(key),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// GallerySession
// ---------------------------------------------------------------------------

/// A gallery controller wired to keyboard input.
pub struct GallerySession<'hub, N> {
    hub: &'hub KeyboardHub,
    controller: GalleryController<N>,
    bindings: KeyBindings,
    subscription: Option<KeySubscription>,
}

impl<'hub, N: Navigator> GallerySession<'hub, N> {
    pub fn new(hub: &'hub KeyboardHub, controller: GalleryController<N>) -> Self {
        let bindings = KeyBindings::for_policy(controller.gallery().policy());
        let mut session = Self {
            hub,
            controller,
            bindings,
            subscription: None,
        };
        session.sync_listener();
        session
    }

    pub fn controller(&self) -> &GalleryController<N> {
        &self.controller
    }

    /// Mutate the controller (pointer input), then re-sync the listener.
    pub fn with_controller<R>(&mut self, f: impl FnOnce(&mut GalleryController<N>) -> R) -> R {
        let result = f(&mut self.controller);
        self.sync_listener();
        result
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    /// Hold one subscription while open, none while closed.
    fn sync_listener(&mut self) {
        match (self.controller.is_open(), self.subscription.is_some()) {
            (true, false) => self.subscription = Some(self.hub.subscribe()),
            (false, true) => self.subscription = None,
            _ => {}
        }
    }

    /// Apply every pending key press. Returns the number of commands run.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(key) = self.subscription.as_mut().and_then(KeySubscription::try_next) {
            if let Some(command) = self.bindings.command_for(&key, self.controller.state()) {
                self.controller.apply(command);
                applied += 1;
            }
            self.sync_listener();
        }
        applied
    }
}
