//! Signal/slot system.
//!
//! A type-safe signal mechanism for widget notifications. Widgets own
//! signals and emit them when their state changes; connected slots
//! (closures) are invoked in response.
//!
//! The widget layer is UI-thread-confined, so slots are always invoked
//! directly on the emitting thread. Signals are still `Send + Sync` so
//! widgets that own them can be moved between threads before use.
//!
//! # Example
//!
//! ```
//! use tidebar_core::Signal;
//!
//! let value_changed = Signal::<usize>::new();
//!
//! let conn_id = value_changed.connect(|&index| {
//!     println!("selected segment: {index}");
//! });
//!
//! value_changed.emit(2);
//! value_changed.disconnect(conn_id).unwrap();
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::SignalError;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection
    /// is explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked with a
/// reference to the provided arguments, in connection order.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments, or a tuple for multiple arguments.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

struct Connection<Args> {
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a [`ConnectionId`] that can be used to disconnect the
    /// slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Disconnecting an already removed connection returns
    /// [`SignalError::InvalidConnection`]; it never double-removes.
    pub fn disconnect(&self, id: ConnectionId) -> Result<(), SignalError> {
        self.connections
            .lock()
            .remove(id)
            .map(|_| ())
            .ok_or(SignalError::InvalidConnection)
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block or unblock signal emission.
    ///
    /// While blocked, calls to `emit()` do nothing. Useful during batch
    /// updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// The connection table lock is released before slots run, so a
    /// slot may connect or disconnect on this same signal.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "tidebar_core::signal", "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<_> = {
            let connections = self.connections.lock();
            connections.values().map(|c| c.slot.clone()).collect()
        };
        tracing::trace!(
            target: "tidebar_core::signal",
            connection_count = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(&args);
        }
    }
}

/// RAII guard that disconnects a connection when dropped.
///
/// Useful for scoping an observation to the lifetime of the observer.
#[must_use = "the connection is dropped immediately if the guard is not held"]
pub struct ConnectionGuard<'a, Args> {
    signal: &'a Signal<Args>,
    id: Option<ConnectionId>,
}

impl<'a, Args> ConnectionGuard<'a, Args> {
    /// Tie an existing connection's lifetime to this guard.
    pub fn new(signal: &'a Signal<Args>, id: ConnectionId) -> Self {
        Self {
            signal,
            id: Some(id),
        }
    }

    /// Release the connection from the guard, leaving it connected.
    pub fn release(mut self) -> ConnectionId {
        self.id.take().expect("guard already released")
    }
}

impl<Args> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            let _ = self.signal.disconnect(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn connect_emit_disconnect() {
        let signal = Signal::<i32>::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_clone = hits.clone();
        let id = signal.connect(move |&v| {
            assert_eq!(v, 7);
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(7);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        signal.disconnect(id).unwrap();
        signal.emit(7);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn stale_disconnect_is_an_error_not_a_crash() {
        let signal = Signal::<()>::new();
        let id = signal.connect(|_| {});
        assert_eq!(signal.disconnect(id), Ok(()));
        assert_eq!(signal.disconnect(id), Err(SignalError::InvalidConnection));
    }

    #[test]
    fn blocked_signal_skips_slots() {
        let signal = Signal::<()>::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let hits_clone = hits.clone();
        signal.connect(move |_| {
            hits_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.set_blocked(true);
        signal.emit(());
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        signal.set_blocked(false);
        signal.emit(());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn slot_can_reconnect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());

        let signal_clone = signal.clone();
        signal.connect(move |_| {
            // Must not deadlock against the emitting lock.
            signal_clone.connect(|_| {});
        });

        signal.emit(());
        assert_eq!(signal.connection_count(), 2);
    }

    #[test]
    fn guard_disconnects_on_drop() {
        let signal = Signal::<()>::new();
        let id = signal.connect(|_| {});
        assert_eq!(signal.connection_count(), 1);

        {
            let _guard = ConnectionGuard::new(&signal, id);
        }
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn released_guard_keeps_connection() {
        let signal = Signal::<()>::new();
        let id = signal.connect(|_| {});

        let guard = ConnectionGuard::new(&signal, id);
        let id = guard.release();
        assert_eq!(signal.connection_count(), 1);
        signal.disconnect(id).unwrap();
    }
}
