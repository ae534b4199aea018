//! Signal/slot notifications for select state changes.
//!
//! A [`Signal<Args>`] holds any number of connected slots (callbacks). When
//! the select's state changes it emits the signal and every slot is invoked
//! with the new value, directly on the emitting thread.
//!
//! # Example
//!
//! ```
//! use lattice_select::Signal;
//!
//! let changed = Signal::<String>::new();
//! let id = changed.connect(|value| println!("Selected: {}", value));
//! changed.emit("apple".to_string());
//! changed.disconnect(id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use lattice_select_core::logging::targets;
use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Identifies a connection between a signal and a slot.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
///
/// `Signal<Args>` is `Send + Sync`. Slots are cloned out of the connection
/// table before they run, so a slot may connect or disconnect on the same
/// signal without deadlocking.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Connect a slot that is disconnected when the returned guard drops.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            signal: self,
            id: self.connect(slot),
        }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    #[tracing::instrument(skip_all, target = "lattice_select::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(
            target: targets::SIGNAL,
            connection_count = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .finish()
    }
}

/// A connection guard that automatically disconnects when dropped.
///
/// Created via [`Signal::connect_scoped`].
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    /// The ID of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_emit_logs_under_signal_target() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(format!(
                "{}=trace",
                targets::SIGNAL
            )))
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let signal = Signal::<i32>::new();
            signal.connect(|_| {});
            signal.emit(1);
            signal.set_blocked(true);
            signal.emit(2);
        });

        let output = String::from_utf8(captured.0.lock().clone()).unwrap();
        assert!(output.contains(targets::SIGNAL));
        assert!(output.contains("emitting signal"));
        assert!(output.contains("signal blocked, skipping emit"));
    }

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1, 2]);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        let id = signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(signal.connection_count(), 1);

        signal.emit(());
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(());

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_signal_blocked() {
        let signal = Signal::<i32>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.set_blocked(true);
        assert!(signal.is_blocked());
        signal.emit(1);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        signal.set_blocked(false);
        signal.emit(1);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_connection_guard() {
        let signal = Signal::<i32>::new();
        {
            let _guard = signal.connect_scoped(|_| {});
            assert_eq!(signal.connection_count(), 1);
        }
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_slot_can_disconnect_all_during_emit() {
        let signal = Arc::new(Signal::<i32>::new());
        let signal_clone = signal.clone();
        signal.connect(move |_| signal_clone.disconnect_all());

        signal.emit(0);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_emit_from_multiple_threads() {
        let signal = Arc::new(Signal::<i32>::new());
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let signal_clone = signal.clone();
                std::thread::spawn(move || signal_clone.emit(i))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut values = received.lock().clone();
        values.sort();
        assert_eq!(values, vec![0, 1, 2, 3]);
    }
}
