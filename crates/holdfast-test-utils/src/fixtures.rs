//! Drop-tracking fixtures.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared destructor counter.
///
/// Hand out [`DropProbe`]s with [`probe`](DropLedger::probe), then assert on
/// [`drops`](DropLedger::drops) to check how many of them have been
/// destroyed. Cloning a ledger shares the underlying counter.
#[derive(Clone)]
pub struct DropLedger {
    drops: Arc<AtomicUsize>,
}

impl DropLedger {
    /// Create a ledger with zero recorded drops.
    pub fn new() -> Self {
        Self {
            drops: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a probe that reports its destruction to this ledger.
    ///
    /// `tag` identifies the probe so tests can tell which value survived a
    /// transfer of ownership.
    pub fn probe(&self, tag: u32) -> DropProbe {
        DropProbe {
            drops: Arc::clone(&self.drops),
            tag,
        }
    }

    /// Number of probes destroyed so far.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::Relaxed)
    }
}

impl Default for DropLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// A value that increments its [`DropLedger`] exactly once when destroyed.
pub struct DropProbe {
    drops: Arc<AtomicUsize>,
    tag: u32,
}

impl DropProbe {
    /// The identifying tag this probe was created with.
    pub fn tag(&self) -> u32 {
        self.tag
    }
}

impl Drop for DropProbe {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_are_counted() {
        let ledger = DropLedger::new();
        let a = ledger.probe(0);
        let b = ledger.probe(1);
        assert_eq!(ledger.drops(), 0);
        drop(a);
        assert_eq!(ledger.drops(), 1);
        drop(b);
        assert_eq!(ledger.drops(), 2);
    }

    #[test]
    fn probes_carry_their_tag() {
        let ledger = DropLedger::new();
        assert_eq!(ledger.probe(7).tag(), 7);
    }

    #[test]
    fn cloned_ledgers_share_the_counter() {
        let ledger = DropLedger::new();
        let view = ledger.clone();
        drop(ledger.probe(0));
        assert_eq!(view.drops(), 1);
    }
}
