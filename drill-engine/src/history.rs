//! The per-session window of recently issued exercise signatures.

use std::collections::VecDeque;

/// The default number of signatures a session remembers.
pub const DEFAULT_CAPACITY: usize = 12;

/// An ordered, bounded window of the canonical signatures most recently issued to one session.
///
/// The window is an explicit object owned by one [`Engine`](crate::Engine), never module-level
/// state, so independent sessions can never observe each other's history. The generator reads it
/// as an exclusion set; after an instance is accepted, its signature is recorded and the oldest
/// entry is evicted once the window exceeds capacity.
#[derive(Debug, Clone)]
pub struct SignatureHistory {
    capacity: usize,
    entries: VecDeque<String>,
}

impl SignatureHistory {
    /// Creates an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty history remembering up to `capacity` signatures.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Returns `true` if the signature is still inside the window.
    pub fn contains(&self, signature: &str) -> bool {
        self.entries.iter().any(|entry| entry == signature)
    }

    /// Records a newly issued signature, evicting the oldest entry if the window is full.
    pub fn record(&mut self, signature: String) {
        self.entries.push_back(signature);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Iterates over the remembered signatures, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the number of remembered signatures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no signatures are remembered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SignatureHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_finds_signatures() {
        let mut history = SignatureHistory::new();
        assert!(history.is_empty());

        history.record("(+ 1 2)".into());
        assert!(history.contains("(+ 1 2)"));
        assert!(!history.contains("(+ 1 3)"));
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut history = SignatureHistory::with_capacity(3);
        for n in 0..5 {
            history.record(format!("sig-{}", n));
        }

        assert_eq!(history.len(), 3);
        assert!(!history.contains("sig-0"));
        assert!(!history.contains("sig-1"));
        assert_eq!(history.iter().collect::<Vec<_>>(), ["sig-2", "sig-3", "sig-4"]);
    }
}
