// SPDX-License-Identifier: MPL-2.0
//! One-shot "has been seen" flag for page sections.

/// Monotonic boolean: once marked it never goes back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    revealed: bool,
}

impl VisibilityLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the latch. Returns `true` only for the call that flipped it.
    pub fn mark(&mut self) -> bool {
        let first = !self.revealed;
        self.revealed = true;
        first
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!VisibilityLatch::new().is_revealed());
    }

    #[test]
    fn mark_reports_only_first_transition() {
        let mut latch = VisibilityLatch::new();
        assert!(latch.mark());
        assert!(!latch.mark());
        assert!(latch.is_revealed());
    }
}
