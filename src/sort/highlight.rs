//! Per-step highlight annotations consumed by renderers.

use rustc_hash::FxHashMap;

/// Visual role of a highlighted index. Carries no algorithmic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightRole {
    /// The slot just written, or the element currently in focus.
    Primary,
    /// The slot being compared against or read from.
    Secondary,
    /// A pivot, run boundary or heap child under inspection.
    Anchor,
}

/// Mapping from array index to highlight role for one step.
///
/// Setting an index twice keeps the later role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    roles: FxHashMap<usize, HighlightRole>,
}

impl Highlights {
    /// Empty highlight set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, index: usize, role: HighlightRole) -> Self {
        self.set(index, role);
        self
    }

    /// Assign `role` to `index`, replacing any earlier role.
    pub fn set(&mut self, index: usize, role: HighlightRole) {
        let _ = self.roles.insert(index, role);
    }

    /// Role assigned to `index`, if any.
    #[must_use]
    pub fn role(&self, index: usize) -> Option<HighlightRole> {
        self.roles.get(&index).copied()
    }

    /// Number of highlighted indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether nothing is highlighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Iterate `(index, role)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, HighlightRole)> + '_ {
        self.roles.iter().map(|(&index, &role)| (index, role))
    }

    /// Sorted indices holding `role`.
    #[must_use]
    pub fn indices_with(&self, role: HighlightRole) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .roles
            .iter()
            .filter(|(_, &r)| r == role)
            .map(|(&index, _)| index)
            .collect();
        indices.sort_unstable();
        indices
    }
}
