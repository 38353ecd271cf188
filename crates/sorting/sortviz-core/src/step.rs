//! Step records emitted by the generators.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::snapshot::ArraySnapshot;

/// What a step represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// Two elements were compared
    Compare,
    /// Two elements were exchanged
    Swap,
    /// Elements were marked for attention without a structural change
    Highlight,
    /// The sort finished
    Complete,
}

impl StepKind {
    /// Get the name of this step kind
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::Highlight => "highlight",
            Self::Complete => "complete",
        }
    }
}

/// Per-element rendering hint attached to a step.
///
/// Roles are advisory: renderers may color by them, but no playback decision
/// depends on them. The vocabulary covers more algorithms than currently
/// ship, so renderers written against it keep working as variants appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ElementRole {
    #[default]
    None,
    /// Element currently being inserted
    Key,
    /// Current minimum candidate
    Minimum,
    /// Current maximum candidate
    Maximum,
    /// Partition pivot
    Pivot,
    /// Element settled in its final position
    Sorted,
    /// Element under the algorithm's cursor
    Active,
    /// Element participating in a comparison
    Compared,
    /// Element participating in an exchange
    Swapped,
}

impl ElementRole {
    /// Get the name of this role
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Key => "key",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::Pivot => "pivot",
            Self::Sorted => "sorted",
            Self::Active => "active",
            Self::Compared => "compared",
            Self::Swapped => "swapped",
        }
    }
}

/// One visualizable moment of a sort.
///
/// Steps are immutable once recorded. `array_state` is an independent
/// snapshot taken after the step's own mutation, so a Swap step already
/// shows the exchanged order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortStep {
    pub kind: StepKind,
    /// Indices this step is about, in emission order. Empty for Complete.
    pub indices: Vec<usize>,
    /// Advisory roles keyed by element index.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub roles: BTreeMap<usize, ElementRole>,
    /// Free-form labels for renderers, e.g. `"key" -> "7"`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    /// Human-readable description of what happened.
    pub message: String,
    /// Full array contents after this step.
    pub array_state: ArraySnapshot,
}

impl SortStep {
    /// Comparison of the elements at `indices`, against the current contents.
    pub fn compare(state: &ArraySnapshot, indices: Vec<usize>, message: impl Into<String>) -> Self {
        Self {
            kind: StepKind::Compare,
            indices,
            roles: BTreeMap::new(),
            annotations: BTreeMap::new(),
            message: message.into(),
            array_state: state.clone(),
        }
    }

    /// Exchange of the elements at `i` and `j`.
    ///
    /// `state` holds the pre-exchange contents; the recorded snapshot has
    /// the exchange applied.
    pub fn swap(state: &ArraySnapshot, i: usize, j: usize, message: impl Into<String>) -> Self {
        let mut after = state.clone();
        after.swap(i, j);
        Self {
            kind: StepKind::Swap,
            indices: vec![i, j],
            roles: BTreeMap::new(),
            annotations: BTreeMap::new(),
            message: message.into(),
            array_state: after,
        }
    }

    /// Attention on `indices` with no structural change.
    pub fn highlight(
        state: &ArraySnapshot,
        indices: Vec<usize>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: StepKind::Highlight,
            indices,
            roles: BTreeMap::new(),
            annotations: BTreeMap::new(),
            message: message.into(),
            array_state: state.clone(),
        }
    }

    /// Terminal step holding the final sorted contents.
    pub fn complete(state: &ArraySnapshot) -> Self {
        Self {
            kind: StepKind::Complete,
            indices: Vec::new(),
            roles: BTreeMap::new(),
            annotations: BTreeMap::new(),
            message: "Sorting completed".to_string(),
            array_state: state.clone(),
        }
    }

    /// Attach a role to one element.
    #[inline]
    pub fn with_role(mut self, index: usize, role: ElementRole) -> Self {
        self.roles.insert(index, role);
        self
    }

    /// Attach the same role to every element in `indices`.
    pub fn with_roles(
        mut self,
        indices: impl IntoIterator<Item = usize>,
        role: ElementRole,
    ) -> Self {
        for index in indices {
            self.roles.insert(index, role);
        }
        self
    }

    /// Attach an annotation.
    #[inline]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Role recorded for `index`; `ElementRole::None` when absent.
    #[inline]
    pub fn role_of(&self, index: usize) -> ElementRole {
        self.roles.get(&index).copied().unwrap_or_default()
    }

    /// Annotation value for `key`, when present.
    #[inline]
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    /// Whether this step involves the element at `index`.
    #[inline]
    pub fn touches(&self, index: usize) -> bool {
        self.indices.contains(&index) || self.roles.contains_key(&index)
    }
}
