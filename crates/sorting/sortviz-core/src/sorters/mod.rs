//! Step generators for the supported sorting algorithms.
//!
//! Generators are pure: they clone the input, walk their algorithm over the
//! clone, and return the full step sequence. Same input, same output, every
//! call.

mod bubble;
mod insertion;
mod selection;

use serde::{Deserialize, Serialize};

use crate::snapshot::ArraySnapshot;
use crate::step::SortStep;

/// The closed set of supported algorithms.
///
/// Adding an algorithm means a new variant plus a generator module; dispatch
/// stays exhaustive so a missed arm fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Selection,
}

impl SortAlgorithm {
    /// Every supported algorithm, in menu order.
    pub const ALL: [SortAlgorithm; 3] = [Self::Bubble, Self::Insertion, Self::Selection];

    /// Display name
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
        }
    }

    /// One-paragraph description for info panels.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Bubble => {
                "Bubble Sort repeatedly compares adjacent elements and swaps them \
                 if they are in the wrong order. Larger elements 'bubble up' to the \
                 end of the array with each pass."
            }
            Self::Insertion => {
                "Insertion Sort builds a sorted array one element at a time by \
                 inserting each element into its correct position in the sorted portion. \
                 Similar to how you sort playing cards in your hand."
            }
            Self::Selection => {
                "Selection Sort repeatedly finds the minimum element from the \
                 unsorted portion and places it at the beginning. \
                 Similar to repeatedly selecting the smallest card from a deck."
            }
        }
    }

    /// Asymptotic time complexity, for display.
    #[inline]
    pub fn time_complexity(&self) -> &'static str {
        match self {
            Self::Bubble => "O(n²)",
            Self::Insertion => "O(n²)",
            Self::Selection => "O(n²)",
        }
    }

    /// Asymptotic auxiliary-space complexity, for display.
    #[inline]
    pub fn space_complexity(&self) -> &'static str {
        match self {
            Self::Bubble => "O(1)",
            Self::Insertion => "O(1)",
            Self::Selection => "O(1)",
        }
    }

    /// Generate the full step sequence for `input`.
    ///
    /// The input is never mutated. An empty input yields an empty sequence;
    /// a single element yields exactly one Complete step. Every non-empty
    /// sequence ends with one Complete step holding the sorted contents.
    pub fn generate(&self, input: &ArraySnapshot) -> Vec<SortStep> {
        match self {
            Self::Bubble => bubble::generate(input),
            Self::Insertion => insertion::generate(input),
            Self::Selection => selection::generate(input),
        }
    }
}
