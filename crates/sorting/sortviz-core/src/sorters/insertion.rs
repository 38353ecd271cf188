//! Insertion sort step generation.

use crate::snapshot::ArraySnapshot;
use crate::step::{ElementRole, SortStep};

/// Record each key selection, the compares and one-slot shifts that open a
/// gap for it, the insertion itself, and the grown sorted prefix.
pub(super) fn generate(input: &ArraySnapshot) -> Vec<SortStep> {
    let mut steps = Vec::new();

    if input.len() <= 1 {
        if input.len() == 1 {
            steps.push(SortStep::complete(input));
        }
        return steps;
    }

    let mut working = input.clone();
    let n = working.len();

    for i in 1..n {
        let key = working[i];
        let mut j = i;

        steps.push(
            SortStep::highlight(
                &working,
                vec![i],
                format!("Selecting element at index {i} (value: {key}) to insert"),
            )
            .with_role(i, ElementRole::Key)
            .with_annotation("key", key.to_string()),
        );

        while j > 0 && working[j - 1] > key {
            steps.push(
                SortStep::compare(
                    &working,
                    vec![j - 1, j],
                    format!(
                        "Comparing element at index {} (value: {}) with key (value: {key})",
                        j - 1,
                        working[j - 1]
                    ),
                )
                .with_annotation("key", key.to_string()),
            );

            working[j] = working[j - 1];
            j -= 1;

            steps.push(
                SortStep::highlight(
                    &working,
                    vec![j, j + 1],
                    format!("Shifting element at index {j} to index {}", j + 1),
                )
                .with_annotation("key", key.to_string()),
            );
        }

        if j != i {
            working[j] = key;

            steps.push(SortStep::highlight(
                &working,
                vec![j],
                format!("Inserting key at index {j}"),
            ));
        }

        steps.push(
            SortStep::highlight(
                &working,
                (0..=i).collect(),
                format!("Elements up to index {i} are now sorted"),
            )
            .with_roles(0..=i, ElementRole::Sorted),
        );
    }

    steps.push(SortStep::complete(&working));

    steps
}
