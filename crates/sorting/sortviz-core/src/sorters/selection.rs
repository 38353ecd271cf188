//! Selection sort step generation.

use crate::snapshot::ArraySnapshot;
use crate::step::{ElementRole, SortStep};

/// Record each pass over the unsorted suffix: the scan for its minimum, the
/// swap that moves the minimum to the front of the suffix (or a note that it
/// already sits there), and the grown sorted prefix.
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

    for i in 0..n - 1 {
        let mut min_index = i;

        steps.push(
            SortStep::highlight(
                &working,
                vec![i],
                format!(
                    "Starting pass {}, searching for minimum from index {i}",
                    i + 1
                ),
            )
            .with_role(i, ElementRole::Minimum)
            .with_annotation("minimum", working[min_index].to_string()),
        );

        for j in i + 1..n {
            steps.push(
                SortStep::compare(
                    &working,
                    vec![j, min_index],
                    format!(
                        "Comparing element at index {j} (value: {}) with minimum at index {min_index} (value: {})",
                        working[j], working[min_index]
                    ),
                )
                .with_role(min_index, ElementRole::Minimum)
                .with_annotation("minimum", working[min_index].to_string()),
            );

            if working[j] < working[min_index] {
                min_index = j;

                steps.push(
                    SortStep::highlight(
                        &working,
                        vec![min_index],
                        format!(
                            "New minimum found at index {min_index} (value: {})",
                            working[min_index]
                        ),
                    )
                    .with_role(min_index, ElementRole::Minimum)
                    .with_annotation("minimum", working[min_index].to_string()),
                );
            }
        }

        if min_index != i {
            steps.push(
                SortStep::swap(
                    &working,
                    i,
                    min_index,
                    format!(
                        "Swapping minimum at index {min_index} (value: {}) with element at index {i} (value: {})",
                        working[min_index], working[i]
                    ),
                )
                .with_role(min_index, ElementRole::Minimum)
                .with_annotation("minimum", working[min_index].to_string()),
            );
            working.swap(i, min_index);
        } else {
            steps.push(
                SortStep::highlight(
                    &working,
                    vec![i],
                    format!("Element at index {i} is already in correct position"),
                )
                .with_role(i, ElementRole::Minimum)
                .with_annotation("minimum", working[i].to_string()),
            );
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
