//! Bubble sort step generation.

use crate::snapshot::ArraySnapshot;
use crate::step::SortStep;

/// Record every adjacent compare, every swap, and a per-pass highlight of
/// the element that settled into its final slot. A pass with no swaps ends
/// generation before that pass's highlight.
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

    for pass in 0..n - 1 {
        let mut swapped = false;

        for i in 0..n - 1 - pass {
            let j = i + 1;

            steps.push(SortStep::compare(
                &working,
                vec![i, j],
                format!(
                    "Comparing elements at indices {i} and {j} (values: {} and {})",
                    working[i], working[j]
                ),
            ));

            if working[i] > working[j] {
                steps.push(SortStep::swap(
                    &working,
                    i,
                    j,
                    format!(
                        "Swapping elements at indices {i} and {j} ({} > {})",
                        working[i], working[j]
                    ),
                ));
                working.swap(i, j);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }

        let last_index = n - 1 - pass;
        steps.push(SortStep::highlight(
            &working,
            vec![last_index],
            format!(
                "Pass {} complete. Element at index {last_index} is in its final position.",
                pass + 1
            ),
        ));
    }

    steps.push(SortStep::complete(&working));

    steps
}
