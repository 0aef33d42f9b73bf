use crate::EnumerationError;

/// Every intermediate sequence visited while moving from an initial sequence toward a target
/// by swapping adjacent elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapSteps<T> {
    pub steps: Vec<Vec<T>>,
    pub reached: bool,
}

impl<T> SwapSteps<T> {
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Fixes positions left to right: each misplaced position pulls the nearest matching element
/// from its right with adjacent swaps. When `target` is a rearrangement of `initial` the number
/// of steps is the inversion count, which is the minimum.
pub fn min_adjacent_swaps<T: Clone + PartialEq>(
    initial: &[T],
    target: &[T],
) -> Result<SwapSteps<T>, EnumerationError> {
    if initial.len() != target.len() {
        return Err(EnumerationError::LengthMismatch {
            initial: initial.len(),
            target: target.len(),
        });
    }
    let mut current = initial.to_vec();
    let mut steps = Vec::new();
    for idx in 0..current.len() {
        if current[idx] == target[idx] {
            continue;
        }
        let Some(found) = (idx + 1..current.len()).find(|&j| current[j] == target[idx]) else {
            continue;
        };
        for pos in (idx + 1..=found).rev() {
            current.swap(pos, pos - 1);
            steps.push(current.clone());
        }
    }
    Ok(SwapSteps {
        reached: current == target,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;

    fn render(steps: &SwapSteps<i64>) -> String {
        let mut ret = String::new();
        for (k, step) in steps.steps.iter().enumerate() {
            ret.push_str(&format!("Step {}: {:?}\n", k + 1, step));
        }
        ret.push_str(&format!("reached: {}\n", steps.reached));
        ret
    }

    #[test]
    fn reverse_of_four() {
        let steps = min_adjacent_swaps(&[1i64, 2, 3, 4], &[4, 3, 2, 1]).unwrap();
        expect![[r#"
            Step 1: [1, 2, 4, 3]
            Step 2: [1, 4, 2, 3]
            Step 3: [4, 1, 2, 3]
            Step 4: [4, 1, 3, 2]
            Step 5: [4, 3, 1, 2]
            Step 6: [4, 3, 2, 1]
            reached: true
        "#]]
        .assert_eq(&render(&steps));
        assert_eq!(steps.len(), 6);
    }

    #[test]
    fn already_sorted() {
        let steps = min_adjacent_swaps(&[1i64, 2, 3], &[1, 2, 3]).unwrap();
        assert!(steps.is_empty());
        assert!(steps.reached);
    }

    #[test]
    fn step_count_is_inversion_count() {
        let initial = [3i64, 1, 4, 5, 9, 2, 6];
        let target = [9i64, 6, 5, 4, 3, 2, 1];
        let position_in_initial = |v: &i64| initial.iter().position(|it| it == v).unwrap();
        let mut inversions = 0;
        for i in 0..target.len() {
            for j in i + 1..target.len() {
                if position_in_initial(&target[i]) > position_in_initial(&target[j]) {
                    inversions += 1;
                }
            }
        }
        let steps = min_adjacent_swaps(&initial, &target).unwrap();
        assert!(steps.reached);
        assert_eq!(steps.len(), inversions);
    }

    #[test]
    fn unreachable_target() {
        let steps = min_adjacent_swaps(&[1i64, 2, 3], &[3, 2, 7]).unwrap();
        assert!(!steps.reached);
        assert_eq!(steps.steps.last(), Some(&vec![3, 2, 1]));
    }

    #[test]
    fn length_mismatch() {
        assert_eq!(
            min_adjacent_swaps(&[1i64, 2], &[1]),
            Err(EnumerationError::LengthMismatch {
                initial: 2,
                target: 1
            })
        );
    }
}
