//! Run-based algorithms over [`GrowableArray`]
//!
//! - [`chunk`]: split a sequence into its maximal non-descending runs
//! - [`find_mode`]: the most frequent value(s) of a sorted sequence
//!
//! Both only read the input through indexed access and comparisons.

use crate::dynamic_array::GrowableArray;

/// Splits `array` into maximal contiguous non-descending runs
///
/// A new run starts after every strict descent `array[i] > array[i + 1]`, so
/// concatenating the runs gives back the input. An empty input yields an
/// empty outer array (no runs), not one empty run.
///
/// ```rust
/// use rust_growable_heaps::dynamic_array::GrowableArray;
/// use rust_growable_heaps::runs::chunk;
///
/// let array: GrowableArray<i32> = vec![10, 20, 30, 30, 5, 10, 1, 2, 3, 4].into();
/// let runs = chunk(&array);
/// assert_eq!(runs.len(), 3);
/// assert_eq!(runs.get(1).map(|run| run.to_string()), Ok("DYN_ARR Size/Cap: 2/4 [5, 10]".into()));
/// ```
pub fn chunk<T: PartialOrd + Clone>(array: &GrowableArray<T>) -> GrowableArray<GrowableArray<T>> {
    let mut runs = array.empty_like();
    if array.is_empty() {
        return runs;
    }

    let descents = array
        .iter()
        .zip(array.iter().skip(1))
        .filter(|(current, next)| current > next)
        .count();
    for _ in 0..=descents {
        runs.append(array.empty_like());
    }

    let mut targets = runs.iter_mut();
    let mut run = targets.next();
    for (index, value) in array.iter().enumerate() {
        if let Some(run) = run.as_mut() {
            run.append(value.clone());
        }
        if array.get(index + 1).map_or(false, |next| value > next) {
            run = targets.next();
        }
    }
    runs
}

/// Returns every value tied for the highest frequency, and that frequency
///
/// `array` must already be sorted in non-descending order. Unsorted input is
/// not detected or corrected: equal values that are not adjacent are counted
/// as separate runs. Modes are returned in the order their runs appear. An
/// empty input yields `(empty, 0)`.
///
/// ```rust
/// use rust_growable_heaps::dynamic_array::GrowableArray;
/// use rust_growable_heaps::runs::find_mode;
///
/// let array: GrowableArray<i32> = vec![1, 1, 2, 3, 3, 4].into();
/// let (modes, frequency) = find_mode(&array);
/// assert_eq!(modes.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
/// assert_eq!(frequency, 2);
/// ```
pub fn find_mode<T: PartialEq + Clone>(array: &GrowableArray<T>) -> (GrowableArray<T>, usize) {
    let mut modes = array.empty_like();
    let mut values = array.iter();
    let Some(first) = values.next() else {
        return (modes, 0);
    };

    modes.append(first.clone());
    let mut previous = first;
    let mut current = 1;
    let mut best = 1;

    for value in values {
        if value == previous {
            current += 1;
            if current == best {
                modes.append(value.clone());
            } else if current > best {
                modes = array.empty_like();
                modes.append(value.clone());
                best = current;
            }
        } else {
            current = 1;
            // Every run so far is a singleton, so this one ties
            if best == 1 {
                modes.append(value.clone());
            }
        }
        previous = value;
    }

    (modes, best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs_of(values: Vec<i32>) -> Vec<Vec<i32>> {
        let array: GrowableArray<i32> = values.into();
        chunk(&array)
            .iter()
            .map(|run| run.iter().copied().collect())
            .collect()
    }

    fn mode_of<T: PartialEq + Clone>(values: Vec<T>) -> (Vec<T>, usize) {
        let array: GrowableArray<T> = values.into();
        let (modes, frequency) = find_mode(&array);
        (modes.into_iter().collect(), frequency)
    }

    #[test]
    fn test_chunk_runs() {
        assert_eq!(
            runs_of(vec![10, 20, 30, 30, 5, 10, 1, 2, 3, 4]),
            vec![vec![10, 20, 30, 30], vec![5, 10], vec![1, 2, 3, 4]]
        );
        assert_eq!(runs_of(vec![7]), vec![vec![7]]);
        assert_eq!(runs_of(vec![3, 2, 1]), vec![vec![3], vec![2], vec![1]]);
        assert_eq!(runs_of(vec![1, 1, 1]), vec![vec![1, 1, 1]]);
    }

    #[test]
    fn test_chunk_empty_has_no_runs() {
        let empty: GrowableArray<i32> = GrowableArray::new();
        let runs = chunk(&empty);
        assert!(runs.is_empty());
    }

    #[test]
    fn test_chunk_floats_and_strings() {
        let floats: GrowableArray<f64> = vec![1.5, 2.5, 0.5].into();
        assert_eq!(chunk(&floats).len(), 2);

        let words: GrowableArray<&str> = vec!["apple", "pear", "fig", "kiwi"].into();
        let runs = chunk(&words);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs.get(1).map(|run| run.len()), Ok(2));
    }

    #[test]
    fn test_find_mode() {
        assert_eq!(mode_of(vec![1, 1, 2, 3, 3, 4]), (vec![1, 3], 2));
        assert_eq!(mode_of(vec![1, 20, 30, 40, 500, 500, 500]), (vec![500], 3));
        assert_eq!(mode_of(vec![2, 2, 2, 2, 1, 1, 1, 1]), (vec![2, 1], 4));
        assert_eq!(mode_of(vec![1, 2, 3]), (vec![1, 2, 3], 1));
        assert_eq!(mode_of(vec![9]), (vec![9], 1));
        assert_eq!(
            mode_of(vec!["Apple", "Banana", "Banana", "Carrot", "Carrot", "Date"]),
            (vec!["Banana", "Carrot"], 2)
        );
    }

    #[test]
    fn test_find_mode_empty() {
        assert_eq!(mode_of(Vec::<i32>::new()), (vec![], 0));
    }

    #[test]
    fn test_find_mode_unsorted_counts_adjacent_runs_only() {
        assert_eq!(mode_of(vec![1, 2, 1]), (vec![1, 2, 1], 1));
    }
}
