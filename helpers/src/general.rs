use std::cmp::Ordering;

/// argmax returns the index of the maximum value in the array x. If the maximum occurs more than
/// once, the index of its first occurrence is returned. None is returned for an empty array.
pub fn argmax<T: PartialOrd>(x: &[T]) -> Option<usize> {
    let mut iter = x.iter().enumerate();
    let (first_idx, first_val) = iter.next()?;

    let (max_idx, _max_val) = iter.fold((first_idx, first_val), |(idx_max, val_max), (idx, val)| {
        if val > val_max {
            (idx, val)
        } else {
            (idx_max, val_max)
        }
    });
    Some(max_idx)
}

/// argsort returns the indices that sort the array x in ascending order. The sort is stable, i.e.
/// equal values keep their relative order. Incomparable values (NaN) are treated as equal.
pub fn argsort<T: PartialOrd>(x: &[T]) -> Vec<usize> {
    let mut idxs: Vec<usize> = (0..x.len()).collect();
    idxs.sort_by(|&a, &b| x[a].partial_cmp(&x[b]).unwrap_or(Ordering::Equal));
    idxs
}
