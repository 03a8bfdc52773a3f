use crate::Result;
use crate::error::ScanError;
use std::ops::Range;

/// Split `len` items into `workers` contiguous ranges.
///
/// Each range gets `len / workers` items and the first `len % workers` ranges
/// get one more, so sizes differ by at most one and every index lands in
/// exactly one range, in order. With more workers than items the trailing
/// ranges are empty.
pub fn partition(len: usize, workers: usize) -> Result<Vec<Range<usize>>> {
    if workers == 0 {
        return Err(ScanError::InvalidThreadCount(workers));
    }

    let base = len / workers;
    let extra = len % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for i in 0..workers {
        let size = base + usize::from(i < extra);
        ranges.push(start..start + size);
        start += size;
    }
    Ok(ranges)
}

/// Borrow `items` as one contiguous slice per worker.
pub fn split<T>(items: &[T], workers: usize) -> Result<Vec<&[T]>> {
    Ok(partition(items.len(), workers)?
        .into_iter()
        .map(|r| &items[r])
        .collect())
}
