use crate::algebra::{triangular_number, ConfigurationError, IndexError};

// Unique values of an n x n symmetric array are stored as the
// packed upper triangle, one segment per row.  Segment i holds
// the n - i entries (i,i), (i,i+1), ..., (i,n-1), and segments
// are laid out back to back in a single buffer.

/// Offset of segment `i` within the packed buffer of an `n x n` array
#[inline]
pub(crate) fn segment_start(n: usize, i: usize) -> usize {
    // n + (n-1) + ... + (n-i+1)
    i * n + i - triangular_number(i)
}

/// Map a coordinate pair to its (segment, offset) location.
/// Both orderings of the pair map to the same location.
#[inline]
pub(crate) fn segment_offset(a: usize, b: usize) -> (usize, usize) {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    (lo, hi - lo)
}

/// Packed buffer position of the pair (a,b) in an `n x n` array
#[inline]
pub(crate) fn triu_slot(n: usize, a: usize, b: usize) -> usize {
    let (segment, offset) = segment_offset(a, b);
    segment_start(n, segment) + offset
}

/// Packed buffer length of an `n x n` array holding a run of `run`
/// values per unique pair.
///
/// Fails if the element count, or its size in bytes, cannot be
/// allocated.  Every offset below the returned length is then free of
/// overflow in [`segment_start`] and [`triu_slot`].
pub(crate) fn packed_len<T>(n: usize, run: usize) -> Result<usize, ConfigurationError> {
    // n(n+1)/2 without forming n(n+1) when only the quotient fits
    let pairs = if n % 2 == 0 {
        (n / 2).checked_mul(n + 1)
    } else {
        n.checked_mul(n / 2 + 1)
    };
    let len = pairs.and_then(|p| p.checked_mul(run));
    match len {
        Some(len)
            if len
                .checked_mul(std::mem::size_of::<T>())
                .map_or(false, |bytes| bytes <= isize::MAX as usize) =>
        {
            Ok(len)
        }
        _ => {
            tracing::debug!(n, run, "rejected dimension with unaddressable storage");
            Err(ConfigurationError::DimensionTooLarge { n })
        }
    }
}

/// Check a coordinate tuple against the container arity and dimension
pub(crate) fn check_index(idx: &[usize], arity: usize, dim: usize) -> Result<(), IndexError> {
    if idx.len() != arity {
        tracing::trace!(?idx, arity, "rejected index with wrong arity");
        return Err(IndexError::WrongArity {
            expected: arity,
            found: idx.to_vec(),
        });
    }
    for (axis, &index) in idx.iter().enumerate() {
        if index >= dim {
            tracing::trace!(axis, index, dim, "rejected out of range index");
            return Err(IndexError::OutOfRange { axis, index, dim });
        }
    }
    Ok(())
}
