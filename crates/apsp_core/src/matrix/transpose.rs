use crate::constants::Distance;

/// Writes the transpose of the `m x m` matrix `source` into `target`.
///
/// With column-major storage, row `i` of the original becomes the contiguous
/// slice `target[i*m..(i+1)*m]`.
pub fn transpose_into(padded: usize, source: &[Distance], target: &mut [Distance]) {
    debug_assert_eq!(source.len(), padded * padded);
    debug_assert_eq!(target.len(), padded * padded);

    for (i, row) in target.chunks_exact_mut(padded).enumerate() {
        for (j, value) in row.iter_mut().enumerate() {
            *value = source[j * padded + i];
        }
    }
}
