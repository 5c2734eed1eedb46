use crate::{constants::Distance, layout::BlockLayout};

/// One min-plus relaxation of the columns owned by `rank`.
///
/// `matrix` is the round's column-major `m x m` distance matrix and `transposed`
/// its transpose, so `matrix[j*m..]` is column `j` and `transposed[i*m..]` is row `i`.
/// For every owned column `j` and every row `i` the new entry is
/// `min(D[i][j], min_k D[i][k] + D[k][j])`, written to `block` (`c * m` entries,
/// column-major). The shared matrix is never written.
///
/// Entries are expected to be at most `layout.sentinel()`. Sums saturate, so
/// larger entries are treated as unreachable instead of overflowing.
///
/// Returns `true` if any entry of the block strictly decreased.
pub fn optimize_block(
    layout: &BlockLayout,
    rank: usize,
    matrix: &[Distance],
    transposed: &[Distance],
    block: &mut [Distance],
) -> bool {
    let m = layout.padded();
    debug_assert_eq!(matrix.len(), layout.matrix_len());
    debug_assert_eq!(transposed.len(), layout.matrix_len());
    debug_assert_eq!(block.len(), layout.block_len());

    let mut has_update = false;

    for (col, new_column) in layout.columns_of(rank).zip(block.chunks_exact_mut(m)) {
        let column = &matrix[col * m..(col + 1) * m];

        for (row, new_value) in new_column.iter_mut().enumerate() {
            let current = column[row];
            let relaxed = transposed[row * m..(row + 1) * m]
                .iter()
                .zip(column)
                .map(|(to_k, from_k)| to_k.saturating_add(*from_k))
                .min()
                .unwrap_or(current);

            if relaxed < current {
                *new_value = relaxed;
                has_update = true;
            } else {
                *new_value = current;
            }
        }
    }

    has_update
}
