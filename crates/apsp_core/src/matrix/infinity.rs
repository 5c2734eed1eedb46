use crate::constants::{Distance, NO_PATH};

/// Rewrites "no edge" (0) into the sentinel `m + 1`, then sets every
/// self-distance to 0. The buffer is the column-major `m x m` padded matrix.
pub fn infinitize(padded: usize, buffer: &mut [Distance], sentinel: Distance) {
    debug_assert_eq!(buffer.len(), padded * padded);

    for value in buffer.iter_mut().filter(|value| **value == NO_PATH) {
        *value = sentinel;
    }

    for value in buffer.iter_mut().step_by(padded + 1) {
        *value = 0;
    }
}

/// Rewrites every entry longer than any real path (`> m`) back to "no path" (0).
pub fn deinfinitize(padded: usize, buffer: &mut [Distance]) {
    debug_assert_eq!(buffer.len(), padded * padded);

    for value in buffer.iter_mut() {
        if *value as usize > padded {
            *value = NO_PATH;
        }
    }
}
