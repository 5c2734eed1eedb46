/// Path lengths and adjacency entries.
///
/// The sentinel for "no path yet" is `m + 1` where `m` is the padded dimension;
/// layouts are rejected when two sentinels would not fit, so relaxation never wraps.
pub type Distance = u32;

/// Caller-facing value for "no edge" / "no path".
pub const NO_PATH: Distance = 0;

pub const EDGE: Distance = 1;

/// Rank that owns the caller's input and output.
pub const ROOT_RANK: usize = 0;
