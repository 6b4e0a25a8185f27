/// Number of 1 Å distance buckets.
pub const BUCKET_COUNT: usize = 20;

/// Upper bound of the binned distance range, in Angstroms.
pub const DISTANCE_CUTOFF: f64 = 20.0;

#[rustfmt::skip]
pub static BUCKET_LABELS: [&str; BUCKET_COUNT] = [
    "0-1", "1-2", "2-3", "3-4", "4-5", "5-6", "6-7", "7-8", "8-9", "9-10",
    "10-11", "11-12", "12-13", "13-14", "14-15", "15-16", "16-17", "17-18", "18-19", "19-20",
];

/// Maps a distance to its bucket index, or `None` outside `[0, 20]`.
///
/// Buckets are half-open `[k, k + 1)`; the cutoff itself belongs to the last
/// bucket so the closed upper edge is not lost.
#[inline]
pub fn bucket_index(distance: f64) -> Option<usize> {
    if !(0.0..=DISTANCE_CUTOFF).contains(&distance) {
        return None;
    }
    if distance == DISTANCE_CUTOFF {
        return Some(BUCKET_COUNT - 1);
    }
    Some(distance as usize)
}
