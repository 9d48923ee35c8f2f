use rand::Rng;

use super::fisher_yates::shuffle_with;

/// Shuffle `items` and deal them round-robin into `group_count` groups.
///
/// Group sizes differ by at most one and any surplus lands in the
/// lowest-indexed groups. Callers guarantee `group_count >= 1`; a zero count
/// panics on the modulo below.
pub fn partition<T: Clone>(items: &[T], group_count: usize) -> Vec<Vec<T>> {
    partition_with(items, group_count, &mut rand::thread_rng())
}

/// `partition` with a caller-supplied random source.
pub fn partition_with<T: Clone, R: Rng + ?Sized>(
    items: &[T],
    group_count: usize,
    rng: &mut R,
) -> Vec<Vec<T>> {
    let shuffled = shuffle_with(items, rng);
    let mut groups: Vec<Vec<T>> = vec![Vec::new(); group_count];

    for (i, item) in shuffled.into_iter().enumerate() {
        groups[i % group_count].push(item);
    }

    groups
}
