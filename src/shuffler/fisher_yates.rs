use rand::Rng;

/// Produce a uniformly random permutation of `items` without mutating it.
///
/// Standard Fisher-Yates over a copy: walk `i` from the last index down to 1,
/// draw `j` uniformly in `[0, i]`, swap. Each of the n! permutations comes
/// out with equal probability given a uniform source.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// `shuffle` with a caller-supplied random source, for reproducible draws.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
