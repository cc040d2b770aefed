use rand::Rng;
use rand::seq::SliceRandom;

/// Indices into a card's options in the order they should be shown.
///
/// With `shuffle` set this is a uniformly random permutation of `0..len`;
/// otherwise the authored order is kept.
pub fn display_order<R: Rng + ?Sized>(len: usize, shuffle: bool, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    if shuffle {
        order.as_mut_slice().shuffle(rng);
    }
    order
}
