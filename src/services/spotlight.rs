use rand::Rng;
use rand::seq::IndexedRandom;

use crate::models::RatingItem;

pub const DEFAULT_SPOTLIGHT_MIN_SCORE: i32 = 8;

/// Picks the featured item: uniformly among items scored at least
/// `min_score`, or uniformly among all items when none qualify.
pub fn select_spotlight<'a, R: Rng + ?Sized>(
    items: &'a [RatingItem],
    min_score: i32,
    rng: &mut R,
) -> Option<&'a RatingItem> {
    let favourites: Vec<&RatingItem> = items.iter().filter(|i| i.my_rating >= min_score).collect();

    if favourites.is_empty() {
        items.choose(rng)
    } else {
        favourites.choose(rng).copied()
    }
}
