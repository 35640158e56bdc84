// Random selection of multiline prompts

use rand::seq::SliceRandom;
use rand::Rng;

use crate::prompts::Prompt;

/// Draw `count` prompts without replacement, in random order.
///
/// Asking for more than the pool holds returns the whole pool, shuffled.
pub fn sample_prompts<'a, R>(pool: &'a [Prompt], count: usize, rng: &mut R) -> Vec<&'a Prompt>
where
    R: Rng + ?Sized,
{
    pool.choose_multiple(rng, count).collect()
}
