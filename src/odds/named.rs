use crate::core::{Binomials, Series};
use crate::pattern::NamedTarget;

/// Count draws that put at least `need` cards into every named part.
///
/// The named parts and the rest of the deck are disjoint, so the count is
/// the product of one series per part, read at the draw size.
pub(crate) fn count(target: &NamedTarget, binomials: &Binomials, draw: usize) -> u128 {
    let rest = Series::from_terms(
        (0..=target.rest).map(|c| (c, binomials.choose(target.rest, c))),
        draw,
    );
    target
        .parts
        .iter()
        .fold(rest, |acc, &(need, available)| {
            let part = Series::from_terms(
                (need..=available).map(|c| (c, binomials.choose(available, c))),
                draw,
            );
            acc.mul(&part)
        })
        .coeff(draw)
}
