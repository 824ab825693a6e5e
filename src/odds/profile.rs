use std::collections::BTreeMap;

use crate::core::{Binomials, Series};
use crate::pattern::ProfileTarget;

/// Every way to pick how many lines of one class take each role: vectors
/// `taken` with `taken[i] <= remaining[i]` and at most `lines` in total.
fn splits(remaining: &[usize], lines: usize) -> Vec<Vec<usize>> {
    let mut out = vec![Vec::with_capacity(remaining.len())];
    for &rem in remaining {
        let mut next = Vec::new();
        for prefix in out {
            let used: usize = prefix.iter().sum();
            for take in 0..=rem.min(lines - used) {
                let mut split = prefix.clone();
                split.push(take);
                next.push(split);
            }
        }
        out = next;
    }
    out
}

/// Count draws of exactly `draw` cards that complete a profile.
///
/// Works class by class. Within a class every line has the same number of
/// held cards, so which lines get a role only matters through how many do,
/// and that is a multinomial. Each role line then draws exactly the cards
/// it is missing, and every other line of the class draws according to the
/// free series. The state carried between classes is how many lines of
/// each role are still to be placed.
pub(crate) fn count(target: &ProfileTarget, binomials: &Binomials, draw: usize) -> u128 {
    let values: Vec<usize> = target.roles.iter().map(|&(value, _)| value).collect();
    let start: Vec<usize> = target.roles.iter().map(|&(_, lines)| lines).collect();

    let mut states: BTreeMap<Vec<usize>, Series> = BTreeMap::new();
    states.insert(start, Series::one(draw));

    for &(held, lines) in &target.classes {
        let available = target.line_len - held;
        let free = Series::from_terms(
            target
                .free
                .iter()
                .filter(|&&a| a >= held)
                .map(|&a| (a - held, binomials.choose(available, a - held))),
            draw,
        );
        let free_powers = free.powers(lines);

        let mut next: BTreeMap<Vec<usize>, Series> = BTreeMap::new();
        for (remaining, series) in &states {
            'split: for taken in splits(remaining, lines) {
                let mut drawn = 0;
                let mut weight: u128 = 1;
                for (&value, &n) in values.iter().zip(taken.iter()) {
                    if n == 0 {
                        continue;
                    }
                    if value < held {
                        continue 'split;
                    }
                    drawn += n * (value - held);
                    weight *= binomials.choose(available, value - held).pow(n as u32);
                }
                if drawn > draw || weight == 0 {
                    continue;
                }

                let placed: usize = taken.iter().sum();
                let ways = binomials.multinomial(lines, &taken);
                let term = series
                    .mul(&free_powers[lines - placed])
                    .shift(drawn)
                    .scale(ways * weight);
                if term.is_zero() {
                    continue;
                }

                let left: Vec<usize> = remaining
                    .iter()
                    .zip(taken.iter())
                    .map(|(r, t)| r - t)
                    .collect();
                *next.entry(left).or_insert_with(|| Series::zero(draw)) += &term;
            }
        }
        states = next;
    }

    states
        .get(&vec![0; values.len()])
        .map_or(0, |series| series.coeff(draw))
}
