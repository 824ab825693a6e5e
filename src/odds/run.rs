use std::collections::BTreeMap;

use crate::core::{Binomials, Series};
use crate::pattern::RunTarget;

/// `Σ C(available, c) x^c` for `c` in `from..=available`.
fn draws_from(binomials: &Binomials, available: usize, from: usize, draw: usize) -> Series {
    Series::from_terms(
        (from..=available).map(|c| (c, binomials.choose(available, c))),
        draw,
    )
}

/// Count draws that contain `length` consecutive ranks with a card each.
///
/// Sweeps the ranks in order keeping the length of the run that ends at the
/// current rank. Once a run is long enough the draw goes to `done` and the
/// rest of the deck no longer matters.
pub(crate) fn count(target: &RunTarget, binomials: &Binomials, draw: usize) -> u128 {
    let mut open = vec![Series::zero(draw); target.length];
    open[0] = Series::one(draw);
    let mut done = Series::zero(draw);

    for held in &target.held {
        let held = held.count();
        let available = target.suits - held;
        let any = draws_from(binomials, available, 0, draw);
        // Ways for the rank to end up with a card, and without one.
        let (occupied, empty) = if held > 0 {
            (any.clone(), Series::zero(draw))
        } else {
            (draws_from(binomials, available, 1, draw), Series::one(draw))
        };

        let mut next = vec![Series::zero(draw); target.length];
        let mut next_done = done.mul(&any);
        for (len, series) in open.iter().enumerate() {
            if series.is_zero() {
                continue;
            }
            next[0] += &series.mul(&empty);
            let grown = series.mul(&occupied);
            if len + 1 == target.length {
                next_done += &grown;
            } else {
                next[len + 1] += &grown;
            }
        }
        open = next;
        done = next_done;
    }
    done.coeff(draw)
}

/// Suits that hold cards on the same ranks still to come behave the same,
/// so they are only counted per run length. Each entry is a bitmask of those
/// ranks and `hist[len]`, how many such suits have a run of `len`.
type Lanes = Vec<(u128, Vec<usize>)>;

/// Count draws that contain `length` consecutive ranks all in one suit.
pub(crate) fn count_suited(target: &RunTarget, binomials: &Binomials, draw: usize) -> u128 {
    let length = target.length;
    let ranks = target.held.len();

    let mut by_signature: BTreeMap<u128, usize> = BTreeMap::new();
    for suit in 0..target.suits {
        let signature = target
            .held
            .iter()
            .enumerate()
            .filter(|(_, held)| held.contains(suit))
            .fold(0u128, |acc, (rank, _)| acc | (1u128 << rank));
        *by_signature.entry(signature).or_default() += 1;
    }
    let start: Lanes = by_signature
        .into_iter()
        .map(|(signature, suits)| {
            let mut hist = vec![0; length];
            hist[0] = suits;
            (signature, hist)
        })
        .collect();

    let mut states: BTreeMap<Lanes, Series> = BTreeMap::new();
    states.insert(start, Series::one(draw));
    let mut done = Series::zero(draw);

    for (rank, held) in target.held.iter().enumerate() {
        let available = target.suits - held.count();
        let mut next_done = done.mul(&draws_from(binomials, available, 0, draw));
        let mut next: BTreeMap<Lanes, Series> = BTreeMap::new();

        for (lanes, series) in &states {
            let moves = rank_moves(lanes, rank, binomials, length, draw);
            for (groups, ways, drawn, complete) in moves {
                let term = series.shift(drawn).scale(ways);
                if term.is_zero() {
                    continue;
                }
                if complete {
                    next_done += &term;
                } else {
                    let key = settle(groups, rank, ranks, length);
                    *next.entry(key).or_insert_with(|| Series::zero(draw)) += &term;
                }
            }
        }
        states = next;
        done = next_done;
    }
    done.coeff(draw)
}

/// Every outcome at one rank for all the groups of suits together, keeping
/// only those that draw at most `draw` cards.
fn rank_moves(
    lanes: &Lanes,
    rank: usize,
    binomials: &Binomials,
    length: usize,
    draw: usize,
) -> Vec<(Lanes, u128, usize, bool)> {
    let mut out = vec![(Vec::with_capacity(lanes.len()), 1u128, 0, false)];
    for (signature, hist) in lanes {
        let moves = if signature & (1u128 << rank) != 0 {
            held_moves(hist, length)
        } else {
            clean_moves(hist, binomials, length)
        };
        let mut next = Vec::with_capacity(out.len() * moves.len());
        for (prefix, ways, drawn, complete) in &out {
            for (h, w, d, c) in &moves {
                if drawn + d > draw {
                    continue;
                }
                let mut groups = prefix.clone();
                groups.push((*signature, h.clone()));
                next.push((groups, ways * w, drawn + d, *complete || *c));
            }
        }
        out = next;
    }
    out
}

/// Suits holding a card at this rank all extend their run without drawing.
fn held_moves(hist: &[usize], length: usize) -> Vec<(Vec<usize>, u128, usize, bool)> {
    let mut h = vec![0; length];
    let mut complete = false;
    for (len, &lanes) in hist.iter().enumerate() {
        if lanes == 0 {
            continue;
        }
        if len + 1 >= length {
            complete = true;
        } else {
            h[len + 1] += lanes;
        }
    }
    vec![(h, 1, 0, complete)]
}

/// Normalize lanes once `rank` is behind us: forget it in the signatures,
/// merge groups that now agree, and drop runs too short to finish in the
/// ranks that are left back to zero.
fn settle(groups: Lanes, rank: usize, ranks: usize, length: usize) -> Lanes {
    let left = ranks - 1 - rank;
    let mut merged: BTreeMap<u128, Vec<usize>> = BTreeMap::new();
    for (signature, mut hist) in groups {
        for len in 1..length {
            if len + left < length {
                hist[0] += hist[len];
                hist[len] = 0;
            }
        }
        let entry = merged
            .entry(signature & !(1u128 << rank))
            .or_insert_with(|| vec![0; length]);
        for (total, lanes) in entry.iter_mut().zip(hist) {
            *total += lanes;
        }
    }
    merged.into_iter().collect()
}

/// Every outcome at one rank for suits without a held card there. For each
/// run length choose how many of the suits at that length get a card; they
/// move up by one and the rest fall back to zero.
fn clean_moves(
    hist: &[usize],
    binomials: &Binomials,
    length: usize,
) -> Vec<(Vec<usize>, u128, usize, bool)> {
    let mut out = vec![(vec![0; length], 1u128, 0, false)];
    for (len, &lanes) in hist.iter().enumerate() {
        let mut next = Vec::with_capacity(out.len() * (lanes + 1));
        for (prefix, ways, drawn, complete) in &out {
            for extended in 0..=lanes {
                let mut h = prefix.clone();
                h[0] += lanes - extended;
                let reached = extended > 0 && len + 1 >= length;
                if len + 1 < length {
                    h[len + 1] += extended;
                }
                next.push((
                    h,
                    ways * binomials.choose(lanes, extended),
                    drawn + extended,
                    *complete || reached,
                ));
            }
        }
        out = next;
    }
    out
}
