use tracing::{Level, event};

use crate::core::{Axis, Card, CardSet, DeckModel, InvalidConfiguration};

use super::{HandPattern, NamedGroup, NamedHand, Profile, Rest};

/// A profile ready to count.
///
/// Lines (ranks or suits) that hold the same number of held cards are
/// interchangeable, so they are kept only as a count per held amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileTarget {
    /// Cards on every line.
    pub(crate) line_len: usize,
    /// Distinct required multiplicities, largest first, with the number of
    /// lines that must end up with exactly that many cards.
    pub(crate) roles: Vec<(usize, usize)>,
    /// Multiplicities a line without a role may end up with.
    pub(crate) free: Vec<usize>,
    /// `(held, lines)`: how many lines start with `held` cards already.
    pub(crate) classes: Vec<(usize, usize)>,
}

/// A run over ranks, with the held cards of every rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTarget {
    pub(crate) length: usize,
    pub(crate) suits: usize,
    /// Suits held on each rank, in rank order.
    pub(crate) held: Vec<CardSet>,
}

/// Named parts of the deck that each need some of their cards drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedTarget {
    /// `(need, available)` for every named part.
    pub(crate) parts: Vec<(usize, usize)>,
    /// Undrawn cards outside every named part.
    pub(crate) rest: usize,
}

/// What a pattern turns into once held cards are folded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Every draw works.
    Always,
    /// No draw can work.
    Unsatisfiable,
    Profile(ProfileTarget),
    Run(RunTarget),
    SuitedRun(RunTarget),
    Named(NamedTarget),
}

/// Normalize a pattern against a deck and the cards already held.
///
/// Held cards are checked against the deck the same way
/// `DeckModel::held_set` does. Malformed patterns are errors; patterns that
/// simply cannot be made with this deck and these held cards compile to
/// `Target::Unsatisfiable`.
pub fn compile(
    deck: &DeckModel,
    pattern: &HandPattern,
    held: &[Card],
) -> Result<Target, InvalidConfiguration> {
    let held_set = deck.held_set(held)?;
    let target = match pattern {
        HandPattern::Any => Target::Always,
        HandPattern::Profile(profile) => compile_profile(deck, profile, held)?,
        HandPattern::Run { length, suited } => compile_run(deck, *length, *suited, held)?,
        HandPattern::Named(named) => compile_named(deck, named, held, held_set)?,
    };
    if target == Target::Unsatisfiable {
        event!(Level::DEBUG, %pattern, held = held.len(), "unsatisfiable");
    }
    Ok(target)
}

fn compile_profile(
    deck: &DeckModel,
    profile: &Profile,
    held: &[Card],
) -> Result<Target, InvalidConfiguration> {
    if profile.groups.contains(&0) {
        return Err(InvalidConfiguration::EmptyGroup);
    }
    let lines = deck.lines(profile.axis);
    let line_len = deck.line_len(profile.axis);
    if profile.groups.len() > lines || profile.groups.iter().any(|&g| g > line_len) {
        return Ok(Target::Unsatisfiable);
    }

    let mut groups = profile.groups.clone();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    let mut roles: Vec<(usize, usize)> = Vec::new();
    for g in groups {
        match roles.last_mut() {
            Some((value, count)) if *value == g => *count += 1,
            _ => roles.push((g, 1)),
        }
    }

    let free: Vec<usize> = match profile.rest {
        Rest::Empty => vec![0],
        Rest::Free => (0..=line_len)
            .filter(|a| !roles.iter().any(|(value, _)| value == a))
            .collect(),
    };

    // Group lines by how many of their cards are held.
    let mut by_held = vec![0; line_len + 1];
    for count in deck.held_per_line(profile.axis, held) {
        by_held[count] += 1;
    }
    let classes: Vec<(usize, usize)> = by_held
        .into_iter()
        .enumerate()
        .filter(|&(_, lines)| lines > 0)
        .collect();

    // A line already past everything it could end up as can't be fixed by
    // drawing more.
    let largest = roles
        .iter()
        .map(|&(value, _)| value)
        .chain(free.iter().copied())
        .max()
        .unwrap_or(0);
    if classes.iter().any(|&(h, _)| h > largest) {
        return Ok(Target::Unsatisfiable);
    }
    // Lines that can't be free have to take a role.
    let must_play: usize = classes
        .iter()
        .filter(|&&(h, _)| !free.iter().any(|&a| a >= h))
        .map(|&(_, lines)| lines)
        .sum();
    if must_play > profile.groups.len() {
        return Ok(Target::Unsatisfiable);
    }

    Ok(Target::Profile(ProfileTarget {
        line_len,
        roles,
        free,
        classes,
    }))
}

fn compile_run(
    deck: &DeckModel,
    length: usize,
    suited: bool,
    held: &[Card],
) -> Result<Target, InvalidConfiguration> {
    if length == 0 {
        return Err(InvalidConfiguration::EmptyRun);
    }
    if length > deck.ranks() {
        return Ok(Target::Unsatisfiable);
    }
    let mut by_rank = vec![CardSet::new(); deck.ranks()];
    for card in held {
        by_rank[usize::from(card.rank)].insert(usize::from(card.suit));
    }
    let target = RunTarget {
        length,
        suits: deck.suits(),
        held: by_rank,
    };
    Ok(if suited {
        Target::SuitedRun(target)
    } else {
        Target::Run(target)
    })
}

fn compile_named(
    deck: &DeckModel,
    named: &NamedHand,
    held: &[Card],
    held_set: CardSet,
) -> Result<Target, InvalidConfiguration> {
    let remaining = deck.remaining_cards(held);
    let parts = match named {
        NamedHand::Ranks(groups) => named_lines(deck, Axis::Rank, groups, held)?,
        NamedHand::Suits(groups) => named_lines(deck, Axis::Suit, groups, held)?,
        NamedHand::Cards(cards) => {
            let mut seen = CardSet::new();
            let mut parts = Vec::with_capacity(cards.len());
            for &card in cards {
                if !deck.contains(card) {
                    return Err(InvalidConfiguration::NamedCardOutOfRange(card));
                }
                if !seen.insert(deck.index(card)) {
                    return Err(InvalidConfiguration::DuplicateNamedCard(card));
                }
                if held_set.contains(deck.index(card)) {
                    parts.push((0, 0));
                } else {
                    parts.push((1, 1));
                }
            }
            parts
        }
    };

    if parts.iter().any(|&(need, available)| need > available) {
        return Ok(Target::Unsatisfiable);
    }
    if parts.iter().all(|&(need, _)| need == 0) {
        return Ok(Target::Always);
    }
    let named_cards: usize = parts.iter().map(|&(_, available)| available).sum();
    Ok(Target::Named(NamedTarget {
        parts,
        rest: remaining - named_cards,
    }))
}

fn named_lines(
    deck: &DeckModel,
    axis: Axis,
    groups: &[NamedGroup],
    held: &[Card],
) -> Result<Vec<(usize, usize)>, InvalidConfiguration> {
    let lines = deck.lines(axis);
    let line_len = deck.line_len(axis);
    let held_per_line = deck.held_per_line(axis, held);
    let mut seen = vec![false; lines];
    let mut parts = Vec::with_capacity(groups.len());
    for group in groups {
        if group.index >= lines {
            return Err(InvalidConfiguration::NamedIndexOutOfRange {
                axis,
                index: group.index,
            });
        }
        if seen[group.index] {
            return Err(InvalidConfiguration::DuplicateNamedIndex {
                axis,
                index: group.index,
            });
        }
        seen[group.index] = true;
        let already = held_per_line[group.index];
        parts.push((group.at_least.saturating_sub(already), line_len - already));
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> DeckModel {
        DeckModel::default()
    }

    #[test]
    fn test_full_house_roles() {
        let target = compile(&deck(), &HandPattern::full_house(), &[]).unwrap();
        let Target::Profile(t) = target else {
            panic!("expected a profile target, got {target:?}");
        };
        assert_eq!(vec![(3, 1), (2, 1)], t.roles);
        // 0, 1 and 4 are fine for the other ranks, 2 and 3 are taken.
        assert_eq!(vec![0, 1, 4], t.free);
        assert_eq!(vec![(0, 6)], t.classes);
        assert_eq!(4, t.line_len);
    }

    #[test]
    fn test_two_pair_roles_merge() {
        let target = compile(&deck(), &HandPattern::exact_ranks(vec![2, 1, 2]), &[]).unwrap();
        let Target::Profile(t) = target else {
            panic!("expected a profile target, got {target:?}");
        };
        assert_eq!(vec![(2, 2), (1, 1)], t.roles);
        assert_eq!(vec![0], t.free);
    }

    #[test]
    fn test_held_classes() {
        let held = [Card::new(0, 0), Card::new(0, 1), Card::new(2, 3)];
        let target = compile(&deck(), &HandPattern::pair(), &held).unwrap();
        let Target::Profile(t) = target else {
            panic!("expected a profile target, got {target:?}");
        };
        assert_eq!(vec![(0, 4), (1, 1), (2, 1)], t.classes);
    }

    #[test]
    fn test_empty_group_is_an_error() {
        assert_eq!(
            Err(InvalidConfiguration::EmptyGroup),
            compile(&deck(), &HandPattern::exact_ranks(vec![2, 0]), &[])
        );
        assert_eq!(
            Err(InvalidConfiguration::EmptyRun),
            compile(&deck(), &HandPattern::straight(0), &[])
        );
    }

    #[test]
    fn test_impossible_groups() {
        // Only four suits.
        assert_eq!(
            Ok(Target::Unsatisfiable),
            compile(&deck(), &HandPattern::sub_ranks(vec![5]), &[])
        );
        // Only six ranks.
        assert_eq!(
            Ok(Target::Unsatisfiable),
            compile(&deck(), &HandPattern::exact_ranks(vec![1; 7]), &[])
        );
        assert_eq!(
            Ok(Target::Unsatisfiable),
            compile(&deck(), &HandPattern::straight(7), &[])
        );
    }

    #[test]
    fn test_held_past_requirement() {
        // Three of a rank are held, exactly a pair is wanted and the other
        // ranks can't hold three either.
        let held = [Card::new(1, 0), Card::new(1, 1), Card::new(1, 2)];
        let pattern = HandPattern::exact_ranks(vec![2]);
        assert_eq!(Ok(Target::Unsatisfiable), compile(&deck(), &pattern, &held));

        // Two held ranks, but the complete profile only has one group.
        let held = [Card::new(1, 0), Card::new(2, 1)];
        assert_eq!(Ok(Target::Unsatisfiable), compile(&deck(), &pattern, &held));
    }

    #[test]
    fn test_named_folds_held() {
        let held = [Card::new(3, 0)];
        let target = compile(&deck(), &HandPattern::named_rank(3, 2), &held).unwrap();
        assert_eq!(
            Target::Named(NamedTarget {
                parts: vec![(1, 3)],
                rest: 20,
            }),
            target
        );

        // Already have the pair.
        let held = [Card::new(3, 0), Card::new(3, 2)];
        assert_eq!(
            Ok(Target::Always),
            compile(&deck(), &HandPattern::named_rank(3, 2), &held)
        );
        // Five of a rank with four suits.
        assert_eq!(
            Ok(Target::Unsatisfiable),
            compile(&deck(), &HandPattern::named_rank(3, 5), &[])
        );
    }

    #[test]
    fn test_named_errors() {
        assert_eq!(
            Err(InvalidConfiguration::NamedIndexOutOfRange {
                axis: Axis::Suit,
                index: 4
            }),
            compile(
                &deck(),
                &HandPattern::Named(NamedHand::Suits(vec![NamedGroup::new(4, 1)])),
                &[]
            )
        );
        assert_eq!(
            Err(InvalidConfiguration::DuplicateNamedIndex {
                axis: Axis::Rank,
                index: 2
            }),
            compile(
                &deck(),
                &HandPattern::Named(NamedHand::Ranks(vec![
                    NamedGroup::new(2, 1),
                    NamedGroup::new(2, 2)
                ])),
                &[]
            )
        );
        let card = Card::new(0, 9);
        assert_eq!(
            Err(InvalidConfiguration::NamedCardOutOfRange(card)),
            compile(&deck(), &HandPattern::Named(NamedHand::Cards(vec![card])), &[])
        );
        let card = Card::new(0, 1);
        assert_eq!(
            Err(InvalidConfiguration::DuplicateHeldCard(card)),
            compile(&deck(), &HandPattern::pair(), &[card, card])
        );
        assert_eq!(
            Err(InvalidConfiguration::DuplicateNamedCard(card)),
            compile(
                &deck(),
                &HandPattern::Named(NamedHand::Cards(vec![card, card])),
                &[]
            )
        );
    }

    #[test]
    fn test_named_cards_held() {
        let named = HandPattern::Named(NamedHand::Cards(vec![Card::new(0, 0), Card::new(1, 0)]));
        let target = compile(&deck(), &named, &[Card::new(0, 0)]).unwrap();
        assert_eq!(
            Target::Named(NamedTarget {
                parts: vec![(0, 0), (1, 1)],
                rest: 22,
            }),
            target
        );
    }

    #[test]
    fn test_run_held() {
        let held = [Card::new(2, 1), Card::new(2, 3)];
        let target = compile(&deck(), &HandPattern::straight_flush(3), &held).unwrap();
        let Target::SuitedRun(t) = target else {
            panic!("expected a suited run, got {target:?}");
        };
        assert_eq!(6, t.held.len());
        assert_eq!(2, t.held[2].count());
        assert!(t.held[2].contains(3));
        assert!(t.held[0].is_empty());
    }
}
