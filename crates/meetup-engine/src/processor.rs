//! Meetup Processor
//!
//! Runs one round of pairwise meetings over an agent listing. Agents that
//! sit the round out (HEALTHY, DEAD) come first in the output, in their
//! original relative order, followed by the resolved pairs and any odd
//! meeter left over.

use meetup_core::{Agent, AgentListing, MeetingCondition};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, trace};

/// How a pair of meeters was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairOutcome {
    /// Exactly one side was CURE and the other improved
    Improved,
    /// Both sides were CURE
    BothCure,
    /// Neither side was CURE and both worsened
    Worsened,
}

/// Per-round counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub population: usize,
    pub non_meeters: usize,
    pub pairs: usize,
    pub improved: usize,
    pub worsened: usize,
    pub cure_pairs: usize,
    pub carried_forward: bool,
}

impl RoundStats {
    fn record(&mut self, outcome: PairOutcome) {
        self.pairs += 1;
        match outcome {
            PairOutcome::Improved => self.improved += 1,
            PairOutcome::BothCure => self.cure_pairs += 1,
            PairOutcome::Worsened => self.worsened += 2,
        }
    }
}

/// Updated listing plus the counters for the round that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub listing: AgentListing,
    pub stats: RoundStats,
}

/// Stateless meetup processor
///
/// Holds no data, so a single value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeetupProcessor;

impl MeetupProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Updated listing after one round of meetings
    pub fn meetup(&self, agents: &[Agent]) -> AgentListing {
        self.run_round(agents).listing
    }

    /// Run one round and report what happened
    #[instrument(skip(self, agents), fields(population = agents.len()))]
    pub fn run_round(&self, agents: &[Agent]) -> RoundOutcome {
        let mut listing = AgentListing::with_capacity(agents.len());
        let mut meeters = Vec::new();

        for agent in agents {
            match agent.category.as_meeting() {
                Some(condition) => meeters.push((agent, condition)),
                None => listing.push(agent.clone()),
            }
        }

        let mut stats = RoundStats {
            population: agents.len(),
            non_meeters: listing.len(),
            ..RoundStats::default()
        };

        let mut meeters = meeters.into_iter();
        while let Some((a, condition_a)) = meeters.next() {
            match meeters.next() {
                Some((b, condition_b)) => {
                    let (left, right, outcome) = resolve_pair(a, condition_a, b, condition_b);
                    trace!(a = %a.name, b = %b.name, ?outcome, "Pair resolved");
                    stats.record(outcome);
                    listing.push(left);
                    listing.push(right);
                }
                None => {
                    trace!(agent = %a.name, "Odd meeter carried forward");
                    stats.carried_forward = true;
                    listing.push(a.clone());
                }
            }
        }

        info!(
            pairs = stats.pairs,
            improved = stats.improved,
            worsened = stats.worsened,
            carried_forward = stats.carried_forward,
            "Meetup round complete"
        );

        RoundOutcome { listing, stats }
    }
}

/// Apply the meeting rules to `(a, b)`. Output keeps `a` before `b`.
fn resolve_pair(
    a: &Agent,
    condition_a: MeetingCondition,
    b: &Agent,
    condition_b: MeetingCondition,
) -> (Agent, Agent, PairOutcome) {
    match (condition_a.is_cure(), condition_b.is_cure()) {
        (true, true) => (a.clone(), b.clone(), PairOutcome::BothCure),
        (true, false) => (
            a.clone(),
            b.with_category(condition_b.improve()),
            PairOutcome::Improved,
        ),
        (false, true) => (
            a.with_category(condition_a.improve()),
            b.clone(),
            PairOutcome::Improved,
        ),
        (false, false) => (
            a.with_category(condition_a.worsen()),
            b.with_category(condition_b.worsen()),
            PairOutcome::Worsened,
        ),
    }
}

/// One round of meetings with a default processor
pub fn meetup(agents: &[Agent]) -> AgentListing {
    MeetupProcessor::new().meetup(agents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use meetup_core::Condition::{self, *};

    fn listing(entries: &[(&str, Condition)]) -> AgentListing {
        entries
            .iter()
            .map(|(name, category)| Agent::new(*name, *category))
            .collect()
    }

    #[test]
    fn test_non_meeters_first_then_pairs_then_leftover() {
        let input = listing(&[("A", Sick), ("B", Dying), ("C", Healthy), ("D", Cure)]);

        let output = meetup(&input);

        assert_eq!(
            output,
            listing(&[("C", Healthy), ("A", Dying), ("B", Dead), ("D", Cure)])
        );
    }

    #[test]
    fn test_cure_improves_partner() {
        let output = meetup(&listing(&[("A", Cure), ("B", Sick)]));
        assert_eq!(output, listing(&[("A", Cure), ("B", Healthy)]));
    }

    #[test]
    fn test_two_cures_are_unchanged() {
        let output = meetup(&listing(&[("A", Cure), ("B", Cure)]));
        assert_eq!(output, listing(&[("A", Cure), ("B", Cure)]));
    }

    #[test]
    fn test_dead_only_population() {
        let output = meetup(&listing(&[("A", Dead)]));
        assert_eq!(output, listing(&[("A", Dead)]));
    }

    #[test]
    fn test_cure_in_second_slot_keeps_positions() {
        let output = meetup(&listing(&[("A", Dying), ("B", Cure), ("C", Sick)]));
        assert_eq!(output, listing(&[("A", Sick), ("B", Cure), ("C", Sick)]));
    }

    #[test]
    fn test_empty_population() {
        let outcome = MeetupProcessor::new().run_round(&[]);
        assert!(outcome.listing.is_empty());
        assert_eq!(outcome.stats, RoundStats::default());
    }

    #[test]
    fn test_pairing_skips_over_non_meeters() {
        // A and B pair up even though C sits between them.
        let output = meetup(&listing(&[("A", Sick), ("C", Dead), ("B", Cure)]));
        assert_eq!(output, listing(&[("C", Dead), ("A", Healthy), ("B", Cure)]));
    }

    #[test]
    fn test_duplicate_names_are_kept_apart() {
        let output = meetup(&listing(&[("X", Dying), ("X", Dying), ("X", Healthy)]));
        assert_eq!(output, listing(&[("X", Healthy), ("X", Dead), ("X", Dead)]));
    }

    #[test]
    fn test_input_is_left_untouched() {
        let input = listing(&[("A", Sick), ("B", Sick)]);
        let before = input.clone();
        let _ = meetup(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_round_stats() {
        let input = listing(&[
            ("A", Sick),
            ("B", Cure),
            ("C", Healthy),
            ("D", Dying),
            ("E", Sick),
            ("F", Cure),
            ("G", Cure),
            ("H", Dead),
            ("I", Dying),
        ]);

        let outcome = MeetupProcessor::new().run_round(&input);

        assert_eq!(
            outcome.stats,
            RoundStats {
                population: 9,
                non_meeters: 2,
                pairs: 3,
                improved: 1,
                worsened: 2,
                cure_pairs: 1,
                carried_forward: true,
            }
        );
        assert_eq!(
            outcome.listing,
            listing(&[
                ("C", Healthy),
                ("H", Dead),
                ("A", Healthy),
                ("B", Cure),
                ("D", Dead),
                ("E", Dying),
                ("F", Cure),
                ("G", Cure),
                ("I", Dying),
            ])
        );
    }

    #[test]
    fn test_processor_is_shareable_across_threads() {
        let processor = MeetupProcessor::new();
        let handles: Vec<_> = [Sick, Dying]
            .into_iter()
            .map(|category| {
                std::thread::spawn(move || {
                    processor.meetup(&[Agent::new("A", category), Agent::new("B", category)])
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results[0], listing(&[("A", Dying), ("B", Dying)]));
        assert_eq!(results[1], listing(&[("A", Dead), ("B", Dead)]));
    }
}
