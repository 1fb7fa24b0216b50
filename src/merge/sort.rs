//! Deterministic event ordering.
//!
//! The merge is last-writer-wins, so the order of events decides which
//! report wins. Events are ordered by turn, then by clan with the owning
//! clan ranked after everyone else, then by clan id, then by unit id. The
//! owning clan's own reports therefore land last within each turn.

use std::cmp::Ordering;

use super::flatten::ObservationEvent;

/// Rank of a clan within a turn: the owning clan sorts after all others.
fn clan_rank(clan: &str, owning_clan: &str) -> u8 {
    u8::from(clan == owning_clan)
}

/// Compares two events by merge precedence.
pub fn precedence(a: &ObservationEvent<'_>, b: &ObservationEvent<'_>, owning_clan: &str) -> Ordering {
    a.turn
        .cmp(&b.turn)
        .then_with(|| clan_rank(a.clan, owning_clan).cmp(&clan_rank(b.clan, owning_clan)))
        .then_with(|| a.clan.cmp(b.clan))
        .then_with(|| a.unit.cmp(b.unit))
}

/// Sorts events into merge order. The sort is stable, so events from the
/// same unit keep their step order.
pub fn sort_events(events: &mut [ObservationEvent<'_>], owning_clan: &str) {
    events.sort_by(|a, b| precedence(a, b, owning_clan));
}
