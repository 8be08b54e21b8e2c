//! Next-card selection for study sessions.
//!
//! Due cards are served first, lowest box first with the least recently
//! reviewed card winning ties. When nothing is due, selection falls back
//! to weighted random sampling biased toward less-mastered cards so a
//! session always has something to show.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;

use crate::config::LapsePolicy;
use crate::domain::{Card, ReviewStats};
use crate::srs::leitner;

/// Sampling weight for off-schedule practice: box 1 -> 5, ..., box 5 -> 1
fn sampling_weight(box_level: u8) -> usize {
  (6 - box_level as i32).max(1) as usize
}

/// Pick the next card to present from one topic's cards.
///
/// The caller filters the slice by topic before calling. Returns None
/// only for an empty slice. Selection never mutates the cards; the rng
/// is consumed only on the no-cards-due fallback path, so repeated calls
/// with a non-empty due set return the same card.
pub fn select_next<'a, R: Rng + ?Sized>(
  cards: &'a [Card],
  today: NaiveDate,
  rng: &mut R,
) -> Option<&'a Card> {
  if cards.is_empty() {
    return None;
  }

  let mut due: Vec<&Card> = cards.iter().filter(|c| c.is_due(today)).collect();
  if !due.is_empty() {
    // Lowest box first; among equal boxes the card reviewed longest ago
    // (or never, None sorts first) wins, so equally urgent cards rotate
    due.sort_by(|a, b| {
      a.box_level()
        .cmp(&b.box_level())
        .then(a.last_reviewed().cmp(&b.last_reviewed()))
    });
    tracing::debug!("{} of {} cards due, picking card {}", due.len(), cards.len(), due[0].id);
    return Some(due[0]);
  }

  tracing::debug!("no cards due, sampling across {} cards", cards.len());
  weighted_sample(cards, rng)
}

/// Weighted random draw across all cards, replicating each card into a
/// pool `weight` times and drawing a uniform index
fn weighted_sample<'a, R: Rng + ?Sized>(cards: &'a [Card], rng: &mut R) -> Option<&'a Card> {
  let mut pool: Vec<&Card> = Vec::new();
  for card in cards {
    for _ in 0..sampling_weight(card.box_level()) {
      pool.push(card);
    }
  }

  if pool.is_empty() {
    // Unreachable with a non-empty slice since every weight is >= 1
    return cards.first();
  }

  let idx = rng.random_range(0..pool.len());
  Some(pool[idx])
}

/// Score an answer against a card, updating its review state in place.
///
/// Missing stats are initialized to the base state first, so cards from
/// partial imports are handled like fresh ones. Returns the updated
/// stats for the caller to persist.
pub fn update_after_answer(
  card: &mut Card,
  is_correct: bool,
  now: DateTime<Utc>,
  policy: LapsePolicy,
) -> ReviewStats {
  let stats = card.stats.unwrap_or_else(|| ReviewStats::new(now.date_naive()));
  let updated = leitner::calculate_review(&stats, is_correct, now, policy);
  card.stats = Some(updated);
  tracing::debug!(
    "card {} answered {}: box {} -> {}, next due {}",
    card.id,
    if is_correct { "correctly" } else { "incorrectly" },
    stats.box_level,
    updated.box_level,
    updated.next_due
  );
  updated
}
