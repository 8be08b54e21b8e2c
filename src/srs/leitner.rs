use chrono::{DateTime, Duration, Utc};

use crate::config::{self, LapsePolicy, MAX_BOX};
use crate::domain::ReviewStats;

/// Apply one scored answer to a card's review state.
///
/// A correct answer extends the streak and promotes the card one box
/// (capped at box 5); a wrong answer resets the streak and demotes the
/// card per the lapse policy. The next due date is recomputed from the
/// new box via the interval table. Box 5 is sticky but not permanent: a
/// mastered card can still regress on a miss.
///
/// The input is normalized first, so out-of-range values from persisted
/// data are clamped instead of rejected. This function never fails.
pub fn calculate_review(
  stats: &ReviewStats,
  is_correct: bool,
  now: DateTime<Utc>,
  policy: LapsePolicy,
) -> ReviewStats {
  let mut next = stats.normalized();
  next.total += 1;

  if is_correct {
    next.correct += 1;
    next.streak += 1;
    next.box_level = (next.box_level + 1).min(MAX_BOX);
  } else {
    next.streak = 0;
    next.box_level = policy.demote(next.box_level);
  }

  next.last_reviewed = Some(now);
  next.next_due = now.date_naive() + Duration::days(config::interval_days(next.box_level));
  next
}
