use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{MAX_BOX, MIN_BOX};

/// Review state for a single card under the Leitner box system.
///
/// Serialized field names match the original export format so decks
/// round-trip through JSON backups unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
  /// Current box, 1 (newest) through 5 (mastered)
  #[serde(rename = "box")]
  pub box_level: u8,
  /// Consecutive correct answers since the last miss
  pub streak: u32,
  /// Answers ever given
  pub total: u32,
  /// Correct answers ever given
  pub correct: u32,
  /// Timestamp of the most recent answer, None if never reviewed
  #[serde(default)]
  pub last_reviewed: Option<DateTime<Utc>>,
  /// The card becomes due for review on this date
  pub next_due: NaiveDate,
}

impl ReviewStats {
  /// Base state for a freshly created card: box 1, no history, due today
  pub fn new(today: NaiveDate) -> Self {
    Self {
      box_level: MIN_BOX,
      streak: 0,
      total: 0,
      correct: 0,
      last_reviewed: None,
      next_due: today,
    }
  }

  /// Clamp values from persisted data back into their valid ranges.
  /// Corrupted exports can carry a box of 0 or 6, or correct > total.
  pub fn normalized(mut self) -> Self {
    self.box_level = self.box_level.clamp(MIN_BOX, MAX_BOX);
    self.correct = self.correct.min(self.total);
    self
  }

  pub fn is_due(&self, today: NaiveDate) -> bool {
    self.next_due <= today
  }

  pub fn is_mastered(&self) -> bool {
    self.box_level == MAX_BOX
  }

  pub fn success_rate(&self) -> f64 {
    if self.total > 0 {
      self.correct as f64 / self.total as f64
    } else {
      0.0
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
  pub id: i64,
  /// Topic this card belongs to; cards are never reassigned automatically
  pub topic_id: i64,
  /// The term being learned (the expected answer in description mode)
  pub term: String,
  /// Prompt text describing the term
  #[serde(default)]
  pub description: Option<String>,
  /// Review state; None for cards imported without one, initialized on
  /// the first answer
  #[serde(default)]
  pub stats: Option<ReviewStats>,
}

impl Card {
  pub fn new(topic_id: i64, term: String, description: Option<String>, today: NaiveDate) -> Self {
    Self {
      id: 0,
      topic_id,
      term,
      description,
      stats: Some(ReviewStats::new(today)),
    }
  }

  /// Current box, treating missing stats as a brand-new card
  pub fn box_level(&self) -> u8 {
    self.stats.map(|s| s.normalized().box_level).unwrap_or(MIN_BOX)
  }

  /// A card without stats has never been scheduled and counts as due
  pub fn is_due(&self, today: NaiveDate) -> bool {
    self.stats.map(|s| s.is_due(today)).unwrap_or(true)
  }

  pub fn last_reviewed(&self) -> Option<DateTime<Utc>> {
    self.stats.and_then(|s| s.last_reviewed)
  }
}
