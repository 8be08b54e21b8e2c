//! Study-session bookkeeping.
//!
//! Tracks how many cards were answered and how many of those were
//! correct, with an optional card limit after which the session is done.
//! The session holds no cards and does no scheduling; the caller drives
//! the scheduler and mirrors each scored answer into the session.

/// Counters for one study run over a single topic
#[derive(Debug, Clone, Default)]
pub struct StudySession {
  pub topic_id: i64,
  /// Cards answered so far
  pub answered: u32,
  /// Correctly answered cards
  pub correct: u32,
  /// Stop after this many answers, None for an open-ended session
  pub max_cards: Option<u32>,
}

impl StudySession {
  pub fn new(topic_id: i64, max_cards: Option<u32>) -> Self {
    Self {
      topic_id,
      answered: 0,
      correct: 0,
      max_cards,
    }
  }

  /// Record one scored answer
  pub fn record_answer(&mut self, is_correct: bool) {
    self.answered += 1;
    if is_correct {
      self.correct += 1;
    }
  }

  /// True once the card limit is reached; open-ended sessions never complete
  pub fn is_complete(&self) -> bool {
    self.max_cards.is_some_and(|max| self.answered >= max)
  }

  /// Cards left before the limit, None for open-ended sessions
  pub fn remaining(&self) -> Option<u32> {
    self.max_cards.map(|max| max.saturating_sub(self.answered))
  }

  /// Share of correct answers so far, 0.0 before the first answer
  pub fn success_rate(&self) -> f64 {
    if self.answered > 0 {
      self.correct as f64 / self.answered as f64
    } else {
      0.0
    }
  }
}
