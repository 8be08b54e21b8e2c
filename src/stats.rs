//! Progress statistics over a deck

use chrono::NaiveDate;

use crate::config::{MAX_BOX, MIN_BOX};
use crate::domain::{Card, Deck};

/// Aggregated learning progress for a set of cards
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressSummary {
    pub total_cards: usize,
    /// Cards whose next due date has arrived or passed
    pub due_today: usize,
    /// Cards in the highest box
    pub mastered: usize,
    /// Cards per box; index 0 is box 1
    pub box_distribution: [usize; 5],
    pub total_answers: u64,
    pub correct_answers: u64,
}

impl ProgressSummary {
    /// Lifetime share of correct answers across all cards
    pub fn success_rate(&self) -> f64 {
        if self.total_answers > 0 {
            self.correct_answers as f64 / self.total_answers as f64
        } else {
            0.0
        }
    }
}

/// Summarize progress over any set of cards.
/// Cards without stats count as box 1 and due, same as the scheduler
/// treats them.
pub fn summarize<'a>(cards: impl IntoIterator<Item = &'a Card>, today: NaiveDate) -> ProgressSummary {
    let mut summary = ProgressSummary::default();

    for card in cards {
        summary.total_cards += 1;
        if card.is_due(today) {
            summary.due_today += 1;
        }

        let box_level = card.box_level().clamp(MIN_BOX, MAX_BOX);
        summary.box_distribution[(box_level - MIN_BOX) as usize] += 1;
        if box_level == MAX_BOX {
            summary.mastered += 1;
        }

        if let Some(stats) = card.stats {
            let stats = stats.normalized();
            summary.total_answers += stats.total as u64;
            summary.correct_answers += stats.correct as u64;
        }
    }

    summary
}

/// Progress over one topic's cards
pub fn topic_progress(deck: &Deck, topic_id: i64, today: NaiveDate) -> ProgressSummary {
    summarize(deck.cards_in_topic(topic_id), today)
}

/// Progress over all topics filed under a folder
pub fn folder_progress(deck: &Deck, folder_id: i64, today: NaiveDate) -> ProgressSummary {
    summarize(deck.cards_in_folder(folder_id), today)
}

/// Progress over the whole deck
pub fn deck_progress(deck: &Deck, today: NaiveDate) -> ProgressSummary {
    summarize(&deck.cards, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn deck_with_boxes() -> Deck {
        let mut deck = Deck::new();
        let folder = deck.add_folder("Biologie".to_string());
        let topic_a = deck.add_topic("Zellbiologie".to_string(), Some(folder));
        let topic_b = deck.add_topic("Genetik".to_string(), Some(folder));
        let loose = deck.add_topic("Allgemein".to_string(), None);

        // Topic A: boxes 1 and 5, both due
        for (box_level, topic) in [(1, topic_a), (5, topic_a), (3, topic_b), (2, loose)] {
            let id = deck.add_card(topic, format!("card-{}", box_level), None, today());
            let card = deck.card_mut(id).unwrap();
            if let Some(stats) = card.stats.as_mut() {
                stats.box_level = box_level;
                stats.total = 10;
                stats.correct = 6;
            }
        }
        deck
    }

    #[test]
    fn test_summarize_counts_and_distribution() {
        let deck = deck_with_boxes();
        let summary = deck_progress(&deck, today());

        assert_eq!(summary.total_cards, 4);
        assert_eq!(summary.due_today, 4);
        assert_eq!(summary.mastered, 1);
        assert_eq!(summary.box_distribution, [1, 1, 1, 0, 1]);
        assert_eq!(summary.total_answers, 40);
        assert_eq!(summary.correct_answers, 24);
    }

    #[test]
    fn test_summary_success_rate() {
        let deck = deck_with_boxes();
        let summary = deck_progress(&deck, today());
        assert!((summary.success_rate() - 0.6).abs() < f64::EPSILON);

        let empty = ProgressSummary::default();
        assert_eq!(empty.success_rate(), 0.0);
    }

    #[test]
    fn test_due_respects_future_dates() {
        let mut deck = deck_with_boxes();
        if let Some(stats) = deck.card_mut(1).unwrap().stats.as_mut() {
            stats.next_due = today() + Duration::days(3);
        }
        let summary = deck_progress(&deck, today());
        assert_eq!(summary.due_today, 3);
    }

    #[test]
    fn test_topic_progress_scopes_to_topic() {
        let deck = deck_with_boxes();
        let summary = topic_progress(&deck, 1, today());
        assert_eq!(summary.total_cards, 2);
        assert_eq!(summary.mastered, 1);
        assert_eq!(summary.box_distribution, [1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_folder_progress_spans_topics() {
        let deck = deck_with_boxes();
        // The folder holds topics 1 and 2 but not the top-level topic 3
        let summary = folder_progress(&deck, 1, today());
        assert_eq!(summary.total_cards, 3);
        assert_eq!(summary.box_distribution, [1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_empty_scope_yields_default_summary() {
        let deck = deck_with_boxes();
        assert_eq!(topic_progress(&deck, 99, today()), ProgressSummary::default());
    }

    #[test]
    fn test_cards_without_stats_count_as_box_1_and_due() {
        let mut deck = Deck::new();
        let topic = deck.add_topic("Lose".to_string(), None);
        let id = deck.add_card(topic, "Karte".to_string(), None, today());
        deck.card_mut(id).unwrap().stats = None;

        let summary = deck_progress(&deck, today());
        assert_eq!(summary.total_cards, 1);
        assert_eq!(summary.due_today, 1);
        assert_eq!(summary.box_distribution, [1, 0, 0, 0, 0]);
        assert_eq!(summary.total_answers, 0);
    }

    #[test]
    fn test_corrupted_box_lands_in_clamped_bucket() {
        let mut deck = Deck::new();
        let topic = deck.add_topic("Kaputt".to_string(), None);
        let id = deck.add_card(topic, "Karte".to_string(), None, today());
        if let Some(stats) = deck.card_mut(id).unwrap().stats.as_mut() {
            stats.box_level = 12;
        }

        let summary = deck_progress(&deck, today());
        assert_eq!(summary.box_distribution, [0, 0, 0, 0, 1]);
        assert_eq!(summary.mastered, 1);
    }
}
