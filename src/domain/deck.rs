//! In-memory deck: folders, topics, and the cards that belong to them.
//!
//! The deck is plain state owned by the caller; persisting it (local
//! storage, backups) is the surrounding application's job.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Card;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
  pub id: i64,
  pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
  pub id: i64,
  /// Folder the topic is filed under, None for top-level topics
  #[serde(default)]
  pub folder_id: Option<i64>,
  pub name: String,
}

/// The complete card collection: folders containing topics containing cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
  pub folders: Vec<Folder>,
  pub topics: Vec<Topic>,
  pub cards: Vec<Card>,
}

impl Deck {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_folder(&mut self, name: String) -> i64 {
    let id = next_id(self.folders.iter().map(|f| f.id));
    self.folders.push(Folder { id, name });
    id
  }

  pub fn add_topic(&mut self, name: String, folder_id: Option<i64>) -> i64 {
    let id = next_id(self.topics.iter().map(|t| t.id));
    self.topics.push(Topic { id, folder_id, name });
    id
  }

  /// Add a card with fresh review stats (box 1, due today)
  pub fn add_card(
    &mut self,
    topic_id: i64,
    term: String,
    description: Option<String>,
    today: NaiveDate,
  ) -> i64 {
    let id = next_id(self.cards.iter().map(|c| c.id));
    let mut card = Card::new(topic_id, term, description, today);
    card.id = id;
    self.cards.push(card);
    id
  }

  /// All cards belonging to one topic, in insertion order
  pub fn cards_in_topic(&self, topic_id: i64) -> Vec<&Card> {
    self.cards.iter().filter(|c| c.topic_id == topic_id).collect()
  }

  /// All cards of every topic filed under the folder
  pub fn cards_in_folder(&self, folder_id: i64) -> Vec<&Card> {
    let topic_ids: Vec<i64> = self
      .topics
      .iter()
      .filter(|t| t.folder_id == Some(folder_id))
      .map(|t| t.id)
      .collect();
    self
      .cards
      .iter()
      .filter(|c| topic_ids.contains(&c.topic_id))
      .collect()
  }

  pub fn card(&self, card_id: i64) -> Option<&Card> {
    self.cards.iter().find(|c| c.id == card_id)
  }

  /// Mutable card lookup, used to write back updated review stats
  pub fn card_mut(&mut self, card_id: i64) -> Option<&mut Card> {
    self.cards.iter_mut().find(|c| c.id == card_id)
  }

  pub fn topic(&self, topic_id: i64) -> Option<&Topic> {
    self.topics.iter().find(|t| t.id == topic_id)
  }

  /// Topic name for display, with a placeholder for dangling ids
  pub fn topic_name(&self, topic_id: i64) -> String {
    self
      .topic(topic_id)
      .map(|t| t.name.clone())
      .unwrap_or_else(|| format!("Topic {}", topic_id))
  }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
  ids.max().unwrap_or(0) + 1
}
