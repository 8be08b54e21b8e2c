pub mod card;
pub mod deck;

pub use card::{Card, ReviewStats};
pub use deck::{Deck, Folder, Topic};
