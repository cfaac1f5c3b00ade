//! Memory card use-cases.

use crate::model::entries::MemoryCard;
use crate::model::record::non_empty;
use crate::repo::collection::Collection;
use crate::service::confirm::Confirmation;
use crate::service::{short_date, ServiceResult};
use crate::store::KvStore;
use chrono::Local;

pub struct CardService<S: KvStore, C: Confirmation> {
    cards: Collection<MemoryCard, S>,
    confirm: C,
}

impl<S: KvStore, C: Confirmation> CardService<S, C> {
    pub fn new(cards: Collection<MemoryCard, S>, confirm: C) -> Self {
        Self { cards, confirm }
    }

    /// Creates a card authored by `created_by` (see
    /// [`crate::model::entries::card_author`]) and inserts it at the front.
    pub fn add(&self, kind: &str, message: &str, created_by: &str) -> ServiceResult<MemoryCard> {
        let kind = non_empty("kind", kind)?;
        let message = non_empty("message", message)?;

        let card = MemoryCard::new(kind, message, short_date(&Local::now()), created_by);
        self.cards.insert_front(card.clone())?;
        Ok(card)
    }

    pub fn list(&self) -> Vec<MemoryCard> {
        self.cards.load()
    }

    /// Deletes a card after confirmation; `false` on decline or unknown id.
    pub fn delete(&self, id: &str) -> ServiceResult<bool> {
        if !self
            .confirm
            .confirm("Delete card", "Do you want to delete this card?")
        {
            return Ok(false);
        }
        Ok(self.cards.delete_by_id(id)?)
    }
}
