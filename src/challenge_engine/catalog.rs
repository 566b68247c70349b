//! The fixed 32-card catalog: 4 suits × ranks 1..=8, suit-major.

use crate::challenge_engine::{
    config::AssetConfig,
    models::{Card, Rank, Suit},
};

pub const CARDS_PER_SUIT: usize = 8;
pub const CATALOG_SIZE: usize = Suit::ALL.len() * CARDS_PER_SUIT;

/// Card at catalog position `index`: suit `index / 8`, rank `index % 8 + 1`.
pub fn card_at(index: usize) -> Option<Card> {
    let suit = Suit::from_index(index / CARDS_PER_SUIT)?;
    let rank = Rank::new((index % CARDS_PER_SUIT) as u8 + Rank::MIN).ok()?;
    Some(Card::new(rank, suit))
}

/// All 32 cards in catalog order.
pub fn all_cards() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| {
            (Rank::MIN..=Rank::MAX)
                .filter_map(move |r| Rank::new(r).ok().map(|rank| Card::new(rank, suit)))
        })
        .collect()
}

/// Asset path under the default catalog root.
pub fn asset_ref(card: &Card) -> String {
    AssetConfig::default().asset_ref(card)
}
