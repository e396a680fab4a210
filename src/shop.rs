//! The shop: price table, markdown buyback, and counter transactions.

use crate::display::{Message, Tone};
use crate::hunter::Hunter;
use crate::items::Item;

/// A town's shop. Every shop carries the same stock at the same sticker
/// prices; only the buyback markdown varies with difficulty.
#[derive(Debug, Clone)]
pub struct Shop {
    pub markdown: f64,
}

impl Shop {
    pub fn new(markdown: f64) -> Self {
        Self { markdown }
    }

    /// Sticker price. The sword costs nothing; it is the secret samurai's
    /// freebie and is never offered to anyone else.
    pub fn cost_of(item: Item) -> i64 {
        match item {
            Item::Water => 2,
            Item::Rope => 4,
            Item::Machete => 6,
            Item::Horse => 12,
            Item::Boat => 20,
            Item::Boots => 8,
            Item::Shovel => 8,
            Item::Sword => 0,
        }
    }

    /// What the shop pays when buying an item back: sticker price times the
    /// markdown, rounded down.
    pub fn buy_back_cost(&self, item: Item) -> i64 {
        (Self::cost_of(item) as f64 * self.markdown) as i64
    }

    /// Price in the direction of the trade.
    pub fn market_price(&self, item: Item, buying: bool) -> i64 {
        if buying {
            Self::cost_of(item)
        } else {
            self.buy_back_cost(item)
        }
    }

    /// The stock list read out at the counter. The sword line only appears
    /// for a secret samurai.
    pub fn stock_listing(&self, customer: &Hunter) -> String {
        let mut listing = String::new();
        for item in Item::ALL {
            if item == Item::Sword && !customer.secret_samurai {
                continue;
            }
            listing.push_str(&format!(
                "{}: {} gold\n",
                item.listing_name(),
                Self::cost_of(item)
            ));
        }
        listing
    }

    /// Completes a purchase and narrates the result. A customer who already
    /// carries a sword intimidates the shopkeeper and pays nothing.
    pub fn buy(&self, customer: &mut Hunter, item: Item) -> Message {
        if customer.has_item(Item::Sword) {
            if customer.buy_item(item, 0) {
                Message::plain(format!("You take the {}.", item.name()))
            } else {
                Message::plain(
                    "You already own one of those, so you dispose of it in the nearest waste receptacle.",
                )
            }
        } else if customer.buy_item(item, Self::cost_of(item)) {
            Message::plain("Ye' got yerself a ")
                .with(item.name(), Tone::Name)
                .with(". Come again soon.", Tone::Plain)
        } else {
            Message::plain("Hmm, either you don't have enough gold or you've already got one of those!")
        }
    }

    /// Completes a buyback and narrates the result.
    pub fn sell(&self, customer: &mut Hunter, item: Item) -> Message {
        if customer.sell_item(item, self.buy_back_cost(item)) {
            Message::plain("Pleasure doin' business with you.")
        } else {
            Message::toned("Stop stringin' me along!", Tone::Bad)
        }
    }
}
