//! One town visit: arrival, the terrain gate, brawls, treasure hunting, and
//! digging for gold.

use crate::constants::{
    BRAWL_GOLD_MAX, DIG_GOLD_MAX, DIG_SUCCESS_CHANCE, ITEM_BREAK_CHANCE, MILD_TROUBLE_CHANCE,
    TOUGH_TOWN_DROP_CHANCE, TOUGH_TROUBLE_CHANCE,
};
use crate::display::{Message, Tone};
use crate::hunter::{Hunter, TreasureOutcome};
use crate::items::{Item, Treasure};
use crate::shop::Shop;
use crate::terrain::Terrain;
use rand::Rng;

/// A town and everything that can happen during one stay. Operations write
/// their narration into `latest_news`, which the menu shows at the top of
/// the next turn.
#[derive(Debug, Clone)]
pub struct Town {
    pub shop: Shop,
    pub terrain: Terrain,
    pub treasure: Treasure,
    pub tough: bool,
    pub searched: bool,
    pub dug: bool,
    pub latest_news: Message,
}

impl Town {
    /// Founds a new town: terrain, buried treasure, and mood are all rolled.
    /// Higher toughness makes a rough town more likely.
    pub fn roll(shop: Shop, toughness: f64, rng: &mut impl Rng) -> Self {
        Self {
            shop,
            terrain: Terrain::roll(rng),
            treasure: Treasure::roll(rng),
            tough: rng.gen::<f64>() < toughness,
            searched: false,
            dug: false,
            latest_news: Message::new(),
        }
    }

    /// Greets the arriving hunter and tips them off about the town's mood.
    pub fn hunter_arrives(&mut self, hunter: &Hunter) {
        let mut news = Message::plain("Welcome to town, ")
            .with(hunter.name.as_str(), Tone::Name)
            .with(".", Tone::Plain);
        if self.tough {
            news.push("\nIt's pretty rough around here, so watch yourself.", Tone::Bad);
        } else {
            news.push(
                "\nWe're just a sleepy little town with mild mannered folk.",
                Tone::Good,
            );
        }
        self.latest_news = news;
    }

    /// Tries to leave town. Departure needs the terrain's item, and the item
    /// can break on the way out; easy mode spares it.
    pub fn leave_town(&mut self, hunter: &mut Hunter, rng: &mut impl Rng) -> bool {
        let needed = self.terrain.needed_item();
        if !self.terrain.can_cross(hunter) {
            self.latest_news = Message::plain(format!(
                "You can't leave town, {}. You don't have a ",
                hunter.name
            ))
            .with(needed.name(), Tone::Name)
            .with(".", Tone::Plain);
            return false;
        }

        let mut news = Message::plain(format!(
            "You used your {} to cross the {}.",
            needed.name(),
            self.terrain.name()
        ));
        if item_breaks(hunter, rng) {
            hunter.remove_item(needed);
            news.push(
                format!("\nUnfortunately, you lost your {}.", needed.name()),
                Tone::Plain,
            );
        }
        self.latest_news = news;
        true
    }

    /// Picks a fight if the town is in the mood. Rough towns offer trouble
    /// more often and win the brawl more often too; a sword settles things
    /// without a punch thrown.
    pub fn look_for_trouble(&mut self, hunter: &mut Hunter, rng: &mut impl Rng) {
        let trouble_chance = if self.tough {
            TOUGH_TROUBLE_CHANCE
        } else {
            MILD_TROUBLE_CHANCE
        };
        if rng.gen::<f64>() >= trouble_chance {
            self.latest_news = Message::toned("You couldn't find any trouble", Tone::Info);
            return;
        }

        let stakes = rng.gen_range(1..=BRAWL_GOLD_MAX);
        if hunter.has_item(Item::Sword) {
            let mut news = Message::plain(
                "That's a mighty fine sword there, just take some gold; I'm not in the mood for a brawl.",
            );
            push_brawl_win(&mut news, stakes);
            hunter.change_gold(stakes);
            self.latest_news = news;
            return;
        }

        let mut news = Message::toned(
            "You want trouble, stranger!  You got it!\nOof! Umph! Ow!\n",
            Tone::Bad,
        );
        if rng.gen::<f64>() >= trouble_chance {
            news.push(
                "Okay, stranger! You proved yer mettle. Here, take my gold.",
                Tone::Bad,
            );
            push_brawl_win(&mut news, stakes);
            hunter.change_gold(stakes);
        } else {
            news.push(
                "That'll teach you to go lookin' fer trouble in MY town! Now pay up!",
                Tone::Bad,
            );
            news.push("\nYou lost the brawl and pay ", Tone::Bad);
            news.push(stakes.to_string(), Tone::Gold);
            news.push(" gold.", Tone::Bad);
            hunter.change_gold(-stakes);
        }
        self.latest_news = news;
    }

    /// Searches the town for its buried treasure. Each town gives up its
    /// secret once; in a rough town the find is usually snatched away before
    /// it can be pocketed.
    pub fn treasure_hunt(&mut self, hunter: &mut Hunter, rng: &mut impl Rng) {
        if self.searched {
            self.latest_news = Message::plain("You have already searched this town.");
            return;
        }
        self.searched = true;

        let mut news = Message::plain("You found a ").with(self.treasure.name(), Tone::Gold);
        if !self.treasure.is_dust() {
            if self.tough && rng.gen::<f64>() < TOUGH_TOWN_DROP_CHANCE {
                news.push(
                    "\nBut you drop it in your hurry to get away, and it's lost in this rough town.",
                    Tone::Bad,
                );
            } else if hunter.add_treasure(self.treasure) == TreasureOutcome::Duplicate {
                news.push("\nYou already have a ", Tone::Plain);
                news.push(self.treasure.name(), Tone::Gold);
                news.push(", so you put it back.", Tone::Plain);
            }
        }
        self.latest_news = news;
    }

    /// Digs for loose gold. Needs a shovel; each town allows one real dig,
    /// and a shovelless attempt does not use it up.
    pub fn dig_for_gold(&mut self, hunter: &mut Hunter, rng: &mut impl Rng) {
        if self.dug {
            self.latest_news = Message::plain("You already dug for gold in this town.");
            return;
        }
        if !hunter.has_item(Item::Shovel) {
            self.latest_news = Message::plain("You can't dig for gold without a shovel");
            return;
        }

        self.dug = true;
        if rng.gen::<f64>() < DIG_SUCCESS_CHANCE {
            let gold = rng.gen_range(1..=DIG_GOLD_MAX);
            hunter.change_gold(gold);
            self.latest_news = Message::plain("You dug up ")
                .with(gold.to_string(), Tone::Gold)
                .with(" gold!", Tone::Plain);
        } else {
            self.latest_news = Message::plain("You dug but only found dirt");
        }
    }

    pub fn info_string(&self) -> String {
        format!(
            "This nice little town is surrounded by {}.",
            self.terrain.name()
        )
    }
}

fn item_breaks(hunter: &Hunter, rng: &mut impl Rng) -> bool {
    if hunter.easy_mode {
        return false;
    }
    rng.gen::<f64>() < ITEM_BREAK_CHANCE
}

fn push_brawl_win(news: &mut Message, stakes: i64) {
    news.push("\nYou won the brawl and receive ", Tone::Good);
    news.push(stakes.to_string(), Tone::Gold);
    news.push(" gold.", Tone::Good);
}
