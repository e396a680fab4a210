//! Hunter state: gold, kit, collected treasures, and the flags that end a
//! game.

use crate::constants::{KIT_CAPACITY, TREASURES_TO_WIN};
use crate::items::{Item, Treasure};

/// Fixed-capacity collection of unique kit items, listed in the order they
/// were acquired.
#[derive(Debug, Clone, Default)]
pub struct Kit {
    items: Vec<Item>,
}

impl Kit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Adds an item. Refuses duplicates and refuses to grow past capacity.
    pub fn insert(&mut self, item: Item) -> bool {
        if self.contains(item) || self.items.len() >= KIT_CAPACITY {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes an item if present.
    pub fn remove(&mut self, item: Item) -> bool {
        match self.items.iter().position(|i| *i == item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        self.items.iter().copied()
    }

    /// Item names joined by single spaces, in acquisition order.
    pub fn list(&self) -> String {
        self.items
            .iter()
            .map(|i| i.name())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What happened when a treasure was handed to the hunter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreasureOutcome {
    Stored,
    Duplicate,
}

/// The player character. All gold movement goes through `change_gold` so the
/// never-negative rule holds everywhere.
#[derive(Debug, Clone)]
pub struct Hunter {
    pub name: String,
    gold: i64,
    pub kit: Kit,
    treasures: Vec<Treasure>,
    pub easy_mode: bool,
    pub secret_samurai: bool,
    game_over: bool,
    win: bool,
}

impl Hunter {
    pub fn new(name: impl Into<String>, starting_gold: i64) -> Self {
        Self {
            name: name.into(),
            gold: starting_gold,
            kit: Kit::new(),
            treasures: Vec::new(),
            easy_mode: false,
            secret_samurai: false,
            game_over: false,
            win: false,
        }
    }

    pub fn gold(&self) -> i64 {
        self.gold
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_win(&self) -> bool {
        self.win
    }

    /// Applies a gold delta. Going below zero clamps to zero and ends the
    /// game; that is the only loss condition.
    pub fn change_gold(&mut self, amount: i64) {
        self.gold += amount;
        if self.gold < 0 {
            self.gold = 0;
            self.game_over = true;
        }
    }

    /// Pays for an item and adds it to the kit. Fails without side effects
    /// if gold is short or the item is already owned.
    pub fn buy_item(&mut self, item: Item, cost: i64) -> bool {
        if self.gold < cost || self.kit.contains(item) {
            return false;
        }
        self.gold -= cost;
        self.kit.insert(item);
        true
    }

    /// Trades an owned item for gold. Fails without side effects if the item
    /// is missing or the price is not positive.
    pub fn sell_item(&mut self, item: Item, price: i64) -> bool {
        if price <= 0 || !self.kit.contains(item) {
            return false;
        }
        self.gold += price;
        self.kit.remove(item);
        true
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.kit.contains(item)
    }

    pub fn remove_item(&mut self, item: Item) {
        self.kit.remove(item);
    }

    /// Drops an item straight into the kit, no payment. Setup cheat for the
    /// hidden test difficulty.
    pub fn give_item(&mut self, item: Item) {
        self.kit.insert(item);
    }

    /// Stores a found treasure. Duplicates are refused; the win flag flips
    /// the moment the third distinct real treasure is stored. Dust never
    /// reaches this method, and would not count toward the win if it did.
    pub fn add_treasure(&mut self, treasure: Treasure) -> TreasureOutcome {
        if self.treasures.contains(&treasure) {
            return TreasureOutcome::Duplicate;
        }
        self.treasures.push(treasure);
        if self.treasures.iter().filter(|t| !t.is_dust()).count() >= TREASURES_TO_WIN {
            self.win = true;
        }
        TreasureOutcome::Stored
    }

    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    /// One or two line status summary shown at the top of the menu.
    pub fn info_string(&self) -> String {
        let mut info = format!("{} has {} gold", self.name, self.gold);
        if !self.kit.is_empty() {
            info.push_str(" and ");
            info.push_str(&self.kit.list());
        }
        if !self.treasures.is_empty() {
            info.push_str("\nand ");
            let names: Vec<_> = self.treasures.iter().map(|t| t.name()).collect();
            info.push_str(&names.join(" "));
        }
        info
    }
}
