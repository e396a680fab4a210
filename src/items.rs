//! Equipment and treasure catalogs.

use crate::constants::{TREASURE_CROWN_BOUND, TREASURE_GEM_BOUND, TREASURE_TROPHY_BOUND};
use rand::Rng;

/// Equipment the shop sells and the hunter carries in the kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    Water,
    Rope,
    Machete,
    Horse,
    Boat,
    Boots,
    Shovel,
    Sword,
}

impl Item {
    /// Every item, in the order the shop lists them.
    pub const ALL: [Item; 8] = [
        Item::Water,
        Item::Rope,
        Item::Machete,
        Item::Horse,
        Item::Boat,
        Item::Boots,
        Item::Shovel,
        Item::Sword,
    ];

    /// Lowercase display name, which is also what the player types at the
    /// shop counter.
    pub fn name(&self) -> &'static str {
        match self {
            Item::Water => "water",
            Item::Rope => "rope",
            Item::Machete => "machete",
            Item::Horse => "horse",
            Item::Boat => "boat",
            Item::Boots => "boots",
            Item::Shovel => "shovel",
            Item::Sword => "sword",
        }
    }

    /// Capitalized name for the shop's price list.
    pub fn listing_name(&self) -> &'static str {
        match self {
            Item::Water => "Water",
            Item::Rope => "Rope",
            Item::Machete => "Machete",
            Item::Horse => "Horse",
            Item::Boat => "Boat",
            Item::Boots => "Boots",
            Item::Shovel => "Shovel",
            Item::Sword => "Sword",
        }
    }

    /// Parses typed input into an item. Case and surrounding whitespace are
    /// ignored; anything unrecognized is None.
    pub fn parse(input: &str) -> Option<Item> {
        let wanted = input.trim();
        Item::ALL
            .iter()
            .copied()
            .find(|item| item.name().eq_ignore_ascii_case(wanted))
    }
}

/// What a treasure hunt can turn up. Dust is the empty-handed result: it is
/// announced but never stored and never counts toward the win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
    Dust,
}

impl Treasure {
    pub fn name(&self) -> &'static str {
        match self {
            Treasure::Crown => "crown",
            Treasure::Trophy => "trophy",
            Treasure::Gem => "gem",
            Treasure::Dust => "dust",
        }
    }

    pub fn is_dust(&self) -> bool {
        matches!(self, Treasure::Dust)
    }

    /// Rolls the treasure buried in a freshly founded town: 20% each for
    /// crown, trophy, and gem, dust the remaining 40%.
    pub fn roll(rng: &mut impl Rng) -> Treasure {
        let roll: f64 = rng.gen();
        if roll < TREASURE_CROWN_BOUND {
            Treasure::Crown
        } else if roll < TREASURE_TROPHY_BOUND {
            Treasure::Trophy
        } else if roll < TREASURE_GEM_BOUND {
            Treasure::Gem
        } else {
            Treasure::Dust
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_parse_accepts_every_item_name() {
        for item in Item::ALL {
            assert_eq!(
                Item::parse(item.name()),
                Some(item),
                "'{}' should parse back to its item",
                item.name()
            );
        }
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(Item::parse("  MACHETE "), Some(Item::Machete));
        assert_eq!(Item::parse("Boots"), Some(Item::Boots));
    }

    #[test]
    fn test_parse_rejects_unknown_items() {
        assert_eq!(Item::parse("lantern"), None);
        assert_eq!(Item::parse(""), None);
        assert_eq!(Item::parse("wat er"), None);
    }

    #[test]
    fn test_only_dust_is_dust() {
        assert!(Treasure::Dust.is_dust());
        assert!(!Treasure::Crown.is_dust());
        assert!(!Treasure::Trophy.is_dust());
        assert!(!Treasure::Gem.is_dust());
    }

    #[test]
    fn test_treasure_roll_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let trials = 10_000;
        let mut dust = 0;
        let mut crown = 0;
        for _ in 0..trials {
            match Treasure::roll(&mut rng) {
                Treasure::Dust => dust += 1,
                Treasure::Crown => crown += 1,
                _ => {}
            }
        }

        let dust_rate = dust as f64 / trials as f64;
        let crown_rate = crown as f64 / trials as f64;
        assert!(
            (0.35..0.45).contains(&dust_rate),
            "dust rate should be near 40%, got {}",
            dust_rate
        );
        assert!(
            (0.15..0.25).contains(&crown_rate),
            "crown rate should be near 20%, got {}",
            crown_rate
        );
    }
}
