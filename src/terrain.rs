//! Terrain surrounding a town and the equipment needed to cross it.

use crate::hunter::Hunter;
use crate::items::Item;
use rand::Rng;

/// The land around a town. Each kind gates departure on one kit item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
    Marsh,
}

impl Terrain {
    pub const ALL: [Terrain; 6] = [
        Terrain::Mountains,
        Terrain::Ocean,
        Terrain::Plains,
        Terrain::Desert,
        Terrain::Jungle,
        Terrain::Marsh,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Terrain::Mountains => "Mountains",
            Terrain::Ocean => "Ocean",
            Terrain::Plains => "Plains",
            Terrain::Desert => "Desert",
            Terrain::Jungle => "Jungle",
            Terrain::Marsh => "Marsh",
        }
    }

    /// The kit item required to cross this terrain.
    pub fn needed_item(&self) -> Item {
        match self {
            Terrain::Mountains => Item::Rope,
            Terrain::Ocean => Item::Boat,
            Terrain::Plains => Item::Horse,
            Terrain::Desert => Item::Water,
            Terrain::Jungle => Item::Machete,
            Terrain::Marsh => Item::Boots,
        }
    }

    pub fn can_cross(&self, hunter: &Hunter) -> bool {
        hunter.has_item(self.needed_item())
    }

    /// Picks the terrain for a new town, each kind equally likely.
    pub fn roll(rng: &mut impl Rng) -> Terrain {
        Terrain::ALL[rng.gen_range(0..Terrain::ALL.len())]
    }

    pub fn info_string(&self) -> String {
        format!(
            "The surrounding terrain is {}. You'll need a {} to cross it.",
            self.name(),
            self.needed_item().name()
        )
    }
}
