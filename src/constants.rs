// Hunter setup constants
pub const STARTING_GOLD: i64 = 20;
pub const KIT_CAPACITY: usize = 8;
pub const TREASURES_TO_WIN: usize = 3;

// Difficulty tables: markdown is the shop's buyback fraction, toughness the
// chance a rolled town is rough.
pub const NORMAL_MARKDOWN: f64 = 0.5;
pub const NORMAL_TOUGHNESS: f64 = 0.4;
pub const HARD_MARKDOWN: f64 = 0.25;
pub const HARD_TOUGHNESS: f64 = 0.75;
pub const EASY_MARKDOWN: f64 = 1.0;
pub const EASY_TOUGHNESS: f64 = 0.25;

// Town event constants
pub const TOUGH_TROUBLE_CHANCE: f64 = 0.66; // win chance is the complement
pub const MILD_TROUBLE_CHANCE: f64 = 0.33;
pub const ITEM_BREAK_CHANCE: f64 = 0.5;
pub const TOUGH_TOWN_DROP_CHANCE: f64 = 0.7;
pub const DIG_SUCCESS_CHANCE: f64 = 0.5;
pub const BRAWL_GOLD_MAX: i64 = 10;
pub const DIG_GOLD_MAX: i64 = 20;

// Cumulative treasure roll bounds: crown below .2, trophy below .4,
// gem below .6, dust otherwise.
pub const TREASURE_CROWN_BOUND: f64 = 0.2;
pub const TREASURE_TROPHY_BOUND: f64 = 0.4;
pub const TREASURE_GEM_BOUND: f64 = 0.6;

// Hidden "test" difficulty cheat
pub const TEST_MODE_BONUS_GOLD: i64 = 80;
