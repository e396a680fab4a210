//! Game controller: the welcome flow, difficulty selection, and the menu
//! loop that drives a whole session.

use std::collections::VecDeque;
use std::io;

use rand::Rng;

use crate::constants::{
    EASY_MARKDOWN, EASY_TOUGHNESS, HARD_MARKDOWN, HARD_TOUGHNESS, NORMAL_MARKDOWN,
    NORMAL_TOUGHNESS, STARTING_GOLD, TEST_MODE_BONUS_GOLD,
};
use crate::display::{Message, MessageSink, Tone};
use crate::hunter::Hunter;
use crate::items::Item;
use crate::shop::Shop;
use crate::town::Town;

const DEATH_NARRATION: &str = "\nYou want trouble, stranger!  You got it!\n\
Oof! Umph! Ow!\n\
That'll teach you to go lookin' fer trouble in MY town! Now pay up!\n\
What? You don't have enough money to pay up...then you're going to have to pay with your life!\n\
\n\
The stranger comes up to you, weapon in hand, malice unshakable. Their hits connect to your body and you begin to feel numb all over.\n\
As if it were just a dream, you try to get back up. But the pain you feel in your bones overwhelms you.\n\
Your body collapses to the ground, as if all of your matter begins to dematerializes. You hear crazed laughter from above.\n\
It seems like the treasure cannot be hunted after all...\n\
Everything goes dark and you die.";

/// Where player commands come from. `None` means input ran dry, which the
/// loop treats the same as giving up.
pub trait CommandSource {
    fn next_command(&mut self) -> Option<String>;
}

/// Reads one line per command from stdin.
pub struct StdinSource;

impl CommandSource for StdinSource {
    fn next_command(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end().to_string()),
        }
    }
}

/// Feeds a fixed list of commands, for tests and headless runs.
pub struct ScriptedSource {
    commands: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }
}

impl CommandSource for ScriptedSource {
    fn next_command(&mut self) -> Option<String> {
        self.commands.pop_front()
    }
}

/// Session difficulty. Markdown shapes shop buybacks, toughness shapes the
/// towns rolled along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn markdown(&self) -> f64 {
        match self {
            Difficulty::Easy => EASY_MARKDOWN,
            Difficulty::Normal => NORMAL_MARKDOWN,
            Difficulty::Hard => HARD_MARKDOWN,
        }
    }

    pub fn toughness(&self) -> f64 {
        match self {
            Difficulty::Easy => EASY_TOUGHNESS,
            Difficulty::Normal => NORMAL_TOUGHNESS,
            Difficulty::Hard => HARD_TOUGHNESS,
        }
    }
}

/// Runs a whole session: welcome, the town loop, endgame narration.
pub fn play(input: &mut impl CommandSource, sink: &mut impl MessageSink, rng: &mut impl Rng) {
    let (mut hunter, difficulty) = welcome_player(input, sink);
    let mut town = found_town(&hunter, difficulty, rng);

    loop {
        if hunter.is_game_over() || hunter.is_win() {
            break;
        }
        show_menu(sink, &hunter, &town);
        let Some(line) = input.next_command() else {
            break;
        };
        let choice = line.trim().to_lowercase();
        match choice.as_str() {
            "b" | "s" => shop_counter(&choice, &mut hunter, &mut town, input, sink),
            "e" => sink.plain_line(&town.terrain.info_string()),
            "m" => {
                if town.leave_town(&mut hunter, rng) {
                    // This town is going away, so print its news ahead of time.
                    sink.line(&town.latest_news);
                    town = found_town(&hunter, difficulty, rng);
                }
            }
            "l" => town.look_for_trouble(&mut hunter, rng),
            "h" => town.treasure_hunt(&mut hunter, rng),
            "d" => town.dig_for_gold(&mut hunter, rng),
            "x" => break,
            _ => sink.plain_line("Yikes! That's an invalid option! Try again."),
        }
    }

    if hunter.is_win() {
        sink.line(&Message::toned(
            "Congratulations, you have found the last of the three treasures, you win!",
            Tone::Gold,
        ));
    } else if hunter.is_game_over() {
        sink.line(&Message::toned(DEATH_NARRATION, Tone::Bad));
    } else {
        sink.plain_line(&format!("Fare thee well, {}!", hunter.name));
    }
}

/// Greets the player, reads a name, and applies the chosen difficulty.
/// "test" and "s" are hidden modes: the first stuffs the purse and kit, the
/// second marks the hunter as the secret samurai.
fn welcome_player(input: &mut impl CommandSource, sink: &mut impl MessageSink) -> (Hunter, Difficulty) {
    sink.plain_line("Welcome to TREASURE HUNTER!");
    sink.plain_line("Going hunting for the big treasure, eh?");
    sink.emit("What's your name, Hunter? ", Tone::Plain);
    let name_line = input.next_command().unwrap_or_default();
    let mut hunter = Hunter::new(name_line.trim(), STARTING_GOLD);

    sink.emit("Easy, normal, or hard mode? (e/n/h): ", Tone::Bad);
    let mode = input.next_command().unwrap_or_default().trim().to_lowercase();
    let difficulty = match mode.as_str() {
        "h" => Difficulty::Hard,
        "e" => {
            // Easy mode doubles the starting purse.
            hunter.change_gold(hunter.gold());
            hunter.easy_mode = true;
            Difficulty::Easy
        }
        "test" => {
            hunter.change_gold(TEST_MODE_BONUS_GOLD);
            for item in [
                Item::Boat,
                Item::Machete,
                Item::Water,
                Item::Horse,
                Item::Rope,
                Item::Boots,
                Item::Shovel,
            ] {
                hunter.give_item(item);
            }
            Difficulty::Normal
        }
        "s" => {
            hunter.secret_samurai = true;
            Difficulty::Normal
        }
        _ => Difficulty::Normal,
    };
    (hunter, difficulty)
}

/// Rolls the next town along the trail and walks the hunter in.
fn found_town(hunter: &Hunter, difficulty: Difficulty, rng: &mut impl Rng) -> Town {
    let shop = Shop::new(difficulty.markdown());
    let mut town = Town::roll(shop, difficulty.toughness(), rng);
    town.hunter_arrives(hunter);
    town
}

fn show_menu(sink: &mut impl MessageSink, hunter: &Hunter, town: &Town) {
    sink.plain_line("");
    sink.line(&town.latest_news);
    sink.plain_line("***");
    sink.plain_line(&hunter.info_string());
    sink.plain_line(&town.info_string());
    sink.plain_line("(B)uy something at the shop.");
    sink.plain_line("(S)ell something at the shop.");
    sink.plain_line("(E)xplore surrounding terrain.");
    sink.plain_line("(M)ove on to a different town.");
    sink.plain_line("(L)ook for trouble!");
    sink.plain_line("(H)unt for treasure.");
    sink.plain_line("(D)ig for gold.");
    sink.plain_line("Give up the hunt and e(X)it.");
    sink.plain_line("");
    sink.emit("What's your next move? ", Tone::Plain);
}

/// The interactive exchange at the shop counter. Flow text goes straight to
/// the sink; the town's news becomes the departure line either way.
fn shop_counter(
    choice: &str,
    hunter: &mut Hunter,
    town: &mut Town,
    input: &mut impl CommandSource,
    sink: &mut impl MessageSink,
) {
    if choice == "b" {
        sink.clear();
        sink.emit("\nWelcome to the shop! We have the finest wares in town.", Tone::Plain);
        sink.emit("\nCurrently we have the following items:\n", Tone::Plain);
        sink.emit(&town.shop.stock_listing(hunter), Tone::Plain);
        sink.emit("What're you lookin' to buy? ", Tone::Plain);
        let wanted = input.next_command().unwrap_or_default();
        match Item::parse(&wanted) {
            Some(Item::Sword) if !hunter.secret_samurai => {
                sink.plain_line("We ain't got none of those.");
            }
            None => sink.plain_line("We ain't got none of those."),
            Some(item) => {
                if hunter.has_item(Item::Sword) {
                    sink.line(&Message::toned(
                        "The shopkeeper is going to hand you the item freely because of the sharpness of your steel.",
                        Tone::Bad,
                    ));
                    let result = town.shop.buy(hunter, item);
                    sink.line(&result);
                } else {
                    sink.emit("It'll cost you ", Tone::Plain);
                    sink.emit(&format!("{} gold", Shop::cost_of(item)), Tone::Gold);
                    sink.emit(", Buy? (y/n)\n", Tone::Plain);
                    let answer = input.next_command().unwrap_or_default().trim().to_lowercase();
                    if answer == "y" {
                        let result = town.shop.buy(hunter, item);
                        sink.line(&result);
                    }
                    sink.clear();
                }
            }
        }
    } else {
        sink.clear();
        sink.emit("\n", Tone::Plain);
        sink.line(&Message::toned(
            format!("You currently have the following items: {}", hunter.kit.list()),
            Tone::Name,
        ));
        sink.emit("What're you lookin' to sell? ", Tone::Plain);
        let wanted = input.next_command().unwrap_or_default();
        match Item::parse(&wanted) {
            Some(item) if town.shop.buy_back_cost(item) > 0 => {
                let price = town.shop.buy_back_cost(item);
                sink.emit(&format!("It'll get you {} gold. Sell it (y/n)? ", price), Tone::Plain);
                let answer = input.next_command().unwrap_or_default().trim().to_lowercase();
                if answer == "y" {
                    let result = town.shop.sell(hunter, item);
                    sink.line(&result);
                }
            }
            _ => sink.line(&Message::toned("We don't want none of those.", Tone::Bad)),
        }
    }
    town.latest_news = Message::plain("You left the shop");
}
