//! Letter generation for new boards.

use rand::seq::SliceRandom;
use rand::Rng;

/// The sixteen dice of the original game
pub const CLASSIC_DICE: [&str; 16] = [
    "AACIOT", "ABILTY", "ABJMOQ", "ACDEMP", "ACELRS", "ADENVZ", "AHMORS", "BIFORX", "DENOSW",
    "DKNOTU", "EEFHIY", "EGKLUY", "EGINTV", "EHINPS", "ELPSTU", "GILRUW",
];

/// The sixteen dice of the revised game
pub const NEW_DICE: [&str; 16] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY", "DISTTY",
    "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNUQ", "HLNNRZ",
];

/// Which dice set to roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiceSet {
    Classic,
    New,
}

impl DiceSet {
    pub fn dice(self) -> &'static [&'static str] {
        match self {
            DiceSet::Classic => &CLASSIC_DICE,
            DiceSet::New => &NEW_DICE,
        }
    }
}

/// Shake the dice: shuffle their positions and pick a face of each.
pub fn roll_dice<R: Rng + ?Sized>(set: DiceSet, rng: &mut R) -> Vec<String> {
    let mut dice: Vec<&str> = set.dice().to_vec();
    dice.shuffle(rng);
    dice.iter()
        .filter_map(|die| die.as_bytes().choose(rng))
        .map(|&face| (face as char).to_ascii_lowercase().to_string())
        .collect()
}

/// Letters for a fully random board.
///
/// `prefix` letters come first (shuffled unless `ordered`), the rest are
/// drawn uniformly from a-z, and the result is cut to `count`.
pub fn random_letters<R: Rng + ?Sized>(
    prefix: &str,
    ordered: bool,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut letters: Vec<String> = prefix
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_lowercase().to_string())
        .collect();
    if !ordered {
        letters.shuffle(rng);
    }
    while letters.len() < count {
        letters.push((rng.gen_range(b'a'..=b'z') as char).to_string());
    }
    letters.truncate(count);
    letters
}
