//! Per-letter feedback
//!
//! A `Tile` is one letter-position of a guess; a `Guess` is the five tiles the
//! game reported for one submitted word.

use super::word::{WORD_LENGTH, Word};
use crate::error::WordleError;
use std::fmt;
use std::str::FromStr;

/// Correctness class of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileState {
    /// Letter sits at this position in the target
    Correct,
    /// Letter occurs elsewhere in the target
    Present,
    /// Letter does not occur in the target (beyond the occurrences already matched)
    Absent,
}

impl TileState {
    /// Parse a single pattern symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/'.'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Compact ASCII symbol, the inverse of [`TileState::from_symbol`]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Parses the tile names used by the game page (`data-state` attribute)
impl FromStr for TileState {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "correct" => Ok(Self::Correct),
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            other => Err(WordleError::UnknownTileState(other.to_string())),
        }
    }
}

impl fmt::Display for TileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    position: u8,
    letter: u8,
    state: TileState,
}

impl Tile {
    /// Create a tile at a 1-based `position`
    ///
    /// # Errors
    /// Returns `WordleError::InvalidPosition` outside 1..=5 and
    /// `WordleError::InvalidLetter` for anything but an ASCII letter.
    pub fn new(position: u8, letter: char, state: TileState) -> Result<Self, WordleError> {
        if !(1..=WORD_LENGTH as u8).contains(&position) {
            return Err(WordleError::InvalidPosition(position));
        }
        if !letter.is_ascii_alphabetic() {
            return Err(WordleError::InvalidLetter(letter));
        }

        Ok(Self {
            position,
            letter: letter.to_ascii_lowercase() as u8,
            state,
        })
    }

    /// 1-based position (1..=5)
    #[inline]
    #[must_use]
    pub const fn position(&self) -> u8 {
        self.position
    }

    /// 0-based position, for indexing into words
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.position as usize - 1
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> TileState {
        self.state
    }
}

/// The five tiles reported for one submitted word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    word: Word,
    tiles: [Tile; WORD_LENGTH],
}

impl Guess {
    /// Assemble a guess from tiles as read off the board
    ///
    /// # Errors
    /// Returns `WordleError::TileCount` unless there are exactly five tiles and
    /// `WordleError::TileOrder` unless they cover positions 1..=5 in order.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self, WordleError> {
        let tiles: [Tile; WORD_LENGTH] = tiles
            .try_into()
            .map_err(|rest: Vec<Tile>| WordleError::TileCount(rest.len()))?;

        for (i, tile) in tiles.iter().enumerate() {
            if tile.index() != i {
                return Err(WordleError::TileOrder {
                    expected: i as u8 + 1,
                    found: tile.position,
                });
            }
        }

        let text: String = tiles.iter().map(|t| char::from(t.letter)).collect();
        let word = Word::new(text)?;

        Ok(Self { word, tiles })
    }

    /// Build a guess from a word and a pattern string like `"-YG--"` or `"⬜🟨🟩⬜⬜"`
    ///
    /// # Errors
    /// Returns `WordleError::InvalidPattern` if the pattern is not five valid symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_alarm::core::{Guess, TileState, Word};
    ///
    /// let guess = Guess::from_pattern(&Word::new("trace").unwrap(), "-YGG-").unwrap();
    /// assert_eq!(guess.tiles()[1].state(), TileState::Present);
    /// assert!(!guess.is_solved());
    /// ```
    pub fn from_pattern(word: &Word, pattern: &str) -> Result<Self, WordleError> {
        let states: Vec<TileState> = pattern
            .trim()
            .chars()
            .map(TileState::from_symbol)
            .collect::<Option<_>>()
            .ok_or_else(|| WordleError::InvalidPattern(pattern.to_string()))?;

        if states.len() != WORD_LENGTH {
            return Err(WordleError::InvalidPattern(pattern.to_string()));
        }

        let mut states_arr = [TileState::Absent; WORD_LENGTH];
        states_arr.copy_from_slice(&states);
        Ok(Self::from_states(word, states_arr))
    }

    /// Pair a validated word with five states; positions are implied
    #[must_use]
    pub(crate) fn from_states(word: &Word, states: [TileState; WORD_LENGTH]) -> Self {
        let tiles = std::array::from_fn(|i| Tile {
            position: i as u8 + 1,
            letter: word.char_at(i),
            state: states[i],
        });

        Self {
            word: word.clone(),
            tiles,
        }
    }

    /// The word these tiles spell
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.tiles
    }

    /// All five tiles correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(|t| t.state == TileState::Correct)
    }

    /// Pattern in compact ASCII form, e.g. `"-YGG-"`
    #[must_use]
    pub fn pattern(&self) -> String {
        self.tiles.iter().map(|t| t.state.symbol()).collect()
    }

    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.tiles.iter().map(|t| t.state.emoji()).collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.pattern())
    }
}

/// Parses `WORD:PATTERN` (also `WORD=PATTERN`), the form used on the command line
impl FromStr for Guess {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, pattern) = s
            .split_once([':', '='])
            .ok_or_else(|| WordleError::InvalidPattern(s.to_string()))?;
        Self::from_pattern(&Word::new(word)?, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn tile_rejects_out_of_range_positions() {
        assert_eq!(
            Tile::new(0, 'a', TileState::Absent),
            Err(WordleError::InvalidPosition(0))
        );
        assert_eq!(
            Tile::new(6, 'a', TileState::Absent),
            Err(WordleError::InvalidPosition(6))
        );
        assert!(Tile::new(5, 'a', TileState::Absent).is_ok());
    }

    #[test]
    fn tile_normalizes_letter() {
        let tile = Tile::new(1, 'T', TileState::Correct).unwrap();
        assert_eq!(tile.letter(), b't');
        assert_eq!(tile.index(), 0);
        assert_eq!(
            Tile::new(1, '3', TileState::Correct),
            Err(WordleError::InvalidLetter('3'))
        );
    }

    #[test]
    fn tile_state_from_page_names() {
        assert_eq!("correct".parse::<TileState>(), Ok(TileState::Correct));
        assert_eq!("Present".parse::<TileState>(), Ok(TileState::Present));
        assert_eq!("absent".parse::<TileState>(), Ok(TileState::Absent));
        assert!("tbd".parse::<TileState>().is_err());
    }

    #[test]
    fn guess_from_tiles_in_order() {
        let tiles = vec![
            Tile::new(1, 't', TileState::Absent).unwrap(),
            Tile::new(2, 'r', TileState::Present).unwrap(),
            Tile::new(3, 'a', TileState::Correct).unwrap(),
            Tile::new(4, 'c', TileState::Correct).unwrap(),
            Tile::new(5, 'e', TileState::Absent).unwrap(),
        ];
        let guess = Guess::from_tiles(tiles).unwrap();
        assert_eq!(guess.word().text(), "trace");
        assert_eq!(guess.pattern(), "-YGG-");
    }

    #[test]
    fn guess_from_tiles_rejects_wrong_count_and_order() {
        let four: Vec<Tile> = (1..=4)
            .map(|p| Tile::new(p, 'a', TileState::Absent).unwrap())
            .collect();
        assert_eq!(Guess::from_tiles(four), Err(WordleError::TileCount(4)));

        let shuffled: Vec<Tile> = [2, 1, 3, 4, 5]
            .into_iter()
            .map(|p| Tile::new(p, 'a', TileState::Absent).unwrap())
            .collect();
        assert_eq!(
            Guess::from_tiles(shuffled),
            Err(WordleError::TileOrder {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn guess_from_pattern_accepts_symbols_and_emoji() {
        let ascii = Guess::from_pattern(&word("crane"), "GY-g_").unwrap();
        let emoji = Guess::from_pattern(&word("crane"), "🟩🟨⬜🟩⬜").unwrap();
        assert_eq!(ascii, emoji);
        assert_eq!(ascii.to_emoji(), "🟩🟨⬜🟩⬜");
    }

    #[test]
    fn guess_from_pattern_invalid() {
        let w = word("crane");
        assert!(Guess::from_pattern(&w, "GYG").is_err());
        assert!(Guess::from_pattern(&w, "GYG--Y").is_err());
        assert!(Guess::from_pattern(&w, "GXG--").is_err());
    }

    #[test]
    fn guess_parses_cli_form() {
        let guess: Guess = "Trace:-YGG-".parse().unwrap();
        assert_eq!(guess.to_string(), "trace -YGG-");
        assert!("trace".parse::<Guess>().is_err());
        assert!(matches!(
            "trac:GGGGG".parse::<Guess>(),
            Err(WordleError::InvalidWord(_))
        ));
    }

    #[test]
    fn guess_solved_only_when_all_correct() {
        assert!(Guess::from_pattern(&word("crate"), "GGGGG").unwrap().is_solved());
        assert!(!Guess::from_pattern(&word("crate"), "GGGGY").unwrap().is_solved());
    }
}
