//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index of one of the two players: `PlayerId(0)` is the first player
//! passed to `new_game`, `PlayerId(1)` the second.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by a two-element array, indexed by `PlayerId`.
//!
//! ## Player and Bank
//!
//! A `Player` is a name and a marble color, fixed for the whole game. A
//! `Bank` counts the marbles that player has captured.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::cell::{Cell, MarbleColor};
use super::error::StateError;

/// Seat index of a player (0 or 1).
///
/// Serialized as the bare index; out-of-range indices fail to deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(pub(crate) u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "Kuba is played by exactly 2 players");
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both player IDs in seat order.
    ///
    /// ```
    /// use kuba_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// assert_eq!(players[0].opponent(), players[1]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..2u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = StateError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if id < 2 {
            Ok(Self(id))
        } else {
            Err(StateError::Seat(id))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(player: PlayerId) -> Self {
        player.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use kuba_engine::core::{PlayerId, PlayerMap};
///
/// let mut captured: PlayerMap<u8> = PlayerMap::with_value(0);
/// captured[PlayerId::new(1)] += 2;
///
/// assert_eq!(captured[PlayerId::new(0)], 0);
/// assert_eq!(captured[PlayerId::new(1)], 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId(0)), factory(PlayerId(1))],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Find the first player whose data matches a predicate.
    pub fn position(&self, predicate: impl Fn(&T) -> bool) -> Option<PlayerId> {
        self.data
            .iter()
            .position(predicate)
            .map(|i| PlayerId(i as u8))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seated player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: MarbleColor,
}

impl Player {
    pub fn new(name: impl Into<String>, color: MarbleColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> MarbleColor {
        self.color
    }
}

/// Marbles captured by one player.
///
/// Both counters only ever grow. A player can never capture their own color,
/// so there is no counter for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bank {
    /// Neutral Red marbles captured.
    pub red: u8,

    /// Opponent-color marbles captured.
    pub opponent: u8,
}

impl Bank {
    /// Credit a captured marble to a player of color `owner`.
    ///
    /// Returns false, leaving the bank untouched, for cells that cannot be
    /// captured by that player (empty squares and the player's own color).
    pub fn record(&mut self, owner: MarbleColor, captured: Cell) -> bool {
        match captured {
            Cell::Red => self.red += 1,
            c if c == owner.opponent().cell() => self.opponent += 1,
            _ => return false,
        }
        true
    }

    /// Total marbles captured.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.red + self.opponent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(p0.opponent(), p1);
        assert_eq!(p1.opponent(), p0);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    #[should_panic(expected = "Kuba is played by exactly 2 players")]
    fn test_player_id_out_of_range() {
        let _ = PlayerId::new(2);
    }

    #[test]
    fn test_player_id_from_raw_index() {
        assert_eq!(PlayerId::try_from(1), Ok(PlayerId::new(1)));
        assert_eq!(PlayerId::try_from(2), Err(StateError::Seat(2)));
        assert_eq!(u8::from(PlayerId::new(1)), 1);
    }

    #[test]
    fn test_player_id_deserialize_checks_range() {
        assert_eq!(serde_json::to_string(&PlayerId::new(1)).unwrap(), "1");
        assert_eq!(serde_json::from_str::<PlayerId>("0").unwrap(), PlayerId::new(0));
        assert!(serde_json::from_str::<PlayerId>("2").is_err());
        assert!(serde_json::from_str::<PlayerId>("255").is_err());
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
    }

    #[test]
    fn test_player_map_iter_and_position() {
        let map = PlayerMap::new(|p| Player::new(format!("P{}", p.0), MarbleColor::ALL[p.index()]));

        let names: Vec<_> = map.iter().map(|(_, p)| p.name().to_string()).collect();
        assert_eq!(names, vec!["P0", "P1"]);

        assert_eq!(map.position(|p| p.name() == "P1"), Some(PlayerId::new(1)));
        assert_eq!(map.position(|p| p.name() == "nobody"), None);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<Bank> = PlayerMap::new(|p| Bank { red: p.0, opponent: 1 });
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<Bank> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_bank_record() {
        let mut bank = Bank::default();

        assert!(bank.record(MarbleColor::White, Cell::Red));
        assert!(bank.record(MarbleColor::White, Cell::Black));
        assert!(!bank.record(MarbleColor::White, Cell::White));
        assert!(!bank.record(MarbleColor::White, Cell::Empty));

        assert_eq!(bank, Bank { red: 1, opponent: 1 });
        assert_eq!(bank.total(), 2);
    }
}
