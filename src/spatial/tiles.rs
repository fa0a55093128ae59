//! Tile vocabulary for generated levels
//!
//! Defines the closed set of tile kinds the generator writes, together with
//! the stable integer codes consumed by the tilemap renderer. Door tiles
//! carry an orientation and a style; the renderer switches on the flat code.

/// Door orientation, named for the pair of walled neighbors
///
/// An up-down door interrupts a vertical wall run and joins a horizontal
/// corridor; a left-right door interrupts a horizontal wall run and joins a
/// vertical corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Walls above and below, open corridor to the left and right
    UpDown,
    /// Walls to the left and right, open corridor above and below
    LeftRight,
}

/// Visual style of a door tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoorStyle {
    /// Unadorned wooden door
    Plain,
    /// Arched stone frame
    Arched,
    /// Iron-barred gate
    Barred,
}

/// Collectible item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Currency pickup
    Coin,
    /// Opens one door
    Key,
    /// Consumable pickup
    Potion,
}

/// Every door style available to a placement pass, in code order
pub const DOOR_STYLES: [DoorStyle; 3] = [DoorStyle::Plain, DoorStyle::Arched, DoorStyle::Barred];

/// Every item kind available to a placement pass, in code order
pub const ITEM_KINDS: [ItemKind; 3] = [ItemKind::Coin, ItemKind::Key, ItemKind::Potion];

/// A single cell of a generated level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileType {
    /// Walkable floor
    #[default]
    Clear,
    /// Impassable wall
    Wall,
    /// Gated passage embedded in a wall run
    Door(Orientation, DoorStyle),
    /// Collectible resting on a floor tile
    Item(ItemKind),
}

impl TileType {
    /// Stable integer code for the tilemap renderer
    ///
    /// The mapping is part of the interop contract with the rendering layer
    /// and must not change between releases.
    pub const fn code(self) -> u8 {
        match self {
            Self::Clear => 0,
            Self::Wall => 1,
            Self::Door(Orientation::UpDown, DoorStyle::Plain) => 2,
            Self::Door(Orientation::UpDown, DoorStyle::Arched) => 3,
            Self::Door(Orientation::UpDown, DoorStyle::Barred) => 4,
            Self::Door(Orientation::LeftRight, DoorStyle::Plain) => 5,
            Self::Door(Orientation::LeftRight, DoorStyle::Arched) => 6,
            Self::Door(Orientation::LeftRight, DoorStyle::Barred) => 7,
            Self::Item(ItemKind::Coin) => 10,
            Self::Item(ItemKind::Key) => 11,
            Self::Item(ItemKind::Potion) => 12,
        }
    }

    /// Decode a renderer tile code
    ///
    /// Returns `None` for codes outside the vocabulary.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Clear),
            1 => Some(Self::Wall),
            2 => Some(Self::Door(Orientation::UpDown, DoorStyle::Plain)),
            3 => Some(Self::Door(Orientation::UpDown, DoorStyle::Arched)),
            4 => Some(Self::Door(Orientation::UpDown, DoorStyle::Barred)),
            5 => Some(Self::Door(Orientation::LeftRight, DoorStyle::Plain)),
            6 => Some(Self::Door(Orientation::LeftRight, DoorStyle::Arched)),
            7 => Some(Self::Door(Orientation::LeftRight, DoorStyle::Barred)),
            10 => Some(Self::Item(ItemKind::Coin)),
            11 => Some(Self::Item(ItemKind::Key)),
            12 => Some(Self::Item(ItemKind::Potion)),
            _ => None,
        }
    }

    /// Whether an actor can walk through this tile
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Whether this tile is a door of either orientation
    pub const fn is_door(self) -> bool {
        matches!(self, Self::Door(..))
    }

    /// Single-character rendering for terminal previews
    pub const fn glyph(self) -> char {
        match self {
            Self::Clear => '.',
            Self::Wall => '#',
            Self::Door(Orientation::UpDown, _) => '-',
            Self::Door(Orientation::LeftRight, _) => '|',
            Self::Item(_) => '*',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DOOR_STYLES, DoorStyle, ITEM_KINDS, ItemKind, Orientation, TileType};

    // The renderer contract: these exact integers, stable across releases
    #[test]
    fn test_codes_match_renderer_contract() {
        assert_eq!(TileType::Clear.code(), 0);
        assert_eq!(TileType::Wall.code(), 1);
        assert_eq!(TileType::Door(Orientation::UpDown, DoorStyle::Plain).code(), 2);
        assert_eq!(TileType::Door(Orientation::UpDown, DoorStyle::Arched).code(), 3);
        assert_eq!(TileType::Door(Orientation::UpDown, DoorStyle::Barred).code(), 4);
        assert_eq!(
            TileType::Door(Orientation::LeftRight, DoorStyle::Plain).code(),
            5
        );
        assert_eq!(
            TileType::Door(Orientation::LeftRight, DoorStyle::Arched).code(),
            6
        );
        assert_eq!(
            TileType::Door(Orientation::LeftRight, DoorStyle::Barred).code(),
            7
        );
        assert_eq!(TileType::Item(ItemKind::Coin).code(), 10);
        assert_eq!(TileType::Item(ItemKind::Key).code(), 11);
        assert_eq!(TileType::Item(ItemKind::Potion).code(), 12);
    }

    #[test]
    fn test_from_code_round_trips_every_tile() {
        let mut tiles = vec![TileType::Clear, TileType::Wall];
        for orientation in [Orientation::UpDown, Orientation::LeftRight] {
            for style in DOOR_STYLES {
                tiles.push(TileType::Door(orientation, style));
            }
        }
        for kind in ITEM_KINDS {
            tiles.push(TileType::Item(kind));
        }

        for tile in tiles {
            assert_eq!(TileType::from_code(tile.code()), Some(tile));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown_codes() {
        assert_eq!(TileType::from_code(8), None);
        assert_eq!(TileType::from_code(9), None);
        assert_eq!(TileType::from_code(13), None);
        assert_eq!(TileType::from_code(255), None);
    }

    #[test]
    fn test_only_walls_block_movement() {
        assert!(TileType::Clear.is_passable());
        assert!(TileType::Door(Orientation::UpDown, DoorStyle::Barred).is_passable());
        assert!(TileType::Item(ItemKind::Key).is_passable());
        assert!(!TileType::Wall.is_passable());
    }
}
