use super::{Terrain, Underground};
use serde::Serialize;

/// Service and water flags of a tile, from the `XBIT` segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TileFlags {
    pub saltwater: bool,
    pub water_cover: bool,
    pub water_supplied: bool,
    pub piped: bool,
    pub power_supplied: bool,
    pub conductive: bool,
}

impl TileFlags {
    const SALTWATER: u8 = 0x01;
    const WATER_COVER: u8 = 0x04;
    const WATER_SUPPLIED: u8 = 0x10;
    const PIPED: u8 = 0x20;
    const POWER_SUPPLIED: u8 = 0x40;
    const CONDUCTIVE: u8 = 0x80;

    /// Bits 0x02 and 0x08 are not understood and are dropped
    pub fn from_byte(value: u8) -> TileFlags {
        TileFlags {
            saltwater: value & Self::SALTWATER != 0,
            water_cover: value & Self::WATER_COVER != 0,
            water_supplied: value & Self::WATER_SUPPLIED != 0,
            piped: value & Self::PIPED != 0,
            power_supplied: value & Self::POWER_SUPPLIED != 0,
            conductive: value & Self::CONDUCTIVE != 0,
        }
    }
}

/// Zoning of a tile, from the `XZON` segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Zone {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,

    /// Zone type code (light residential, dense commercial, etc)
    #[serde(rename = "type")]
    pub kind: u8,
}

impl Zone {
    /// Decode one `XZON` byte.
    ///
    /// The corner bits are not in reading order: 0x80 is top-left, 0x40
    /// bottom-left, 0x20 bottom-right, and 0x10 top-right.
    ///
    /// ```
    /// use sc2ksave::models::Zone;
    /// let zone = Zone::from_byte(0x94);
    /// assert!(zone.top_left && zone.top_right);
    /// assert!(!zone.bottom_left && !zone.bottom_right);
    /// assert_eq!(zone.kind, 4);
    /// ```
    pub fn from_byte(value: u8) -> Zone {
        Zone {
            top_left: value & 0x80 != 0,
            bottom_left: value & 0x40 != 0,
            bottom_right: value & 0x20 != 0,
            top_right: value & 0x10 != 0,
            kind: value & 0x0F,
        }
    }
}

/// One cell of the 128x128 city grid.
///
/// Each segment fills in a different part of a tile, so a field keeps its
/// default until the segment that carries it has been seen.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Tile {
    /// Height of the tile's base in meters
    pub altitude: u16,
    pub has_water: bool,

    #[serde(flatten)]
    pub flags: TileFlags,

    pub building: u8,
    pub building_name: Option<String>,

    pub terrain: Option<Terrain>,
    pub underground: Option<Underground>,
    pub zone: Option<Zone>,
    pub sign: Option<u8>,
}
