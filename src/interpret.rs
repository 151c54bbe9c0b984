/*!
Interpreters for the segments whose layout is known.

Each interpreter consumes one fully decompressed payload and writes into the
city being built. Tile based segments carry one entry per tile in row major
order, so entry `i` of the payload belongs to tile `i` of the grid. No
interpreter relies on another having already run, as saves may omit segments.

Unknown values inside a known segment decode to an absent field rather than an
error.
*/

use crate::models::{
    DecodedCity, Terrain, TileFlags, Underground, Zone, LABEL_COUNT, TILE_COUNT,
};
use crate::{BuildingResolver, SegmentTitle};
use log::debug;

const ALTITUDE_MASK: u16 = 0x001F;
const ALTITUDE_WATER: u16 = 0x0080;
const METERS_PER_LEVEL: u16 = 50;

const CITY_NAME_MASK: u8 = 0x3F;
const CITY_NAME_MAX: usize = 32;

const LABEL_SLOT_LEN: usize = 25;
const LABEL_MAX: usize = LABEL_SLOT_LEN - 1;

const MISC_FOUNDED: usize = 3;
const MISC_DAYS_ELAPSED: usize = 4;
const MISC_MONEY: usize = 5;
const MISC_POPULATION: usize = 20;

/// A segment with a known layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Altitude and water presence, two bytes per tile
    Altitude,
    /// City name
    CityName,
    /// Service and water flags per tile
    Flags,
    /// Building code per tile
    Buildings,
    /// Terrain slope and water level per tile
    Terrain,
    /// Subway and pipe layer per tile
    Underground,
    /// Zoning per tile
    Zones,
    /// Sign code per tile
    Signs,
    /// Text labels
    Labels,
    /// City wide statistics
    Misc,
}

impl SegmentKind {
    /// The interpreter registered for a title, if any
    pub fn from_title(title: SegmentTitle) -> Option<SegmentKind> {
        let kind = match title {
            SegmentTitle::ALTM => SegmentKind::Altitude,
            SegmentTitle::CNAM => SegmentKind::CityName,
            SegmentTitle::XBIT => SegmentKind::Flags,
            SegmentTitle::XBLD => SegmentKind::Buildings,
            SegmentTitle::XTER => SegmentKind::Terrain,
            SegmentTitle::XUND => SegmentKind::Underground,
            SegmentTitle::XZON => SegmentKind::Zones,
            SegmentTitle::XTXT => SegmentKind::Signs,
            SegmentTitle::XLAB => SegmentKind::Labels,
            SegmentTitle::MISC => SegmentKind::Misc,
            _ => return None,
        };

        Some(kind)
    }

    pub fn title(&self) -> SegmentTitle {
        match self {
            SegmentKind::Altitude => SegmentTitle::ALTM,
            SegmentKind::CityName => SegmentTitle::CNAM,
            SegmentKind::Flags => SegmentTitle::XBIT,
            SegmentKind::Buildings => SegmentTitle::XBLD,
            SegmentKind::Terrain => SegmentTitle::XTER,
            SegmentKind::Underground => SegmentTitle::XUND,
            SegmentKind::Zones => SegmentTitle::XZON,
            SegmentKind::Signs => SegmentTitle::XTXT,
            SegmentKind::Labels => SegmentTitle::XLAB,
            SegmentKind::Misc => SegmentTitle::MISC,
        }
    }

    /// Interpret a decompressed payload into `city`. Later segments overwrite
    /// the fields that earlier ones wrote.
    ///
    /// ```
    /// use sc2ksave::{models::DecodedCity, SegmentKind};
    /// use std::collections::HashMap;
    ///
    /// let mut city = DecodedCity::new();
    /// let names = HashMap::from([(0xCCu8, "Solar power plant")]);
    /// SegmentKind::Buildings.apply(&[0xCC, 0xFF], &mut city, &names);
    /// assert_eq!(city.tiles()[0].building, 0xCC);
    /// assert_eq!(city.tiles()[0].building_name.as_deref(), Some("Solar power plant"));
    /// assert_eq!(city.tiles()[1].building_name, None);
    /// ```
    pub fn apply<R>(self, data: &[u8], city: &mut DecodedCity, resolver: &R)
    where
        R: BuildingResolver + ?Sized,
    {
        match self {
            SegmentKind::Altitude => altitude(data, city),
            SegmentKind::CityName => city_name(data, city),
            SegmentKind::Flags => per_tile(self, data, city, |tile, value| {
                tile.flags = TileFlags::from_byte(value);
            }),
            SegmentKind::Buildings => per_tile(self, data, city, |tile, value| {
                tile.building = value;
                tile.building_name = resolver.resolve(value).map(String::from);
            }),
            SegmentKind::Terrain => per_tile(self, data, city, |tile, value| {
                tile.terrain = Terrain::from_byte(value);
            }),
            SegmentKind::Underground => per_tile(self, data, city, |tile, value| {
                tile.underground = Underground::from_byte(value);
            }),
            SegmentKind::Zones => per_tile(self, data, city, |tile, value| {
                tile.zone = Some(Zone::from_byte(value));
            }),
            SegmentKind::Signs => per_tile(self, data, city, |tile, value| {
                if value != 0 {
                    tile.sign = Some(value);
                }
            }),
            SegmentKind::Labels => labels(data, city),
            SegmentKind::Misc => misc(data, city),
        }
    }
}

fn per_tile<F>(kind: SegmentKind, data: &[u8], city: &mut DecodedCity, mut f: F)
where
    F: FnMut(&mut crate::models::Tile, u8),
{
    if data.len() > TILE_COUNT {
        debug!(
            "{} holds {} entries, ignoring those past the grid",
            kind.title(),
            data.len()
        );
    }

    for (tile, &value) in city.tiles_mut().iter_mut().zip(data) {
        f(tile, value);
    }
}

fn altitude(data: &[u8], city: &mut DecodedCity) {
    if data.len() > TILE_COUNT * 2 {
        debug!(
            "{} holds {} bytes, ignoring those past the grid",
            SegmentTitle::ALTM,
            data.len()
        );
    }

    let words = data.chunks_exact(2).map(|x| u16::from_be_bytes([x[0], x[1]]));
    for (tile, word) in city.tiles_mut().iter_mut().zip(words) {
        tile.altitude = (word & ALTITUDE_MASK) * METERS_PER_LEVEL;
        tile.has_water = word & ALTITUDE_WATER != 0;
    }
}

fn city_name(data: &[u8], city: &mut DecodedCity) {
    let Some((&len, rest)) = data.split_first() else {
        return;
    };

    let len = usize::from(len & CITY_NAME_MASK).min(CITY_NAME_MAX);
    city.city_name = latin1(&rest[..len.min(rest.len())]);
}

fn labels(data: &[u8], city: &mut DecodedCity) {
    if data.len() > LABEL_COUNT * LABEL_SLOT_LEN {
        debug!(
            "{} holds {} bytes, ignoring labels past slot {}",
            SegmentTitle::XLAB,
            data.len(),
            LABEL_COUNT - 1
        );
    }

    let slots = data.chunks(LABEL_SLOT_LEN).take(LABEL_COUNT);
    for (label, slot) in city.labels.iter_mut().zip(slots) {
        let Some((&len, text)) = slot.split_first() else {
            continue;
        };

        let len = usize::from(len).min(LABEL_MAX).min(text.len());
        *label = latin1(&text[..len]);
    }
}

fn misc(data: &[u8], city: &mut DecodedCity) {
    let word = |idx: usize| {
        let bytes = data.get(idx * 4..idx * 4 + 4)?;
        Some(i32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    };

    if let Some(x) = word(MISC_FOUNDED) {
        city.founded = x;
    }

    if let Some(x) = word(MISC_DAYS_ELAPSED) {
        city.days_elapsed = x;
    }

    if let Some(x) = word(MISC_MONEY) {
        city.money = x;
    }

    if let Some(x) = word(MISC_POPULATION) {
        city.population = x;
    }
}

/// Each byte maps to the char of the same value
fn latin1(data: &[u8]) -> String {
    data.iter().map(|&x| char::from(x)).collect()
}
