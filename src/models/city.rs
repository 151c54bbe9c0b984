use super::Tile;
use crate::{CityDate, SegmentTitle};
use serde::Serialize;

/// Width and height of the city grid in tiles
pub const GRID_SIZE: usize = 128;

/// Number of tiles in the city grid
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Number of label slots in the `XLAB` segment
pub const LABEL_COUNT: usize = 256;

/// A segment that no interpreter understands, kept when decoding with
/// [`UnknownSegmentStrategy::Retain`](crate::UnknownSegmentStrategy::Retain)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnparsedSegment {
    pub title: SegmentTitle,

    /// Payload after run-length decoding
    pub data: Vec<u8>,
}

/// Everything decoded from a save.
///
/// The grid always holds [`TILE_COUNT`] tiles and there are always
/// [`LABEL_COUNT`] labels, whichever segments were present in the file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedCity {
    pub(crate) city_name: String,
    pub(crate) founded: i32,
    pub(crate) days_elapsed: i32,
    pub(crate) money: i32,
    pub(crate) population: i32,
    pub(crate) labels: Vec<String>,
    pub(crate) tiles: Vec<Tile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) unparsed_segments: Vec<UnparsedSegment>,
}

impl DecodedCity {
    /// An empty city that segments are applied onto
    pub fn new() -> Self {
        DecodedCity {
            city_name: String::new(),
            founded: 0,
            days_elapsed: 0,
            money: 0,
            population: 0,
            labels: vec![String::new(); LABEL_COUNT],
            tiles: vec![Tile::default(); TILE_COUNT],
            unparsed_segments: Vec::new(),
        }
    }

    pub fn city_name(&self) -> &str {
        &self.city_name
    }

    /// Year the city was founded
    pub fn founded(&self) -> i32 {
        self.founded
    }

    pub fn days_elapsed(&self) -> i32 {
        self.days_elapsed
    }

    pub fn money(&self) -> i32 {
        self.money
    }

    pub fn population(&self) -> i32 {
        self.population
    }

    /// Text labels indexed by slot
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Tiles in row major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The tile at column `x` and row `y`
    pub fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        if x >= GRID_SIZE || y >= GRID_SIZE {
            return None;
        }

        self.tiles.get(y * GRID_SIZE + x)
    }

    pub fn unparsed_segments(&self) -> &[UnparsedSegment] {
        &self.unparsed_segments
    }

    /// In-game date the save was made on
    ///
    /// ```
    /// use sc2ksave::models::DecodedCity;
    /// let city = DecodedCity::new();
    /// assert_eq!(city.current_date(), None);
    /// ```
    pub fn current_date(&self) -> Option<CityDate> {
        CityDate::from_elapsed(self.founded, self.days_elapsed)
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }
}

impl Default for DecodedCity {
    fn default() -> Self {
        DecodedCity::new()
    }
}
