use serde::Serialize;

/// Relative corner heights of a tile, ordered top-left, top-right,
/// bottom-left, bottom-right. A corner is 0 when it sits at the tile's base
/// altitude and 1 when it is one level up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Slope([u8; 4]);

static SLOPES: [Slope; 14] = [
    Slope([0, 0, 0, 0]),
    Slope([1, 1, 0, 0]),
    Slope([0, 1, 0, 1]),
    Slope([0, 0, 1, 1]),
    Slope([1, 0, 1, 0]),
    Slope([1, 1, 0, 1]),
    Slope([0, 1, 1, 1]),
    Slope([1, 0, 1, 1]),
    Slope([1, 1, 1, 0]),
    Slope([0, 1, 0, 0]),
    Slope([0, 0, 0, 1]),
    Slope([0, 0, 1, 0]),
    Slope([1, 0, 0, 0]),
    Slope([1, 1, 1, 1]),
];

impl Slope {
    pub const FLAT: Slope = Slope([0, 0, 0, 0]);

    /// Look up the 4 bit slope code shared by the terrain and underground
    /// layers. Codes 0xE and 0xF have no known shape.
    pub fn from_code(code: u8) -> Option<Slope> {
        SLOPES.get(usize::from(code)).copied()
    }

    pub fn corners(&self) -> [u8; 4] {
        self.0
    }

    pub fn top_left(&self) -> u8 {
        self.0[0]
    }

    pub fn top_right(&self) -> u8 {
        self.0[1]
    }

    pub fn bottom_left(&self) -> u8 {
        self.0[2]
    }

    pub fn bottom_right(&self) -> u8 {
        self.0[3]
    }

    pub fn is_flat(&self) -> bool {
        *self == Slope::FLAT
    }
}

/// How wet a tile is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterLevel {
    Dry,
    Submerged,
    Shore,
    Surface,
    Waterfall,
}

static WATER_LEVELS: [WaterLevel; 5] = [
    WaterLevel::Dry,
    WaterLevel::Submerged,
    WaterLevel::Shore,
    WaterLevel::Surface,
    WaterLevel::Waterfall,
];

impl WaterLevel {
    pub fn from_code(code: u8) -> Option<WaterLevel> {
        WATER_LEVELS.get(usize::from(code)).copied()
    }
}

/// Sides of a surface water tile that open onto adjoining water
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct WaterEdges {
    pub top: bool,
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
}

const fn edges(top: bool, left: bool, right: bool, bottom: bool) -> WaterEdges {
    WaterEdges {
        top,
        left,
        right,
        bottom,
    }
}

static WATER_EDGES: [WaterEdges; 6] = [
    // canal running left to right
    edges(false, true, true, false),
    // canal running top to bottom
    edges(true, false, false, true),
    // bays, open on a single side
    edges(false, false, true, false),
    edges(false, true, false, false),
    edges(true, false, false, false),
    edges(false, false, false, true),
];

impl WaterEdges {
    /// Only shape codes 0 through 5 are known
    pub fn from_code(code: u8) -> Option<WaterEdges> {
        WATER_EDGES.get(usize::from(code)).copied()
    }
}

/// Surface layer of a tile, from the `XTER` segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Terrain {
    pub slope: Option<Slope>,
    pub water_level: WaterLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_water_edges: Option<WaterEdges>,
}

impl Terrain {
    /// Decode one `XTER` byte.
    ///
    /// ```
    /// use sc2ksave::models::{Slope, Terrain, WaterLevel};
    /// let terrain = Terrain::from_byte(0x25).unwrap();
    /// assert_eq!(terrain.slope, Slope::from_code(0x5));
    /// assert_eq!(terrain.water_level, WaterLevel::Shore);
    /// ```
    ///
    /// Returns `None` for 0x3F, which has no known meaning.
    pub fn from_byte(value: u8) -> Option<Terrain> {
        match value {
            0x00..=0x3D => Some(Terrain {
                slope: Slope::from_code(value & 0x0F),
                water_level: WaterLevel::from_code((value >> 4) & 0x0F)?,
                surface_water_edges: None,
            }),
            0x3E => Some(Terrain {
                slope: Some(Slope::FLAT),
                water_level: WaterLevel::Waterfall,
                surface_water_edges: None,
            }),
            0x3F => None,
            _ => Some(Terrain {
                slope: Some(Slope::FLAT),
                water_level: WaterLevel::Surface,
                surface_water_edges: WaterEdges::from_code(value & 0x0F),
            }),
        }
    }
}

/// Subterranean layer of a tile, from the `XUND` segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Underground {
    pub slope: Option<Slope>,
    pub subway: bool,
    pub pipes: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subway_left_right: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station: Option<bool>,
}

impl Underground {
    /// Decode one `XUND` byte. Values outside the known ranges yield `None`.
    ///
    /// ```
    /// use sc2ksave::models::Underground;
    /// let crossing = Underground::from_byte(0x1F).unwrap();
    /// assert!(crossing.subway && crossing.pipes);
    /// assert_eq!(crossing.subway_left_right, Some(true));
    /// ```
    pub fn from_byte(value: u8) -> Option<Underground> {
        match value {
            0x00..=0x1D => Some(Underground {
                slope: Slope::from_code(value & 0x0F),
                subway: (value & 0xF0) == 0x00,
                pipes: (value & 0xF0) == 0x10,
                ..Underground::default()
            }),
            0x1F | 0x20 => Some(Underground {
                slope: Some(Slope::FLAT),
                subway: true,
                pipes: true,
                subway_left_right: Some(value == 0x1F),
                station: None,
            }),
            0x23 => Some(Underground {
                slope: Some(Slope::FLAT),
                station: Some(true),
                ..Underground::default()
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope_table() {
        assert_eq!(Slope::from_code(0x0), Some(Slope::FLAT));
        assert_eq!(Slope::from_code(0x3).unwrap().corners(), [0, 0, 1, 1]);
        assert_eq!(Slope::from_code(0xD).unwrap().corners(), [1, 1, 1, 1]);
        assert_eq!(Slope::from_code(0xE), None);
        assert_eq!(Slope::from_code(0xF), None);
    }

    #[test]
    fn test_slope_corners() {
        let slope = Slope::from_code(0x5).unwrap();
        assert_eq!(slope.top_left(), 1);
        assert_eq!(slope.top_right(), 1);
        assert_eq!(slope.bottom_left(), 0);
        assert_eq!(slope.bottom_right(), 1);
        assert!(!slope.is_flat());
    }

    #[test]
    fn test_terrain_dry() {
        let terrain = Terrain::from_byte(0x00).unwrap();
        assert_eq!(terrain.slope, Some(Slope::FLAT));
        assert_eq!(terrain.water_level, WaterLevel::Dry);
        assert_eq!(terrain.surface_water_edges, None);
    }

    #[test]
    fn test_terrain_submerged() {
        let terrain = Terrain::from_byte(0x1D).unwrap();
        assert_eq!(terrain.slope.unwrap().corners(), [1, 1, 1, 1]);
        assert_eq!(terrain.water_level, WaterLevel::Submerged);
    }

    #[test]
    fn test_terrain_shore() {
        let terrain = Terrain::from_byte(0x25).unwrap();
        assert_eq!(terrain.slope.unwrap().corners(), [1, 1, 0, 1]);
        assert_eq!(terrain.water_level, WaterLevel::Shore);
    }

    #[test]
    fn test_terrain_sloped_surface() {
        let terrain = Terrain::from_byte(0x33).unwrap();
        assert_eq!(terrain.slope.unwrap().corners(), [0, 0, 1, 1]);
        assert_eq!(terrain.water_level, WaterLevel::Surface);
        assert_eq!(terrain.surface_water_edges, None);
    }

    #[test]
    fn test_terrain_waterfall() {
        let terrain = Terrain::from_byte(0x3E).unwrap();
        assert_eq!(terrain.slope, Some(Slope::FLAT));
        assert_eq!(terrain.water_level, WaterLevel::Waterfall);
    }

    #[test]
    fn test_terrain_surface_canal() {
        let terrain = Terrain::from_byte(0x41).unwrap();
        assert_eq!(terrain.slope, Some(Slope::FLAT));
        assert_eq!(terrain.water_level, WaterLevel::Surface);
        assert_eq!(
            terrain.surface_water_edges,
            Some(WaterEdges {
                top: true,
                left: false,
                right: false,
                bottom: true,
            })
        );
    }

    #[test]
    fn test_terrain_unknown_values() {
        assert_eq!(Terrain::from_byte(0x3F), None);

        let terrain = Terrain::from_byte(0x1E).unwrap();
        assert_eq!(terrain.slope, None);
        assert_eq!(terrain.water_level, WaterLevel::Submerged);

        let terrain = Terrain::from_byte(0x47).unwrap();
        assert_eq!(terrain.water_level, WaterLevel::Surface);
        assert_eq!(terrain.surface_water_edges, None);
    }

    #[test]
    fn test_terrain_upper_range_ignores_high_nibble() {
        assert_eq!(Terrain::from_byte(0x43), Terrain::from_byte(0xF3));
    }

    #[test]
    fn test_water_edges_bays_open_one_side() {
        for code in 2..6 {
            let e = WaterEdges::from_code(code).unwrap();
            let open = [e.top, e.left, e.right, e.bottom];
            assert_eq!(open.iter().filter(|&&x| x).count(), 1, "code {}", code);
        }
        assert_eq!(WaterEdges::from_code(6), None);
    }

    #[test]
    fn test_underground_subway() {
        let und = Underground::from_byte(0x03).unwrap();
        assert_eq!(und.slope.unwrap().corners(), [0, 0, 1, 1]);
        assert!(und.subway);
        assert!(!und.pipes);
        assert_eq!(und.subway_left_right, None);
        assert_eq!(und.station, None);
    }

    #[test]
    fn test_underground_pipes() {
        let und = Underground::from_byte(0x10).unwrap();
        assert_eq!(und.slope, Some(Slope::FLAT));
        assert!(!und.subway);
        assert!(und.pipes);

        let und = Underground::from_byte(0x1D).unwrap();
        assert_eq!(und.slope.unwrap().corners(), [1, 1, 1, 1]);
        assert!(und.pipes);
    }

    #[test]
    fn test_underground_crossings() {
        let und = Underground::from_byte(0x20).unwrap();
        assert_eq!(und.slope, Some(Slope::FLAT));
        assert!(und.subway);
        assert!(und.pipes);
        assert_eq!(und.subway_left_right, Some(false));
    }

    #[test]
    fn test_underground_station() {
        let und = Underground::from_byte(0x23).unwrap();
        assert_eq!(und.slope, Some(Slope::FLAT));
        assert_eq!(und.station, Some(true));
        assert!(!und.subway);
        assert!(!und.pipes);
    }

    #[test]
    fn test_underground_unknown_values() {
        for value in [0x1E, 0x21, 0x22, 0x24, 0x80, 0xFF] {
            assert_eq!(Underground::from_byte(value), None, "value {:#x}", value);
        }

        let und = Underground::from_byte(0x0E).unwrap();
        assert_eq!(und.slope, None);
        assert!(und.subway);
    }
}
