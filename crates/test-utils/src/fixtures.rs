//! Common test fixtures for grid-addressing tests.
//!
//! Reference values here are literal data, not derived from the code under
//! test.

/// A named place with its reference WRS-2 path/row.
#[derive(Debug, Clone, Copy)]
pub struct Place {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub wrs2_path: i32,
    pub wrs2_row: i32,
}

/// Well-known places and the WRS-2 scene that covers them.
pub mod places {
    use super::Place;

    pub const WASHINGTON_DC: Place = Place {
        name: "Washington DC",
        latitude: 38.9,
        longitude: -77.04,
        wrs2_path: 15,
        wrs2_row: 33,
    };

    pub const SIOUX_FALLS: Place = Place {
        name: "Sioux Falls",
        latitude: 43.55,
        longitude: -96.7,
        wrs2_path: 29,
        wrs2_row: 30,
    };

    pub const LONDON: Place = Place {
        name: "London",
        latitude: 51.5,
        longitude: -0.12,
        wrs2_path: 201,
        wrs2_row: 24,
    };

    pub const PARIS: Place = Place {
        name: "Paris",
        latitude: 48.85,
        longitude: 2.35,
        wrs2_path: 199,
        wrs2_row: 26,
    };

    pub const SYDNEY: Place = Place {
        name: "Sydney",
        latitude: -33.87,
        longitude: 151.2,
        wrs2_path: 89,
        wrs2_row: 83,
    };

    pub const TOKYO: Place = Place {
        name: "Tokyo",
        latitude: 35.68,
        longitude: 139.69,
        wrs2_path: 107,
        wrs2_row: 35,
    };

    pub const ALL: [Place; 6] = [WASHINGTON_DC, SIOUX_FALLS, LONDON, PARIS, SYDNEY, TOKYO];
}

/// MODIS sinusoidal tile-grid reference data.
pub mod modis {
    /// Number of tiles that intersect the world outline.
    pub const VALID_TILE_COUNT: usize = 460;

    /// Tiles whose nearest corner sits exactly on the world outline; they
    /// contain no land or ocean and are not valid tiles.
    pub const EDGE_EXCEPTION_TILES: [(i32, i32); 4] = [(8, 2), (27, 2), (8, 15), (27, 15)];

    /// Inclusive range of valid h for each v, from the published tile bounds.
    pub const VALID_H_RANGE_BY_V: [(i32, i32); 18] = [
        (14, 21),
        (11, 24),
        (9, 26),
        (6, 29),
        (4, 31),
        (2, 33),
        (1, 34),
        (0, 35),
        (0, 35),
        (0, 35),
        (0, 35),
        (1, 34),
        (2, 33),
        (4, 31),
        (6, 29),
        (9, 26),
        (11, 24),
        (14, 21),
    ];

    /// (latitude, longitude, h, v)
    pub const KNOWN_TILES: [(f64, f64, i32, i32); 4] = [
        (40.5, -100.0, 10, 4),
        (0.5, 0.5, 18, 8),
        (-33.87, 151.2, 30, 12),
        (64.0, 20.0, 18, 2),
    ];
}

/// Common bounding boxes (west, south, east, north) for sweeps.
pub mod bbox {
    /// Global extent
    pub const GLOBAL: (f64, f64, f64, f64) = (-180.0, -90.0, 180.0, 90.0);

    /// Continental United States
    pub const CONUS: (f64, f64, f64, f64) = (-125.0, 25.0, -67.0, 49.0);

    /// Antarctica south of 60S
    pub const ANTARCTICA: (f64, f64, f64, f64) = (-180.0, -90.0, 180.0, -60.0);
}
