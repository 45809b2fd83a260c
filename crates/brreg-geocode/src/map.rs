//! Map review viewport and Web Mercator tile arithmetic.

use std::f64::consts::PI;

use brreg_core::Coordinates;

/// Credit line that must accompany OpenStreetMap tiles.
pub const ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Centre of Norway, shown when the company address could not be located.
pub const FALLBACK_CENTER: Coordinates = Coordinates::new(60.472, 8.4689);
pub const FALLBACK_ZOOM: u8 = 6;
/// Street-level zoom used when the company address was located.
pub const FOUND_ZOOM: u8 = 15;

const MAX_ZOOM: u8 = 19;
// Web Mercator is undefined at the poles.
const MAX_LATITUDE: f64 = 85.051_128_78;

/// What the map review dialog shows when it opens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    /// `true` when `center` is the company's geocoded address.
    pub located: bool,
}

impl MapView {
    /// Centres on `located` at street zoom, or on the national fallback.
    #[must_use]
    pub fn for_location(located: Option<Coordinates>) -> Self {
        match located {
            Some(center) => Self {
                center,
                zoom: FOUND_ZOOM,
                located: true,
            },
            None => Self {
                center: FALLBACK_CENTER,
                zoom: FALLBACK_ZOOM,
                located: false,
            },
        }
    }

    /// The tile containing the view centre.
    #[must_use]
    pub fn center_tile(&self) -> TileCoord {
        TileCoord::containing(self.center, self.zoom)
    }
}

/// A slippy-map tile address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    /// Tile at `zoom` that contains `point`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn containing(point: Coordinates, zoom: u8) -> Self {
        let z = zoom.min(MAX_ZOOM);
        let n = f64::from(1_u32 << z);
        let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let lng = point.lng.clamp(-180.0, 180.0);

        let x = ((lng + 180.0) / 360.0 * n).floor();
        let y = ((1.0 - lat.tan().asinh() / PI) / 2.0 * n).floor();
        let max = n - 1.0;
        Self {
            x: x.clamp(0.0, max) as u32,
            y: y.clamp(0.0, max) as u32,
            z,
        }
    }

    /// Expands `{z}`, `{x}` and `{y}` in a tile URL template.
    #[must_use]
    pub fn url(&self, template: &str) -> String {
        template
            .replace("{z}", &self.z.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}
