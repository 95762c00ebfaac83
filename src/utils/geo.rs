use std::collections::BTreeSet;
use std::f64::consts::PI;

use crate::models::place::AddressKey;
use crate::models::property::Property;

/// Edge length of a map tile in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Web-Mercator world pixel coordinates at a zoom level.
pub fn project(lat: f64, lon: f64, zoom: u8) -> (f64, f64) {
    let scale = TILE_SIZE * f64::from(1u32 << zoom);
    let lat = lat.clamp(-85.051_128_78, 85.051_128_78).to_radians();
    let x = (lon + 180.0) / 360.0 * scale;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
    (x, y)
}

/// A tile to draw and where its top-left corner lands in the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlacement {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
    pub left: f64,
    pub top: f64,
}

impl TilePlacement {
    pub fn url(&self, template: &str) -> String {
        template
            .replace("{z}", &self.zoom.to_string())
            .replace("{x}", &self.x.to_string())
            .replace("{y}", &self.y.to_string())
    }
}

/// Fixed-size viewport centred on a coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: (f64, f64),
    pub zoom: u8,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    fn origin(&self) -> (f64, f64) {
        let (cx, cy) = project(self.center.0, self.center.1, self.zoom);
        (cx - self.width / 2.0, cy - self.height / 2.0)
    }

    /// Viewport pixel position of a coordinate, if it falls inside.
    pub fn locate(&self, lat: f64, lon: f64) -> Option<(f64, f64)> {
        let (ox, oy) = self.origin();
        let (x, y) = project(lat, lon, self.zoom);
        let (left, top) = (x - ox, y - oy);
        let inside = (0.0..=self.width).contains(&left) && (0.0..=self.height).contains(&top);
        inside.then_some((left, top))
    }

    /// Tiles covering the viewport.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tiles(&self) -> Vec<TilePlacement> {
        let (ox, oy) = self.origin();
        let max_index = i64::from(1u32 << self.zoom);
        let first_x = (ox / TILE_SIZE).floor() as i64;
        let first_y = (oy / TILE_SIZE).floor() as i64;
        let last_x = ((ox + self.width) / TILE_SIZE).floor() as i64;
        let last_y = ((oy + self.height) / TILE_SIZE).floor() as i64;

        (first_y..=last_y)
            .filter(|y| (0..max_index).contains(y))
            .flat_map(|y| {
                (first_x..=last_x)
                    .filter(|x| (0..max_index).contains(x))
                    .map(move |x| TilePlacement {
                        x: x as u32,
                        y: y as u32,
                        zoom: self.zoom,
                        left: x as f64 * TILE_SIZE - ox,
                        top: y as f64 * TILE_SIZE - oy,
                    })
            })
            .collect()
    }
}

/// Addresses needing a geocoding lookup, one per street/postal code/city.
pub fn distinct_addresses(vacancies: &[Property]) -> Vec<AddressKey> {
    vacancies
        .iter()
        .map(|p| AddressKey::from(&p.address))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_origin() {
        let (x, y) = project(0.0, 0.0, 0);
        assert!((x - 128.0).abs() < 1e-9);
        assert!((y - 128.0).abs() < 1e-9);
    }

    #[test]
    fn test_center_lands_mid_viewport() {
        let viewport = Viewport {
            center: (55.704261, 13.1915074),
            zoom: 14,
            width: 800.0,
            height: 600.0,
        };
        let (left, top) = viewport.locate(55.704261, 13.1915074).unwrap();
        assert!((left - 400.0).abs() < 1e-6);
        assert!((top - 300.0).abs() < 1e-6);
        assert!(viewport.locate(59.3293, 18.0686).is_none());
    }

    #[test]
    fn test_tiles_cover_viewport() {
        let viewport = Viewport {
            center: (55.704261, 13.1915074),
            zoom: 14,
            width: 800.0,
            height: 600.0,
        };
        let tiles = viewport.tiles();
        assert!(tiles.len() >= 4 * 3);
        assert!(tiles.iter().all(|t| t.left > -TILE_SIZE && t.left < 800.0));
        assert!(tiles.iter().all(|t| t.top > -TILE_SIZE && t.top < 600.0));
        assert_eq!(
            tiles[0].url("https://tile.example/{z}/{x}/{y}.png"),
            format!("https://tile.example/14/{}/{}.png", tiles[0].x, tiles[0].y)
        );
    }
}
