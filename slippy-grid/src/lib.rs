//! A library for slippy map tile calculations
//!
//! ## Point to tile
//!
//! ```rust
//! use slippy_grid::{Point, Tile};
//!
//! let stockholm = Point::new(59.3293, 18.0686);
//! let tile = stockholm.to_tile(10);
//! assert_eq!(tile, Tile::new(563, 301, 10));
//! assert!(stockholm.within(&tile.to_rect()));
//! ```
//!
//! ## Tile bounds
//!
//! ```rust
//! use slippy_grid::Tile;
//!
//! let rect = Tile::new(0, 0, 1).to_rect();
//! assert_eq!(rect.left, -180.0);
//! assert_eq!(rect.right, 0.0);
//! assert_eq!(rect.bottom, 0.0);
//! assert!((rect.top - 85.0511287798066).abs() < 1e-9);
//! ```
//!
//! ## Tile covers
//!
//! ```rust
//! use slippy_grid::Rect;
//!
//! let rect = Rect::new(59.45, 17.75, 59.1, 18.1);
//! let tiles = rect.get_tiles(10);
//! assert_eq!(tiles.len(), 6);
//! for tile in tiles {
//!     println!("Tile {}", tile);
//! }
//! ```

mod error;
mod point;
mod rect;
mod tile;
mod tile_range;

#[cfg(test)]
mod point_test;
#[cfg(test)]
mod rect_test;

pub use error::GridError;
pub use point::{Point, EARTH_RADIUS_KM, MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};
pub use rect::Rect;
pub use tile::{Tile, CACHE_KEY_PREFIX};
pub use tile_range::{TileRange, TileRangeIter};
