//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::point::{MAX_LAT, MAX_LNG, MIN_LAT, MIN_LNG};
use std::fmt;

/// Errors of the strict conversion functions
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Latitude outside of the Web Mercator range
    InvalidLatitude(f64),
    /// Longitude outside of [-180, 180]
    InvalidLongitude(f64),
    /// Tile specification not in `z/x/y` form
    InvalidTile(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidLatitude(lat) => write!(
                f,
                "Invalid latitude: {} (must be between {} and {})",
                lat, MIN_LAT, MAX_LAT
            ),
            GridError::InvalidLongitude(lng) => write!(
                f,
                "Invalid longitude: {} (must be between {} and {})",
                lng, MIN_LNG, MAX_LNG
            ),
            GridError::InvalidTile(spec) => {
                write!(f, "Invalid tile '{}' (expected z/x/y)", spec)
            }
        }
    }
}

impl std::error::Error for GridError {}
