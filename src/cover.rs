//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile covers of a region over a range of zoom levels

use crate::config::{ApplicationCfg, Config, DEFAULT_CONFIG};
use pbr::ProgressBar;
use slippy_grid::{Rect, Tile, TileRange};
use std::io::{stderr, Stderr, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Output line format of a tile
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// `x_y_z`
    Id,
    /// `search:v4:tiles:z:x-y`
    CacheKey,
    /// `z/x/y`
    Zxy,
    /// `x_y_z,top,left,bottom,right`
    Bounds,
}

impl OutputFormat {
    pub fn format(&self, tile: &Tile) -> String {
        match self {
            OutputFormat::Id => tile.feature_id(),
            OutputFormat::CacheKey => tile.cache_key(),
            OutputFormat::Zxy => tile.to_string(),
            OutputFormat::Bounds => {
                let rect = tile.to_rect();
                format!(
                    "{},{},{},{},{}",
                    tile.feature_id(),
                    rect.top,
                    rect.left,
                    rect.bottom,
                    rect.right
                )
            }
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<OutputFormat, String> {
        match &s.to_lowercase() as &str {
            "id" => Ok(OutputFormat::Id),
            "cachekey" => Ok(OutputFormat::CacheKey),
            "zxy" => Ok(OutputFormat::Zxy),
            "bounds" => Ok(OutputFormat::Bounds),
            _ => Err(format!("Unexpected output format '{}'", s)),
        }
    }
}

/// Validated cover parameters
#[derive(Clone, Debug)]
pub struct CoverSettings {
    pub extent: Rect,
    pub minzoom: u8,
    pub maxzoom: u8,
    pub max_tiles: u64,
    pub neighbours: u32,
    pub format: OutputFormat,
}

impl<'a> Config<'a, ApplicationCfg> for CoverSettings {
    fn from_config(cfg: &ApplicationCfg) -> Result<Self, String> {
        let extent = cfg
            .extent
            .as_ref()
            .ok_or_else(|| "Missing configuration entry [extent]".to_string())?;
        let cover = &cfg.cover;
        if cover.minzoom > cover.maxzoom {
            return Err(format!(
                "minzoom {} is greater than maxzoom {}",
                cover.minzoom, cover.maxzoom
            ));
        }
        if extent.top < extent.bottom || extent.left > extent.right {
            warn!(
                "Unordered extent corners {:?}, using their bounding tiles",
                extent
            );
        }
        Ok(CoverSettings {
            extent: Rect::from(extent),
            minzoom: cover.minzoom,
            maxzoom: cover.maxzoom,
            max_tiles: cover.max_tiles,
            neighbours: cover.neighbours,
            format: cover.format.parse()?,
        })
    }
    fn gen_config() -> String {
        DEFAULT_CONFIG.to_string()
    }
}

impl CoverSettings {
    pub fn zoom_levels(&self) -> RangeInclusive<u8> {
        self.minzoom..=self.maxzoom
    }

    /// Covering tiles of one zoom level, extended by the neighbourhood radius.
    ///
    /// The union of the neighbourhoods of all tiles in a range is the range
    /// grown by the radius on each side.
    pub fn level_range(&self, zoom: u8) -> TileRange {
        let range = self.extent.get_tiles(zoom);
        if self.neighbours == 0 || range.is_empty() {
            return range;
        }
        let first = Tile::new(range.minx, range.miny, zoom).add_neighbours(self.neighbours);
        let last = Tile::new(range.maxx, range.maxy, zoom).add_neighbours(self.neighbours);
        TileRange::new(first.minx, last.maxx, first.miny, last.maxy, zoom)
    }

    /// Tile ranges of all zoom levels, checked against `max_tiles`
    pub fn level_ranges(&self) -> Result<Vec<TileRange>, String> {
        self.zoom_levels()
            .map(|zoom| {
                let range = self.level_range(zoom);
                debug!("level {}: {:?}", zoom, range);
                if range.len() > self.max_tiles {
                    Err(format!(
                        "Zoom level {} has {} tiles, more than max_tiles = {}",
                        zoom,
                        range.len(),
                        self.max_tiles
                    ))
                } else {
                    Ok(range)
                }
            })
            .collect()
    }

    fn progress_bar(&self, zoom: u8, range: &TileRange) -> ProgressBar<Stderr> {
        let mut pb = ProgressBar::on(stderr(), range.len());
        pb.message(&format!("Level {}: ", zoom));
        pb.show_speed = false;
        pb.show_percent = false;
        pb.show_time_left = false;
        pb
    }

    /// Write covering tiles of all zoom levels, one line per tile.
    ///
    /// Nothing is written when a zoom level exceeds `max_tiles`.
    pub fn generate<W: Write>(&self, out: &mut W, progress: bool) -> Result<u64, String> {
        let ranges = self.level_ranges()?;
        let mut total = 0;
        for range in ranges {
            info!("Zoom level {}: {} tiles", range.z, range.len());
            let mut pb = if progress {
                Some(self.progress_bar(range.z, &range))
            } else {
                None
            };
            for tile in range.iter() {
                writeln!(out, "{}", self.format.format(&tile))
                    .map_err(|e| format!("Error writing tile {}: {}", tile, e))?;
                total += 1;
                if let Some(ref mut pb) = pb {
                    pb.inc();
                }
            }
            if let Some(ref mut pb) = pb {
                pb.finish();
            }
        }
        Ok(total)
    }
}
