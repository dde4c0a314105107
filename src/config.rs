//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use serde::Deserialize;
use slippy_grid::{Point, Rect};
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ApplicationCfg {
    #[serde(default)]
    pub cover: CoverCfg,
    pub extent: Option<ExtentCfg>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CoverCfg {
    #[serde(default = "default_minzoom")]
    pub minzoom: u8,
    #[serde(default = "default_maxzoom")]
    pub maxzoom: u8,
    /// Upper limit of tiles per zoom level
    #[serde(default = "default_max_tiles")]
    pub max_tiles: u64,
    /// Neighbourhood radius added around the covering tiles
    #[serde(default)]
    pub neighbours: u32,
    /// Output format (id, cachekey, zxy, bounds)
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for CoverCfg {
    fn default() -> CoverCfg {
        CoverCfg {
            minzoom: default_minzoom(),
            maxzoom: default_maxzoom(),
            max_tiles: default_max_tiles(),
            neighbours: 0,
            format: default_format(),
        }
    }
}

pub fn default_minzoom() -> u8 {
    8
}

pub fn default_maxzoom() -> u8 {
    11
}

pub fn default_max_tiles() -> u64 {
    1_000_000
}

pub fn default_format() -> String {
    "id".to_string()
}

/// Region in WGS84 degrees
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ExtentCfg {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl From<&ExtentCfg> for Rect {
    fn from(cfg: &ExtentCfg) -> Rect {
        Rect::new(cfg.top, cfg.left, cfg.bottom, cfg.right)
    }
}

pub const DEFAULT_CONFIG: &'static str = r#"
[cover]
minzoom = 8
maxzoom = 11
# Abort when a zoom level has more tiles
max_tiles = 1000000
# Add neighbour tiles within this radius
neighbours = 0
# id | cachekey | zxy | bounds
format = "id"

# Sweden
[extent]
top = 69.06
left = 10.96
bottom = 55.34
right = 24.17
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
///
/// The configuration is a template with access to environment variables (`{{env.VARNAME}}`).
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let env: HashMap<String, String> = env::vars().collect();
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| {
        let cause = e.source().map_or(e.to_string(), |src| src.to_string());
        format!("Template error: {}", cause)
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}

/// Parse `lat,lng`
pub fn parse_point(spec: &str) -> Result<Point, String> {
    let coords = parse_numlist(spec, "point")?;
    match coords[..] {
        [lat, lng] => Ok(Point::new(lat, lng)),
        _ => Err(format!("Expected 'lat,lng' for point, got '{}'", spec)),
    }
}

/// Parse `top,left,bottom,right`
pub fn parse_extent(spec: &str) -> Result<ExtentCfg, String> {
    let coords = parse_numlist(spec, "extent")?;
    match coords[..] {
        [top, left, bottom, right] => Ok(ExtentCfg {
            top,
            left,
            bottom,
            right,
        }),
        _ => Err(format!(
            "Expected 'top,left,bottom,right' for extent, got '{}'",
            spec
        )),
    }
}

fn parse_numlist(spec: &str, name: &str) -> Result<Vec<f64>, String> {
    spec.split(',')
        .map(|v| {
            v.trim().parse::<f64>().map_err(|_| {
                format!("Error parsing '{}' as list of float values: '{}'", name, spec)
            })
        })
        .collect()
}
