//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use slippy_grid::Tile;
use std::env;
use std::io::{self, Write};
use std::process;
use tile_cover::config::{parse_config, parse_extent, parse_point, read_config};
use tile_cover::{ApplicationCfg, Config, CoverSettings};

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1_000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(env_level)) => env_level.as_str(),
        (loglevel, _) => loglevel.unwrap_or("info"),
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn parse_arg<T: std::str::FromStr>(
    args: &ArgMatches<'_>,
    name: &str,
) -> Result<Option<T>, String> {
    match args.value_of(name) {
        Some(s) => s
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("Error parsing '{}' value '{}'", name, s)),
        None => Ok(None),
    }
}

fn config_from_args(args: &ArgMatches<'_>) -> Result<ApplicationCfg, String> {
    let mut config: ApplicationCfg = match args.value_of("config") {
        Some(path) => {
            info!("Reading configuration from '{}'", path);
            read_config(path)?
        }
        None => parse_config("".to_string(), "")?,
    };
    if let Some(extent) = args.value_of("extent") {
        config.extent = Some(parse_extent(extent)?);
    }
    if let Some(minzoom) = parse_arg(args, "minzoom")? {
        config.cover.minzoom = minzoom;
    }
    if let Some(maxzoom) = parse_arg(args, "maxzoom")? {
        config.cover.maxzoom = maxzoom;
    }
    if let Some(neighbours) = parse_arg(args, "neighbours")? {
        config.cover.neighbours = neighbours;
    }
    if let Some(max_tiles) = parse_arg(args, "max-tiles")? {
        config.cover.max_tiles = max_tiles;
    }
    if let Some(format) = args.value_of("format") {
        config.cover.format = format.to_string();
    }
    Ok(config)
}

fn cover(args: &ArgMatches<'_>) -> Result<(), String> {
    let config = config_from_args(args)?;
    let settings = CoverSettings::from_config(&config)?;
    let progress = parse_arg(args, "progress")?.unwrap_or(false);
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let count = settings.generate(&mut out, progress)?;
    out.flush().map_err(|e| e.to_string())?;
    info!("{} tiles written", count);
    Ok(())
}

fn tile(args: &ArgMatches<'_>) -> Result<(), String> {
    let point = parse_point(args.value_of("point").unwrap_or_default())?;
    let minzoom = parse_arg(args, "minzoom")?.unwrap_or(0u8);
    let maxzoom = parse_arg(args, "maxzoom")?.unwrap_or(minzoom);
    for zoom in minzoom..=maxzoom {
        let tile = point.try_to_tile(zoom).map_err(|e| e.to_string())?;
        println!("{}", tile);
    }
    Ok(())
}

fn tile_arg(args: &ArgMatches<'_>) -> Result<Tile, String> {
    args.value_of("tile")
        .unwrap_or_default()
        .parse::<Tile>()
        .map_err(|e| e.to_string())
}

fn bounds(args: &ArgMatches<'_>) -> Result<(), String> {
    let rect = tile_arg(args)?.to_rect();
    println!("{},{},{},{}", rect.top, rect.left, rect.bottom, rect.right);
    Ok(())
}

fn neighbours(args: &ArgMatches<'_>) -> Result<(), String> {
    let tile = tile_arg(args)?;
    let radius = parse_arg(args, "radius")?.unwrap_or(1u32);
    let range = tile.add_neighbours(radius);
    debug!("{} neighbours of {}", range.len(), tile);
    for neighbour in range.iter() {
        println!("{}", neighbour);
    }
    Ok(())
}

fn distance(args: &ArgMatches<'_>) -> Result<(), String> {
    let from = parse_point(args.value_of("from").unwrap_or_default())?;
    let to = parse_point(args.value_of("to").unwrap_or_default())?;
    println!("{:.3}", from.distance(&to));
    Ok(())
}

fn main() {
    dotenv().ok();
    let mut app = App::new("tile_cover")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("List the slippy map tiles covering a region")
        .subcommand(SubCommand::with_name("cover")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                                              --extent=[top,left,bottom,right] 'Extent in WGS84 degrees'
                                              --minzoom=[LEVEL] 'Minimum zoom level'
                                              --maxzoom=[LEVEL] 'Maximum zoom level'
                                              --neighbours=[RADIUS] 'Add neighbour tiles within radius'
                                              --max-tiles=[NUM] 'Maximum number of tiles per zoom level'
                                              --format=[id|cachekey|zxy|bounds] 'Output format (Default: id)'
                                              --progress=[true|false] 'Show progress bar'")
                        .about("List tiles covering an extent"))
        .subcommand(SubCommand::with_name("tile")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--point=<lat,lng> 'Geographic position'
                                              --minzoom=[LEVEL] 'Minimum zoom level (Default: 0)'
                                              --maxzoom=[LEVEL] 'Maximum zoom level (Default: minzoom)'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Tiles containing a point"))
        .subcommand(SubCommand::with_name("bounds")
                        .args_from_usage("--tile=<z/x/y> 'Tile'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Geographic bounds of a tile (top,left,bottom,right)"))
        .subcommand(SubCommand::with_name("neighbours")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--tile=<z/x/y> 'Tile'
                                              --radius=[RADIUS] 'Neighbourhood radius (Default: 1)'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Neighbourhood of a tile"))
        .subcommand(SubCommand::with_name("distance")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--from=<lat,lng> 'Start position'
                                              --to=<lat,lng> 'End position'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Great-circle distance in km"))
        .subcommand(SubCommand::with_name("genconfig")
                        .about("Generate configuration template"));

    let result = match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
            Ok(())
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("cover", Some(sub_m)) => {
                init_logger(sub_m);
                cover(sub_m)
            }
            ("tile", Some(sub_m)) => {
                init_logger(sub_m);
                tile(sub_m)
            }
            ("bounds", Some(sub_m)) => {
                init_logger(sub_m);
                bounds(sub_m)
            }
            ("neighbours", Some(sub_m)) => {
                init_logger(sub_m);
                neighbours(sub_m)
            }
            ("distance", Some(sub_m)) => {
                init_logger(sub_m);
                distance(sub_m)
            }
            ("genconfig", Some(_)) => {
                println!("{}", CoverSettings::gen_config());
                Ok(())
            }
            _ => {
                let _ = app.print_help();
                println!("");
                Ok(())
            }
        },
    };
    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
