//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod cover;

pub use self::config::{parse_config, read_config, ApplicationCfg, Config};
pub use self::cover::{CoverSettings, OutputFormat};
