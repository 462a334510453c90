// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Arguments shared by every subcommand.

use clap::{Arg, ArgMatches};
use log::LevelFilter;
use std::io::Write;
use std::str::FromStr;

pub fn get_args() -> Vec<Arg<'static>> {
    vec![
        Arg::new("config")
            .short('c')
            .long("config")
            .value_name("FILE")
            .help("Layers an INI file over the built-in settings")
            .global(true)
            .takes_value(true),
        Arg::new("log-level")
            .short('L')
            .long("log-level")
            .value_name("LEVEL")
            .value_parser(parse_level)
            .help("One of off, error, warn, info, debug, trace [default: the [log] level setting]")
            .global(true)
            .takes_value(true),
        Arg::new("trace")
            .long("trace")
            .help("Same as --log-level trace")
            .global(true)
            .takes_value(false),
        Arg::new("silent")
            .long("silent")
            .help("Same as --log-level off")
            .global(true)
            .takes_value(false),
    ]
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(s).map_err(|_| format!("unknown log level `{}`", s))
}

/// The level the command line asks for; `None` defers to the configuration.
pub fn level_override(global_matches: &ArgMatches, matches: &ArgMatches) -> Option<LevelFilter> {
    if matches.is_present("trace") {
        Some(LevelFilter::Trace)
    } else if matches.is_present("silent") {
        Some(LevelFilter::Off)
    } else {
        matches
            .get_one::<LevelFilter>("log-level")
            .or_else(|| global_matches.get_one::<LevelFilter>("log-level"))
            .copied()
    }
}

/// A logger writing `[level] message` lines, with timestamps at trace level.
pub fn logger(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    if level == LevelFilter::Trace {
        builder.format_timestamp_secs();
    } else {
        builder.format(|f, record| {
            writeln!(
                f,
                "[{}] {}",
                record.level().as_str().to_lowercase(),
                record.args()
            )
        });
    }

    builder
}
