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

mod args;
mod invoke;

use anyhow::Result;
use clap::{crate_version, ArgMatches, Command};
use greeter::prelude::{AppComponent, GreeterConfig};
use std::io;

fn cli() -> Command<'static> {
    Command::new("Greeter")
        .version(crate_version!())
        .about("Command Line Tool for the Greeter function")
        .author("UMD Database Group")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .args(args::get_args())
        .subcommand(invoke::command_args())
        .subcommand(Command::new("config").about("Prints the effective configuration"))
}

fn config(global_matches: &ArgMatches, matches: &ArgMatches) -> Result<GreeterConfig> {
    match matches
        .value_of("config")
        .or_else(|| global_matches.value_of("config"))
    {
        Some(path) => Ok(GreeterConfig::from_file(path)?),
        None => Ok(GreeterConfig::load()?),
    }
}

pub fn main() -> Result<()> {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some((name, sub_matches)) => {
            let config = config(&matches, sub_matches)?;
            let level = args::level_override(&matches, sub_matches).unwrap_or(config.log_level);
            args::logger(level).init();

            let component = AppComponent::from_config(config);
            match name {
                "invoke" => invoke::command(sub_matches, &component)?,
                "config" => component.config().to_ini().write_to(&mut io::stdout())?,
                _ => unreachable!("subcommands are required"),
            }
        }
        None => unreachable!("subcommands are required"),
    }

    Ok(())
}
