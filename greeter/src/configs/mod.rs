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

//! This module provides the default configurations for Greeter.

mod greeter;
pub use self::greeter::{EmptyFieldPolicy, GreeterConfig, GREETER_CONF};

/// The literal greeting of the minimal handler.
pub const HELLO_WORLD: &str = "Hello World";

/// Environment variable that overrides `[greeting] default_message`.
pub const GREETER_DEFAULT_MESSAGE_ENV: &str = "GREETER_DEFAULT_MESSAGE";

/// Environment variable that overrides `[greeting] empty_field1`.
pub const GREETER_EMPTY_FIELD1_ENV: &str = "GREETER_EMPTY_FIELD1";
