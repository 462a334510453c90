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

//! Greeter error types

use std::error;
use std::fmt::{Display, Formatter};
use std::io;
use std::result;

/// Result type for operations that could result in an [GreeterError]
pub type Result<T> = result::Result<T, GreeterError>;

/// Greeter error
#[derive(Debug)]
pub enum GreeterError {
    /// Error associated to I/O operations and associated traits.
    IoError(io::Error),
    /// Error returned when a configuration file is not valid INI.
    Ini(ini::ParseError),
    /// Error returned when a configuration value is missing or malformed.
    Config(String),
}

impl From<io::Error> for GreeterError {
    fn from(e: io::Error) -> Self {
        GreeterError::IoError(e)
    }
}

impl From<ini::ParseError> for GreeterError {
    fn from(e: ini::ParseError) -> Self {
        GreeterError::Ini(e)
    }
}

impl From<ini::Error> for GreeterError {
    fn from(e: ini::Error) -> Self {
        match e {
            ini::Error::Io(e) => GreeterError::IoError(e),
            ini::Error::Parse(e) => GreeterError::Ini(e),
        }
    }
}

impl Display for GreeterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            GreeterError::IoError(ref desc) => write!(f, "IO error: {}", desc),
            GreeterError::Ini(ref desc) => write!(f, "INI error: {}", desc),
            GreeterError::Config(ref desc) => write!(f, "Configuration error: {}", desc),
        }
    }
}

impl error::Error for GreeterError {}
