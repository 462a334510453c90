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

//! The greeting holder injected into the handler.

use crate::configs::HELLO_WORLD;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A holder of the message the handler echoes back.
///
/// The holder is shared between the composition root and the handler, so
/// writes go through `&self`.
pub trait Greeting: Send + Sync {
    /// Returns the current message.
    fn message(&self) -> String;
    /// Overwrites the current message unconditionally.
    fn set_message(&self, value: String);
    /// Overwrites the message with `value` if there is one and returns the
    /// message as it stands afterwards, as one atomic step.
    fn update(&self, value: Option<String>) -> String;
}

/// The greeting holder used by the function.
#[derive(Debug)]
pub struct HelloWorld {
    message: Mutex<String>,
}

impl HelloWorld {
    /// Creates a holder with the given initial message.
    pub fn new(message: impl Into<String>) -> Self {
        HelloWorld {
            message: Mutex::new(message.into()),
        }
    }

    // A writer that panicked mid-assignment still leaves a valid `String`.
    fn lock(&self) -> MutexGuard<'_, String> {
        self.message.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HelloWorld {
    fn default() -> Self {
        HelloWorld::new(HELLO_WORLD)
    }
}

impl Greeting for HelloWorld {
    fn message(&self) -> String {
        self.lock().clone()
    }

    fn set_message(&self, value: String) {
        *self.lock() = value;
    }

    fn update(&self, value: Option<String>) -> String {
        let mut message = self.lock();
        if let Some(value) = value {
            *message = value;
        }
        message.clone()
    }
}
