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

#![warn(missing_docs, clippy::needless_borrow)]

//! Greeter is a small cloud function that echoes a greeting back to the
//! caller. The greeting lives in a holder that survives across invocations
//! of a warm function instance, so a request can change what every later
//! request sees.

pub mod component;
pub mod configs;
pub mod error;
pub mod greeting;
pub mod handler;
pub mod prelude;
pub mod request;
