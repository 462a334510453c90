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

//! The main entry point for the greeter lambda function.

use greeter::prelude::*;
use greeter_function::aws;
use std::sync::Arc;

#[cfg(feature = "snmalloc")]
#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> std::result::Result<(), lambda_runtime::Error> {
    let config = GreeterConfig::load()?;
    aws::logger(&config).init();

    // One component and one handler per process: every invocation routed to
    // this instance shares the greeting and the warm flag.
    let component = AppComponent::from_config(config);
    aws::serve(Arc::new(component.handler())).await
}
