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

//! The `aws` module contains the AWS Lambda glue of the `greeter-function`
//! library.
//!
//! The Lambda service keeps a function process alive between invocations
//! and feeds it events one at a time. [`serve`] takes one handler instance
//! and hands every event of the process to it, which is what keeps the
//! greeting and the warm flag alive across invocations.

use greeter::prelude::{GreeterConfig, Request, RequestHandler, Response};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::info;
use std::sync::Arc;

/// Builds the logger of a function process.
///
/// The configured level is the default filter; `RUST_LOG` refines it.
pub fn logger(config: &GreeterConfig) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.log_level);
    builder.parse_env("RUST_LOG");
    builder
}

/// Serves one Lambda event with the given handler.
pub async fn invoke<H>(handler: &H, event: LambdaEvent<Request>) -> Result<Response, Error>
where
    H: RequestHandler + ?Sized,
{
    Ok(handler.handle_event(event))
}

/// Runs the Lambda runtime loop until the process is reclaimed.
///
/// # Arguments
/// * `handler` - The handler instance shared by every invocation of this
///   process.
pub async fn serve<H>(handler: Arc<H>) -> Result<(), Error>
where
    H: RequestHandler + 'static,
{
    info!(
        "AWS Lambda function architecture: {}",
        std::env::consts::ARCH
    );
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Request>| {
        let handler = handler.clone();
        async move { invoke(handler.as_ref(), event).await }
    }))
    .await
}
