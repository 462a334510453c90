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

//! The request handlers invoked by the function service.
//!
//! A handler instance is created once per process and reused for every
//! invocation the service routes to that process. Its state, the greeting
//! holder and the warm flag, therefore lives exactly as long as the warm
//! function instance.

use crate::configs::{EmptyFieldPolicy, HELLO_WORLD};
use crate::greeting::Greeting;
use crate::request::{Request, Response};
use lambda_runtime::LambdaEvent;
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// RequestHandler defines the interface the function entry points drive.
pub trait RequestHandler: Send + Sync {
    /// Serves one request.
    fn handle(&self, request: &Request) -> Response;

    /// Serves one event delivered by the Lambda runtime. The invocation
    /// context is only logged.
    fn handle_event(&self, event: LambdaEvent<Request>) -> Response {
        debug!(
            "Invocation {} of {}",
            event.context.request_id, event.context.invoked_function_arn
        );
        self.handle(&event.payload)
    }
}

/// The outcome of one invocation of [`Handler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Whether the instance had already served a request before this one.
    pub warm:     bool,
    /// The response returned to the caller.
    pub response: Response,
}

/// The greeting handler.
///
/// `field1` of a request replaces the greeting; every response carries the
/// greeting as it stands after the request was applied.
pub struct Handler {
    hello:   Arc<dyn Greeting>,
    is_warm: AtomicBool,
    policy:  EmptyFieldPolicy,
}

impl Handler {
    /// Creates a cold handler around an injected greeting holder.
    pub fn new(hello: Arc<dyn Greeting>) -> Self {
        Handler::with_policy(hello, EmptyFieldPolicy::default())
    }

    /// Creates a cold handler with an explicit empty `field1` policy.
    pub fn with_policy(hello: Arc<dyn Greeting>, policy: EmptyFieldPolicy) -> Self {
        Handler {
            hello,
            is_warm: AtomicBool::new(false),
            policy,
        }
    }

    /// Returns true once the handler has served a request.
    pub fn is_warm(&self) -> bool {
        self.is_warm.load(Ordering::SeqCst)
    }

    /// Returns the injected greeting holder.
    pub fn hello(&self) -> &Arc<dyn Greeting> {
        &self.hello
    }

    /// Serves one request and reports whether the instance was warm.
    pub fn invoke(&self, request: &Request) -> Invocation {
        // Exactly one invocation per instance observes a cold start.
        let warm = self.is_warm.swap(true, Ordering::SeqCst);
        info!("isWarm = {}", warm);

        info!("field1 = {:?}", request.field1);
        info!("field2 = {:?}", request.field2);
        info!("field3 = {:?}", request.field3);

        let value = match &request.field1 {
            Some(message) if self.policy.accepts(message) => Some(message.clone()),
            Some(_) => {
                debug!("Ignoring empty field1");
                None
            }
            None => None,
        };

        // Write and read back under one lock.
        Invocation {
            warm,
            response: Response::new(self.hello.update(value)),
        }
    }
}

impl RequestHandler for Handler {
    fn handle(&self, request: &Request) -> Response {
        self.invoke(request).response
    }
}

/// A handler without an injected greeting: always answers "Hello World".
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimalHandler;

impl RequestHandler for MinimalHandler {
    fn handle(&self, request: &Request) -> Response {
        info!("field1 = {:?}", request.field1);
        info!("field2 = {:?}", request.field2);
        info!("field3 = {:?}", request.field3);
        Response::new(HELLO_WORLD)
    }
}
