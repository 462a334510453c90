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

//! The composition root of the function.
//!
//! `AppComponent` owns the one greeting holder of a process and injects it
//! into the handler it builds. Entry points create a single component at
//! startup and keep the handler alive for the lifetime of the process.

use crate::configs::GreeterConfig;
use crate::error::Result;
use crate::greeting::{Greeting, HelloWorld};
use crate::handler::Handler;
use log::info;
use std::sync::Arc;

/// Wires the greeting holder into the handler.
pub struct AppComponent {
    config: GreeterConfig,
    hello:  Arc<dyn Greeting>,
}

impl AppComponent {
    /// Creates the component from the embedded settings and the environment.
    pub fn create() -> Result<Self> {
        Ok(AppComponent::from_config(GreeterConfig::load()?))
    }

    /// Creates the component from an explicit configuration.
    pub fn from_config(config: GreeterConfig) -> Self {
        info!(
            "Greeting holder starts with {:?}, empty field1 policy: {}",
            config.default_message, config.empty_field1
        );
        let hello: Arc<dyn Greeting> = Arc::new(HelloWorld::new(config.default_message.as_str()));
        AppComponent { config, hello }
    }

    /// Returns the settings the component was built from.
    pub fn config(&self) -> &GreeterConfig {
        &self.config
    }

    /// Returns the greeting holder. Every call yields the same instance.
    pub fn hello(&self) -> Arc<dyn Greeting> {
        self.hello.clone()
    }

    /// Builds a cold handler around the component's greeting holder.
    pub fn handler(&self) -> Handler {
        Handler::with_policy(self.hello(), self.config.empty_field1)
    }
}
