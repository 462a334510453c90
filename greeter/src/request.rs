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

//! The records exchanged with the function service.

use serde::{Deserialize, Serialize};

/// The event a function invocation receives.
///
/// Every field is optional; an absent key and an explicit `null` both
/// deserialize to `None`. The legacy event keys `key1`, `key2` and `key3` are
/// accepted as aliases.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Replaces the greeting when present.
    #[serde(default, alias = "key1")]
    pub field1: Option<String>,
    /// Logged only.
    #[serde(default, alias = "key2")]
    pub field2: Option<String>,
    /// Logged only.
    #[serde(default, alias = "key3")]
    pub field3: Option<String>,
}

impl Request {
    /// Creates a request from its three fields.
    pub fn new(field1: Option<&str>, field2: Option<&str>, field3: Option<&str>) -> Self {
        Request {
            field1: field1.map(str::to_owned),
            field2: field2.map(str::to_owned),
            field3: field3.map(str::to_owned),
        }
    }
}

/// The record a function invocation returns.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// The greeting at the time the invocation returned.
    pub message: String,
}

impl Response {
    /// Creates a response carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Response {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_fields_are_optional() -> serde_json::Result<()> {
        let request: Request = serde_json::from_value(json!({}))?;
        assert_eq!(request, Request::default());

        let request: Request = serde_json::from_value(json!({
            "field1": null,
            "field2": "b",
        }))?;
        assert_eq!(request, Request::new(None, Some("b"), None));
        Ok(())
    }

    #[test]
    fn legacy_keys_are_accepted() -> serde_json::Result<()> {
        let request: Request = serde_json::from_value(json!({
            "key1": "value1",
            "key2": "value2",
            "key3": "value3",
        }))?;
        assert_eq!(
            request,
            Request::new(Some("value1"), Some("value2"), Some("value3"))
        );
        Ok(())
    }

    #[test]
    fn unknown_keys_are_ignored() -> serde_json::Result<()> {
        let request: Request = serde_json::from_value(json!({
            "field1": "Hi",
            "answer": 42,
        }))?;
        assert_eq!(request.field1.as_deref(), Some("Hi"));
        Ok(())
    }

    #[test]
    fn response_shape() -> serde_json::Result<()> {
        assert_eq!(
            serde_json::to_value(Response::new("Hello World"))?,
            json!({ "message": "Hello World" })
        );
        Ok(())
    }
}
