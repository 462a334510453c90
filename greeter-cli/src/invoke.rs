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

//! Greeter CLI invokes the handler locally with JSON events.
//!
//! All events of one run are served by the same handler instance, in the
//! order they are given, so the run behaves like a single warm function
//! instance receiving them one after another.

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use greeter::prelude::{AppComponent, MinimalHandler, Request, RequestHandler, Response};
use log::info;
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};

pub fn command(matches: &ArgMatches, component: &AppComponent) -> Result<()> {
    let paths = matches
        .values_of("event")
        .map(|values| values.collect::<Vec<_>>())
        .unwrap_or_default();

    let handler: Box<dyn RequestHandler> = if matches.is_present("minimal") {
        Box::new(MinimalHandler)
    } else {
        Box::new(component.handler())
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for response in run(handler.as_ref(), &paths)? {
        writeln!(out, "{}", serde_json::to_string(&response)?)?;
    }

    Ok(())
}

pub fn command_args() -> Command<'static> {
    Command::new("invoke")
        .about("Invokes the greeter function locally with JSON events")
        .arg(
            Arg::new("event")
                .short('e')
                .long("event")
                .value_name("FILE")
                .help("Reads an event (or an array of events) from a JSON file, `-` for stdin")
                .takes_value(true)
                .multiple_occurrences(true)
                .required(true),
        )
        .arg(
            Arg::new("minimal")
                .short('m')
                .long("minimal")
                .help("Invokes the minimal handler instead of the greeter handler"),
        )
}

/// Reads every event first, then serves them in order with one handler.
///
/// # Arguments
/// * `handler` - The handler instance shared by all events.
/// * `paths` - The event files, `-` meaning stdin.
pub fn run(handler: &dyn RequestHandler, paths: &[&str]) -> Result<Vec<Response>> {
    let mut requests = vec![];
    for path in paths {
        requests.extend(read_events(path)?);
    }

    info!("Invoking the handler with {} event(s).", requests.len());
    Ok(requests
        .iter()
        .map(|request| handler.handle(request))
        .collect())
}

/// Reads the events in a file.
///
/// The file holds either one event object or an array of event objects.
fn read_events(path: &str) -> Result<Vec<Request>> {
    let text = if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read events from stdin")?;
        text
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read event file {}", path))?
    };
    parse_events(&text).with_context(|| format!("Invalid event in {}", path))
}

fn parse_events(text: &str) -> Result<Vec<Request>> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(events) => Ok(events
            .into_iter()
            .map(serde_json::from_value)
            .collect::<serde_json::Result<Vec<Request>>>()?),
        event => Ok(vec![serde_json::from_value(event)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greeter::prelude::GreeterConfig;
    use std::path::PathBuf;

    fn event_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "greeter-cli-{}-{}.json",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    fn messages(responses: Vec<Response>) -> Vec<String> {
        responses.into_iter().map(|r| r.message).collect()
    }

    #[test]
    fn events_share_one_warm_instance() -> Result<()> {
        let first = event_file("first", r#"{"key1": "Hi", "key2": "b", "key3": "c"}"#);
        let second = event_file("second", r#"{"field2": "b"}"#);
        let component = AppComponent::from_config(GreeterConfig::default());
        let handler = component.handler();

        let paths = [first.to_str().unwrap(), second.to_str().unwrap()];
        let responses = run(&handler, &paths)?;
        assert_eq!(messages(responses), vec!["Hi", "Hi"]);
        assert!(handler.is_warm());

        fs::remove_file(first)?;
        fs::remove_file(second)?;
        Ok(())
    }

    #[test]
    fn arrays_replay_in_order() -> Result<()> {
        let events = event_file(
            "array",
            r#"[{}, {"field1": "Hi"}, {"field1": null}, {"field1": "Hey"}]"#,
        );
        let component = AppComponent::from_config(GreeterConfig::default());

        let responses = run(&component.handler(), &[events.to_str().unwrap()])?;
        assert_eq!(messages(responses), vec!["Hello World", "Hi", "Hi", "Hey"]);

        let responses = run(&MinimalHandler, &[events.to_str().unwrap()])?;
        assert!(messages(responses).iter().all(|m| m == "Hello World"));

        fs::remove_file(events)?;
        Ok(())
    }

    #[test]
    fn shipped_events_parse() -> Result<()> {
        let requests = parse_events(include_str!("../events/event.json"))?;
        assert_eq!(
            requests,
            vec![Request::new(Some("value1"), Some("value2"), Some("value3"))]
        );

        let component = AppComponent::from_config(GreeterConfig::default());
        let handler = component.handler();
        let responses = parse_events(include_str!("../events/warm.json"))?
            .iter()
            .map(|request| handler.handle(request))
            .collect::<Vec<_>>();
        assert_eq!(messages(responses), vec!["Hello World", "Hi", "Hi", ""]);
        Ok(())
    }

    #[test]
    fn bad_events_fail_before_invoking() {
        let good = event_file("good", r#"{"field1": "Hi"}"#);
        let bad = event_file("bad", r#"{"field1": 42}"#);
        let component = AppComponent::from_config(GreeterConfig::default());
        let handler = component.handler();

        let result = run(&handler, &[good.to_str().unwrap(), bad.to_str().unwrap()]);
        assert!(result.is_err());
        assert!(!handler.is_warm());
        assert_eq!(component.hello().message(), "Hello World");

        assert!(run(&handler, &["/definitely/not/here.json"]).is_err());

        fs::remove_file(good).unwrap();
        fs::remove_file(bad).unwrap();
    }
}
