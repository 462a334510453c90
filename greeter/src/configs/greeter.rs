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

//! Configuration settings that affect all crates in current system.

use super::{GREETER_DEFAULT_MESSAGE_ENV, GREETER_EMPTY_FIELD1_ENV, HELLO_WORLD};
use crate::error::{GreeterError, Result};
use ini::Ini;
use lazy_static::lazy_static;
use log::LevelFilter;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

lazy_static! {
    /// Global settings.
    pub static ref GREETER_CONF: Ini = Ini::load_from_str(include_str!("./config.toml")).unwrap();
}

/// What a present but empty `field1` does to the greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyFieldPolicy {
    /// The empty string is a value like any other and replaces the greeting.
    Overwrite,
    /// The empty string is treated like an absent field.
    Ignore,
}

impl EmptyFieldPolicy {
    /// Returns true if `value` should be written into the greeting holder.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            EmptyFieldPolicy::Overwrite => true,
            EmptyFieldPolicy::Ignore => !value.is_empty(),
        }
    }
}

impl Default for EmptyFieldPolicy {
    fn default() -> Self {
        EmptyFieldPolicy::Overwrite
    }
}

impl FromStr for EmptyFieldPolicy {
    type Err = GreeterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(EmptyFieldPolicy::Overwrite),
            "ignore" => Ok(EmptyFieldPolicy::Ignore),
            other => Err(GreeterError::Config(format!(
                "unknown empty_field1 policy `{}`, expected `overwrite` or `ignore`",
                other
            ))),
        }
    }
}

impl fmt::Display for EmptyFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyFieldPolicy::Overwrite => write!(f, "overwrite"),
            EmptyFieldPolicy::Ignore => write!(f, "ignore"),
        }
    }
}

/// The typed view of the Greeter settings.
///
/// Values are layered: the embedded `config.toml` first, then an optional
/// configuration file, then the `GREETER_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreeterConfig {
    /// Greeting returned before any request has changed it.
    pub default_message: String,
    /// What a present but empty `field1` does to the greeting.
    pub empty_field1:    EmptyFieldPolicy,
    /// Default log filter of the function binaries.
    pub log_level:       LevelFilter,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        GreeterConfig {
            default_message: HELLO_WORLD.to_owned(),
            empty_field1:    EmptyFieldPolicy::default(),
            log_level:       LevelFilter::Info,
        }
    }
}

impl GreeterConfig {
    /// Loads the embedded settings and applies the environment overrides.
    pub fn load() -> Result<Self> {
        Self::from_ini(&GREETER_CONF)?.with_overrides(|key| std::env::var(key).ok())
    }

    /// Loads the embedded settings, layers the given file on top of them and
    /// applies the environment overrides.
    ///
    /// # Arguments
    /// * `path` - The path to an INI-formatted configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`GreeterConfig::from_file`], resolving the overrides through
    /// `lookup` instead of the process environment.
    pub fn from_file_with<P, F>(path: P, lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let conf = Ini::load_from_file(path)?;
        Self::from_ini(&GREETER_CONF)?
            .apply_ini(&conf)?
            .with_overrides(lookup)
    }

    /// Builds a configuration from the keys present in `conf`; missing keys
    /// keep their built-in defaults.
    pub fn from_ini(conf: &Ini) -> Result<Self> {
        Self::default().apply_ini(conf)
    }

    /// Replaces every setting that `conf` defines.
    pub fn apply_ini(mut self, conf: &Ini) -> Result<Self> {
        if let Some(message) = conf.get_from(Some("greeting"), "default_message") {
            self.default_message = message.to_owned();
        }
        if let Some(policy) = conf.get_from(Some("greeting"), "empty_field1") {
            self.empty_field1 = policy.parse()?;
        }
        if let Some(level) = conf.get_from(Some("log"), "level") {
            self.log_level = LevelFilter::from_str(level.trim())
                .map_err(|_| GreeterError::Config(format!("unknown log level `{}`", level)))?;
        }
        Ok(self)
    }

    /// Replaces the settings that have an environment override.
    ///
    /// # Arguments
    /// * `lookup` - Resolves an environment variable name to its value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(message) = lookup(GREETER_DEFAULT_MESSAGE_ENV) {
            self.default_message = message;
        }
        if let Some(policy) = lookup(GREETER_EMPTY_FIELD1_ENV) {
            self.empty_field1 = policy.parse()?;
        }
        Ok(self)
    }

    /// Renders the configuration back into INI form.
    pub fn to_ini(&self) -> Ini {
        let mut conf = Ini::new();
        conf.with_section(Some("greeting"))
            .set("default_message", self.default_message.as_str())
            .set("empty_field1", self.empty_field1.to_string());
        conf.with_section(Some("log"))
            .set("level", self.log_level.to_string().to_lowercase());
        conf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn setting_shows() -> Result<()> {
        let conf = Ini::load_from_str(include_str!("./config.toml")).unwrap();

        for (sec, prop) in &conf {
            println!("Section: {:?}", sec);
            for (key, value) in prop.iter() {
                println!("{:?}:{:?}", key, value);
            }
        }

        assert_eq!("Hello World", &conf["greeting"]["default_message"]);
        assert_eq!("overwrite", &conf["greeting"]["empty_field1"]);
        assert_eq!("info", &conf["log"]["level"]);

        Ok(())
    }

    #[test]
    fn embedded_config_matches_defaults() -> Result<()> {
        assert_eq!(GreeterConfig::from_ini(&GREETER_CONF)?, GreeterConfig::default());
        Ok(())
    }

    #[test]
    fn partial_ini_keeps_defaults() -> Result<()> {
        let conf = Ini::load_from_str("[greeting]\nempty_field1 = Ignore\n")?;
        let config = GreeterConfig::from_ini(&conf)?;
        assert_eq!(config.default_message, HELLO_WORLD);
        assert_eq!(config.empty_field1, EmptyFieldPolicy::Ignore);
        assert_eq!(config.log_level, LevelFilter::Info);
        Ok(())
    }

    #[test]
    fn bad_values_are_rejected() {
        let conf = Ini::load_from_str("[greeting]\nempty_field1 = sometimes\n").unwrap();
        assert!(matches!(
            GreeterConfig::from_ini(&conf),
            Err(GreeterError::Config(_))
        ));

        let conf = Ini::load_from_str("[log]\nlevel = loud\n").unwrap();
        assert!(matches!(
            GreeterConfig::from_ini(&conf),
            Err(GreeterError::Config(_))
        ));
    }

    #[test]
    fn environment_overrides_win() -> Result<()> {
        let config = GreeterConfig::default().with_overrides(|key| match key {
            GREETER_DEFAULT_MESSAGE_ENV => Some("Howdy".to_owned()),
            GREETER_EMPTY_FIELD1_ENV => Some("ignore".to_owned()),
            _ => None,
        })?;
        assert_eq!(config.default_message, "Howdy");
        assert_eq!(config.empty_field1, EmptyFieldPolicy::Ignore);

        let unchanged = GreeterConfig::default().with_overrides(|_| None)?;
        assert_eq!(unchanged, GreeterConfig::default());
        Ok(())
    }

    #[test]
    fn from_file_layers_over_embedded() -> Result<()> {
        let path = std::env::temp_dir().join(format!("greeter-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[greeting]\ndefault_message = From file\n[log]\nlevel = debug\n",
        )?;

        let from_file = GreeterConfig::from_file_with(&path, |_| None);
        let from_env = GreeterConfig::from_file_with(&path, |key| match key {
            GREETER_DEFAULT_MESSAGE_ENV => Some("From env".to_owned()),
            _ => None,
        });
        std::fs::remove_file(&path)?;

        let config = from_file?;
        assert_eq!(config.default_message, "From file");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.empty_field1, EmptyFieldPolicy::Overwrite);

        let config = from_env?;
        assert_eq!(config.default_message, "From env");
        assert_eq!(config.log_level, LevelFilter::Debug);
        Ok(())
    }

    #[test]
    fn from_file_rejects_bad_values() -> Result<()> {
        let path = std::env::temp_dir().join(format!("greeter-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[greeting]\nempty_field1 = sometimes\n")?;
        let result = GreeterConfig::from_file(&path);
        std::fs::remove_file(&path)?;

        assert!(matches!(result, Err(GreeterError::Config(_))));
        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("greeter-does-not-exist.toml");
        assert!(matches!(
            GreeterConfig::from_file(path),
            Err(GreeterError::IoError(_))
        ));
    }

    #[test]
    fn ini_round_trip() -> Result<()> {
        let config = GreeterConfig {
            default_message: "Hi there".to_owned(),
            empty_field1:    EmptyFieldPolicy::Ignore,
            log_level:       LevelFilter::Warn,
        };
        assert_eq!(GreeterConfig::from_ini(&config.to_ini())?, config);
        Ok(())
    }

    #[test]
    fn empty_field_policy() {
        assert!(EmptyFieldPolicy::Overwrite.accepts(""));
        assert!(EmptyFieldPolicy::Overwrite.accepts("Hi"));
        assert!(!EmptyFieldPolicy::Ignore.accepts(""));
        assert!(EmptyFieldPolicy::Ignore.accepts("Hi"));
        assert_eq!(" IGNORE ".parse::<EmptyFieldPolicy>().unwrap(), EmptyFieldPolicy::Ignore);
    }
}
