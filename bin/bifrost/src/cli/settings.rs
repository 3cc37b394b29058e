// This file is part of Bifrost.
//
// Bifrost is free software: you can redistribute it and/or modify it under the
// terms of the GNU Lesser General Public License as published by the Free Software
// Foundation, either version 3 of the License, or (at your option) any later version.
//
// Bifrost is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with Bifrost.
// If not, see https://www.gnu.org/licenses/.

use anyhow::Context;
use bifrost_types::RetryableSettings;
use config::{Config, Environment, File, FileFormat};

/// Resolve the retryable settings.
///
/// Sources in increasing priority:
/// - defaults
/// - settings file
/// - `BIFROST_*` environment variables
pub fn resolve_settings(file: Option<&str>) -> anyhow::Result<RetryableSettings> {
    let default = serde_json::to_string(&RetryableSettings::default())
        .context("should serialize default settings")?;
    let mut config_builder =
        Config::builder().add_source(File::from_str(default.as_str(), FileFormat::Json));

    if let Some(file) = file {
        config_builder = config_builder.add_source(File::with_name(file));
    }

    config_builder
        .add_source(Environment::with_prefix("BIFROST"))
        .build()
        .context("failed to build settings")?
        .try_deserialize()
        .context("failed to deserialize settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = resolve_settings(None).unwrap();
        assert_eq!(settings, RetryableSettings::default());
    }

    #[test]
    fn test_missing_file() {
        assert!(resolve_settings(Some("does/not/exist.toml")).is_err());
    }
}
