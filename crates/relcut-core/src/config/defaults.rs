//! Default configuration values

use super::types::Config;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "relcut.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "relcut.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".relcut.toml",
        ".relcut.yaml",
    ]
}

/// Generate default configuration TOML
pub fn default_config_toml() -> String {
    let config = Config::default();
    toml::to_string(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r####"# relcut configuration

[changelog]
dir = "docs/changelogs"
fragment_file = "latest.md"
template_file = "default.md"
manifest = "manifest.json"

[notes]
feature_headings = ["### New Features", "### Feature Updates"]
excluded_headings = ["### Translation Changes", "### Development Chores"]
translation_heading = "### Translation Changes"
base_url = "https://github.com/example/project/blob/main/docs/changelogs"
output = "temp_notes.md"
"####;

/// Default contents for the template and a freshly reset fragment
pub const DEFAULT_FRAGMENT_TEMPLATE: &str = "\
### New Features

### Feature Updates

### Bugfixes

### Translation Changes

### Development Chores
";
