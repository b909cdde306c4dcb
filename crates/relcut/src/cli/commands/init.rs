//! Init command

use clap::Args;
use console::style;
use tracing::info;

use relcut_core::config::defaults::{
    default_config_toml, DEFAULT_CONFIG_TOML, DEFAULT_FRAGMENT_TEMPLATE,
};
use relcut_core::config::Config;

use crate::cli::output;
use crate::cli::Cli;

/// Initialize relcut configuration and changelog files
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, "executing init command");
        let cwd = std::env::current_dir()?;

        let config_path = cwd.join(DEFAULT_CONFIG_TOML);
        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, default_config_toml())?;
        if !cli.quiet {
            output::success(&format!(
                "Wrote {}",
                style(config_path.display()).cyan()
            ));
        }

        // Seed the changelog directory with the template and a fresh fragment
        let config = Config::default();
        let dir = cwd.join(&config.changelog.dir);
        std::fs::create_dir_all(&dir)?;

        let template_path = dir.join(&config.changelog.template_file);
        if !template_path.exists() || self.force {
            std::fs::write(&template_path, DEFAULT_FRAGMENT_TEMPLATE)?;
            if !cli.quiet {
                output::success(&format!("Wrote {}", style(template_path.display()).cyan()));
            }
        }

        let fragment_path = dir.join(&config.changelog.fragment_file);
        if !fragment_path.exists() {
            std::fs::write(&fragment_path, DEFAULT_FRAGMENT_TEMPLATE)?;
            if !cli.quiet {
                output::success(&format!("Wrote {}", style(fragment_path.display()).cyan()));
            }
        } else if !cli.quiet {
            output::warning(&format!(
                "Fragment already exists at {}, leaving it in place",
                fragment_path.display()
            ));
        }

        Ok(())
    }
}
