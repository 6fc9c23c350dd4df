//! Console output for `--show-config`

use colored::Colorize;
use std::path::Path;
use twlc_infrastructure::ConfigLoader;

/// Formats configuration diagnostics for console display
pub struct ConfigReport;

impl ConfigReport {
    /// List the configuration sources in priority order, marking the ones found
    pub fn format_sources() -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n",
            "Configuration sources (in priority order):".cyan().bold()
        ));

        let env_found =
            std::env::vars_os().any(|(key, _)| key.to_string_lossy().starts_with("TWLC_"));
        output.push_str(&format!("  {} Env:     TWLC_*\n", Self::marker(env_found)));

        match ConfigLoader::project_config_path() {
            Some(path) => output.push_str(&format!(
                "  {} Project: {}\n",
                Self::marker(true),
                path.display()
            )),
            None => output.push_str(&format!(
                "  {} Project: ./twlc.toml or ./.twlc.toml\n",
                Self::marker(false)
            )),
        }

        if let Some(path) = ConfigLoader::global_config_path() {
            output.push_str(&format!(
                "  {} Global:  {}\n",
                Self::marker(path.exists()),
                path.display()
            ));
        }

        output.push_str(&format!(
            "  {} Default: built-in defaults\n",
            Self::marker(false)
        ));
        output
    }

    /// Resolved settings, ready to paste into `twlc.toml`
    pub fn format_resolved(toml: &str, log_file: &Path) -> String {
        format!(
            "\n{}\n{}\n{} {}\n",
            "Resolved settings:".cyan().bold(),
            toml.trim_end(),
            "Log file:".cyan().bold(),
            log_file.display()
        )
    }

    fn marker(found: bool) -> String {
        if found {
            "[FOUND]".green().to_string()
        } else {
            "[     ]".dimmed().to_string()
        }
    }
}
