use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// The effective configuration (file or defaults) as YAML.
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{yaml}");
        Ok(())
    }

    /// Write the defaults to `path`. An existing file is kept unless `force`.
    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            warning(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            ));
            return Ok(());
        }

        Config::default().save_to(path)?;
        success(format!("Configuration file written: {}", path.display()));
        Ok(())
    }

    /// Open `path` in `--editor`, `$EDITOR`/`$VISUAL`, or the platform default,
    /// falling back to the default when the requested editor fails.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        if !path.exists() {
            info("No configuration file yet, writing defaults first.");
            Config::default().save_to(path)?;
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });
        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{editor_to_use}'"));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{default_editor}'"));
                Ok(())
            }
            Ok(s) => Err(AppError::Config(format!("editor '{default_editor}' exited with {s}"))),
            Err(e) => Err(AppError::Config(format!("cannot run '{default_editor}': {e}"))),
        }
    }
}
