use std::path::{Path, PathBuf};

/// Name of the per-user and per-project configuration directory.
const DIR_NAME: &str = ".simulador";

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found — set $HOME environment variable")]
    HomeNotFound,
}

/// Centralized path construction for the `~/.simulador/` directory layout.
///
/// Use `resolve()` in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct SimuladorPaths {
    base_dir: PathBuf,
}

impl SimuladorPaths {
    /// Resolve paths from the user's home directory (`~/.simulador`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            base_dir: home.join(DIR_NAME),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// The base `~/.simulador` directory.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.base_dir.join("assets")
    }

    /// Logo shown in the sidebar header when no explicit `ui.logo_path` is set.
    pub fn default_logo(&self) -> PathBuf {
        self.assets_dir().join("logo.png")
    }

    pub fn user_config(&self) -> PathBuf {
        self.base_dir.join("config.toml")
    }

    /// Project-level config: `<project_root>/.simulador/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(DIR_NAME).join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_paths() -> SimuladorPaths {
        SimuladorPaths::from_dir(PathBuf::from("/home/user/.simulador"))
    }

    #[test]
    fn test_resolve_returns_ok_when_home_set() {
        // HOME is set in CI and dev environments
        let result = SimuladorPaths::resolve();
        assert!(result.is_ok());
        assert!(result.unwrap().base_dir().ends_with(".simulador"));
    }

    #[test]
    fn test_resolve_follows_home() {
        temp_env::with_var("HOME", Some("/tmp/simulador-home"), || {
            let paths = SimuladorPaths::resolve().unwrap();
            assert_eq!(
                paths.base_dir(),
                Path::new("/tmp/simulador-home/.simulador")
            );
        });
    }

    #[test]
    fn test_user_config() {
        assert_eq!(
            test_paths().user_config(),
            PathBuf::from("/home/user/.simulador/config.toml")
        );
    }

    #[test]
    fn test_default_logo_lives_under_assets() {
        assert_eq!(
            test_paths().default_logo(),
            PathBuf::from("/home/user/.simulador/assets/logo.png")
        );
    }

    #[test]
    fn test_project_config() {
        assert_eq!(
            SimuladorPaths::project_config(Path::new("/my/project")),
            PathBuf::from("/my/project/.simulador/config.toml")
        );
    }

    #[test]
    fn test_home_not_found_message() {
        assert!(PathError::HomeNotFound.to_string().contains("$HOME"));
    }
}
