//! Static resources shown by the shell.

use std::path::PathBuf;

use simulador_core::UiConfig;
use simulador_paths::SimuladorPaths;

/// Pick the logo image: the configured path, else `~/.simulador/assets/logo.png`.
///
/// Returns `None` when the chosen file does not exist; the shell then shows
/// the app title alone.
pub fn resolve_logo(ui: &UiConfig, paths: Option<&SimuladorPaths>) -> Option<PathBuf> {
    let candidate = match &ui.logo_path {
        Some(path) => path.clone(),
        None => paths?.default_logo(),
    };

    if candidate.is_file() {
        tracing::debug!(event = "ui.assets.logo_found", path = %candidate.display());
        Some(candidate)
    } else {
        tracing::warn!(event = "ui.assets.logo_missing", path = %candidate.display());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_configured_logo_wins() {
        let dir = tempfile::tempdir().unwrap();
        let logo = dir.path().join("marca.png");
        fs::write(&logo, b"png").unwrap();
        let paths = SimuladorPaths::from_dir(dir.path().join(".simulador"));

        let ui = UiConfig {
            logo_path: Some(logo.clone()),
            ..Default::default()
        };
        assert_eq!(resolve_logo(&ui, Some(&paths)), Some(logo));
    }

    #[test]
    fn test_falls_back_to_assets_dir() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SimuladorPaths::from_dir(dir.path().join(".simulador"));
        fs::create_dir_all(paths.assets_dir()).unwrap();
        fs::write(paths.default_logo(), b"png").unwrap();

        let resolved = resolve_logo(&UiConfig::default(), Some(&paths));
        assert_eq!(resolved, Some(paths.default_logo()));
    }

    #[test]
    fn test_missing_logo_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SimuladorPaths::from_dir(dir.path().join(".simulador"));
        assert_eq!(resolve_logo(&UiConfig::default(), Some(&paths)), None);
        assert_eq!(resolve_logo(&UiConfig::default(), None), None);
    }
}
