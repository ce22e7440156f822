use gold_rupee_core::errors::CoreError;
use gold_rupee_core::models::settings::Settings;
use std::path::PathBuf;

/// Resolve settings: defaults, then environment, then flags.
///
/// `lookup` stands in for `std::env::var`.
pub fn resolve_settings<F>(
    lookup: F,
    port: Option<u16>,
    data_files: &[PathBuf],
    public_dir: Option<PathBuf>,
) -> Result<Settings, CoreError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default().apply_env(lookup)?;
    if let Some(port) = port {
        settings.port = port;
    }
    if !data_files.is_empty() {
        settings.data_files = data_files.to_vec();
    }
    if let Some(dir) = public_dir {
        settings.public_dir = dir;
    }
    if settings.window_years == 0 {
        return Err(CoreError::InvalidConfig(
            "window must be at least one year".into(),
        ));
    }
    Ok(settings)
}

/// `resolve_settings` against the process environment.
///
/// `.env` is loaded once by `main` before any command runs.
pub fn load_settings(
    port: Option<u16>,
    data_files: &[PathBuf],
    public_dir: Option<PathBuf>,
) -> Result<Settings, CoreError> {
    resolve_settings(|key| std::env::var(key).ok(), port, data_files, public_dir)
}
