use crate::app::errors::ContextError;
use crate::app::models::{
    LanguageConfig, ResolvedConfig, CONTEXT_DIR_NAME, GLOBAL_CONFIG_NAME, LOCAL_CONFIG_NAME,
};
use crate::app::prompt::LanguagePicker;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const SELECT_MESSAGE: &str = "Select the programming language of the repository";

/// Language name → extension set, in the order the catalog file lists them.
#[derive(Debug, Clone, Default)]
pub struct ConfigCatalog {
    languages: Vec<(String, LanguageConfig)>,
}

impl ConfigCatalog {
    pub fn names(&self) -> Vec<String> {
        self.languages.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&LanguageConfig> {
        self.languages
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, cfg)| cfg)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

pub fn local_config_path(current_dir: &Path) -> PathBuf {
    current_dir.join(CONTEXT_DIR_NAME).join(LOCAL_CONFIG_NAME)
}

/// Where to look for the global catalog, in order.
///
/// An explicit install directory is the only place searched. Otherwise the
/// directory holding the executable comes first, then the per-user config dir.
pub fn catalog_locations(install_dir: Option<&Path>) -> Vec<PathBuf> {
    if let Some(dir) = install_dir {
        return vec![dir.join(GLOBAL_CONFIG_NAME)];
    }

    let mut locations = Vec::new();
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        locations.push(exe_dir.join(GLOBAL_CONFIG_NAME));
    }
    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("llm-context").join(GLOBAL_CONFIG_NAME));
    }
    locations
}

/// Local override first; otherwise pick from the catalog and persist the pick.
pub fn resolve_config(
    current_dir: &Path,
    catalog_locations: &[PathBuf],
    picker: &mut dyn LanguagePicker,
) -> Result<ResolvedConfig> {
    let local_path = local_config_path(current_dir);

    if local_path.exists() {
        log::info!("Found local configuration at: {}", local_path.display());
        let language = load_language_config(&local_path)?;
        validate(&language, &local_path)?;
        return Ok(ResolvedConfig {
            language,
            selected_language: None,
        });
    }

    let Some(catalog_path) = catalog_locations.iter().find(|p| p.exists()) else {
        let expected = catalog_locations
            .first()
            .cloned()
            .unwrap_or_else(|| PathBuf::from(GLOBAL_CONFIG_NAME));
        return Err(ContextError::ConfigNotFound { expected }.into());
    };

    log::info!("Using global configuration from: {}", catalog_path.display());
    let catalog = load_catalog(catalog_path)?;
    if catalog.is_empty() {
        return Err(ContextError::InvalidConfig {
            path: catalog_path.clone(),
            reason: "the catalog contains no language definitions".to_string(),
        }
        .into());
    }

    let selected = picker
        .pick(SELECT_MESSAGE, &catalog.names())?
        .ok_or(ContextError::NoLanguageSelected)?;
    let language = catalog
        .get(&selected)
        .cloned()
        .ok_or(ContextError::NoLanguageSelected)?;
    validate(&language, catalog_path)?;

    persist_local_config(&local_path, &language)?;
    log::info!(
        "Saved configuration for '{}' to {}",
        selected,
        local_path.display()
    );

    Ok(ResolvedConfig {
        language,
        selected_language: Some(selected),
    })
}

fn validate(language: &LanguageConfig, path: &Path) -> Result<(), ContextError> {
    if language.extensions.is_empty() {
        return Err(ContextError::InvalidConfig {
            path: path.to_path_buf(),
            reason: "the selected configuration has no 'extensions' defined".to_string(),
        });
    }
    Ok(())
}

fn read_config_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).context(format!("Failed to read config at {:?}", path))
}

fn invalid_json(path: &Path, err: serde_json::Error) -> ContextError {
    ContextError::InvalidConfig {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

pub fn load_language_config(path: &Path) -> Result<LanguageConfig> {
    let content = read_config_file(path)?;
    let parsed = serde_json::from_str(&content).map_err(|e| invalid_json(path, e))?;
    Ok(parsed)
}

pub fn load_catalog(path: &Path) -> Result<ConfigCatalog> {
    let content = read_config_file(path)?;
    let raw: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&content).map_err(|e| invalid_json(path, e))?;

    let mut languages = Vec::with_capacity(raw.len());
    for (name, value) in raw {
        let cfg: LanguageConfig = serde_json::from_value(value).map_err(|e| {
            ContextError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!("entry '{}': {}", name, e),
            }
        })?;
        languages.push((name, cfg));
    }
    Ok(ConfigCatalog { languages })
}

/// Writes the chosen language as the local config, four-space indented.
pub fn persist_local_config(path: &Path, language: &LanguageConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory {:?}", parent))?;
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    language
        .serialize(&mut ser)
        .context("Failed to serialize local configuration")?;

    fs::write(path, buf).context(format!("Failed to write config at {:?}", path))
}
