use std::{fs, path::Path};

use anyhow::Context;
use client_core::normalize_base_url;
use serde::Deserialize;
use tracing::warn;
use url::Url;

pub const DEFAULT_SETTINGS_FILE: &str = "portfolio.toml";

/// Runtime settings for the portfolio window. Layering order:
/// defaults -> `portfolio.toml` -> environment -> command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub owner_name: String,
    pub owner_role: String,
    pub tagline: String,
    pub resume_url: String,
    pub github_url: String,
    pub linkedin_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://routerback.ntgen1.in/api/v1".into(),
            owner_name: "Shrey Bhardwaj".into(),
            owner_role: "Full-Stack Developer".into(),
            tagline: "Building scalable web applications with modern technologies".into(),
            resume_url: "https://routerback.ntgen1.in/Shrey_Bhardwaj_Resume.pdf".into(),
            github_url: "https://github.com/I-am-shreybhardwaj".into(),
            linkedin_url: "https://www.linkedin.com/in/shrey-bhardwaj-15a912202/".into(),
        }
    }
}

/// Optional per-key overrides read from the settings file.
#[derive(Debug, Default, Deserialize)]
struct FileOverrides {
    api_base_url: Option<String>,
    owner_name: Option<String>,
    owner_role: Option<String>,
    tagline: Option<String>,
    resume_url: Option<String>,
    github_url: Option<String>,
    linkedin_url: Option<String>,
}

pub fn load_settings(settings_path: &Path) -> Settings {
    let mut settings = Settings::default();

    match read_settings_file(settings_path) {
        Ok(Some(overrides)) => apply_file_overrides(&mut settings, overrides),
        Ok(None) => {}
        Err(err) => warn!("ignoring malformed settings file: {err:#}"),
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings.normalized()
}

fn read_settings_file(path: &Path) -> anyhow::Result<Option<FileOverrides>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let overrides = toml::from_str(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    Ok(Some(overrides))
}

fn apply_file_overrides(settings: &mut Settings, overrides: FileOverrides) {
    if let Some(v) = overrides.api_base_url {
        settings.api_base_url = v;
    }
    if let Some(v) = overrides.owner_name {
        settings.owner_name = v;
    }
    if let Some(v) = overrides.owner_role {
        settings.owner_role = v;
    }
    if let Some(v) = overrides.tagline {
        settings.tagline = v;
    }
    if let Some(v) = overrides.resume_url {
        settings.resume_url = v;
    }
    if let Some(v) = overrides.github_url {
        settings.github_url = v;
    }
    if let Some(v) = overrides.linkedin_url {
        settings.linkedin_url = v;
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("PORTFOLIO_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = lookup("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = lookup("PORTFOLIO_RESUME_URL") {
        settings.resume_url = v;
    }
}

impl Settings {
    /// Trims the base URL and flags obviously unusable values; the window
    /// still opens with empty sections when the URL is bad.
    fn normalized(mut self) -> Self {
        self.api_base_url = normalize_base_url(self.api_base_url);
        if let Err(err) = Url::parse(&self.api_base_url) {
            warn!(
                base_url = %self.api_base_url,
                "configured API base URL does not parse: {err}"
            );
        }
        self
    }
}
