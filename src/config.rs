use serde::Deserialize;
use std::{env, fs, path::Path, path::PathBuf};

pub const DEFAULT_TITLE: &str = "OpenAI Market Analysis Report";

/// Runtime configuration for a desk session.
///
/// Every field has a default so an empty `{}` (or no file at all) is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Initial page title.
    pub title: String,
    /// Start in night (dark) mode.
    pub night_mode: bool,
    /// Height of the viewport in pixels; one `scrollPage` moves this far.
    pub viewport_height: f64,
    /// Tick interval of the auto-scroll task.
    pub auto_scroll_interval_ms: u64,
    /// Seed for the market-data generator. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Display name recorded as the author of annotations and snippets.
    pub user: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            night_mode: true,
            viewport_height: 900.0,
            auto_scroll_interval_ms: 16,
            seed: None,
            user: "Brian Scott".to_string(),
        }
    }
}

impl DeskConfig {
    /// Resolve and load the config file, falling back to defaults when none exists.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match resolve_desk_config_path(explicit)? {
            Some(path) => {
                tracing::info!("Loading desk config from {}", path.display());
                Self::from_file(&path)
            }
            None => {
                tracing::info!("No desk config found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let cfg: DeskConfig = serde_json::from_str(raw)?;
        cfg.expanded().validated()
    }

    fn expanded(mut self) -> Self {
        self.title = expand_env_vars(&self.title);
        self.user = expand_env_vars(&self.user);
        self
    }

    fn validated(self) -> anyhow::Result<Self> {
        if !(self.viewport_height.is_finite() && self.viewport_height > 0.0) {
            return Err(anyhow::anyhow!(
                "viewport_height must be a positive number, got {}",
                self.viewport_height
            ));
        }
        if self.auto_scroll_interval_ms == 0 {
            return Err(anyhow::anyhow!("auto_scroll_interval_ms must be at least 1"));
        }
        Ok(self)
    }
}

/// Locate the config file.
///
/// Order: explicit path, `$DESK_CONFIG`, `$XDG_CONFIG_HOME/research-desk/desk.json`,
/// `./desk.json`. An explicit path that does not exist is an error; the
/// implicit locations are simply skipped.
pub fn resolve_desk_config_path(explicit: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    if let Some(p) = explicit {
        if !p.exists() {
            return Err(anyhow::anyhow!("Config file {} does not exist", p.display()));
        }
        return Ok(Some(p.to_path_buf()));
    }

    if let Ok(p) = env::var("DESK_CONFIG") {
        return Ok(Some(PathBuf::from(p)));
    }

    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let candidate = PathBuf::from(xdg).join("research-desk").join("desk.json");
        if candidate.exists() {
            return Ok(Some(candidate));
        }
    }

    let candidate = PathBuf::from("desk.json");
    if candidate.exists() {
        return Ok(Some(candidate));
    }

    Ok(None)
}

fn expand_env_vars(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next(); // consume '{'
            let mut name = String::new();
            for c in chars.by_ref() {
                if c == '}' {
                    break;
                }
                name.push(c);
            }
            match env::var(&name) {
                Ok(val) => out.push_str(&val),
                Err(_) => {
                    out.push_str("${");
                    out.push_str(&name);
                    out.push('}');
                }
            }
        } else {
            out.push(ch);
        }
    }

    out
}
