use std::path::PathBuf;

/// Which presentation variant the host asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// A trigger button that opens the search in a modal dialog.
    Button,
    /// Search, result list and detail fields always visible.
    Form,
}

impl std::fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresentationMode::Button => write!(f, "button"),
            PresentationMode::Form => write!(f, "form"),
        }
    }
}

impl std::str::FromStr for PresentationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "button" | "dialog" => Ok(PresentationMode::Button),
            "form" | "inline" => Ok(PresentationMode::Form),
            other => Err(format!("unknown presentation mode '{other}'")),
        }
    }
}

/// Host feature flags gating the optional sub-dialogs and search modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Features {
    pub show_title: bool,
    pub view_json: bool,
    pub view_map: bool,
    pub export_excel: bool,
    pub advanced_search: bool,
    /// Host-level disabled flag; every mutating action becomes a no-op.
    pub disabled: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            show_title: true,
            view_json: true,
            view_map: true,
            export_excel: true,
            advanced_search: true,
            disabled: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: PresentationMode,
    /// Page size for list searches, already clamped to `1..=100`.
    pub page_size: u32,
    pub features: Features,
    /// Country appended to forward-geocode queries.
    pub country: String,
    pub registry_base_url: String,
    pub geocoder_base_url: String,
    /// Raster tile template with `{z}`, `{x}` and `{y}` placeholders.
    pub tile_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub export_dir: PathBuf,
    pub log_level: String,
}
