/// Fallback used when `SITE_URL` is unset or empty at build time.
pub const DEFAULT_SITE_URL: &str = "https://www.youngbryanyu.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_url: String,
}

impl SiteConfig {
    /// Builds the config from the raw value of the `SITE_URL` variable.
    ///
    /// No validation happens here: whatever was configured ends up in the
    /// page metadata verbatim.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let site_url = match value {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => DEFAULT_SITE_URL.to_string(),
        };
        Self { site_url }
    }

    /// Reads `SITE_URL` as it was when the crate was compiled.
    /// `option_env!` only accepts a string literal, so the name is spelled
    /// out here and in `build.rs`.
    pub fn load() -> Self {
        Self::from_env_value(option_env!("SITE_URL"))
    }

    pub fn asset_url(&self, path: &str) -> String {
        format!("{}{}", self.site_url, path)
    }
}
