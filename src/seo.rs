use serde::Serialize;
use thiserror::Error;

use crate::config::SiteConfig;
use crate::profile::{AVATAR_PATH, NAME};

pub const JSON_LD_MIME: &str = "application/ld+json";
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Error, Debug)]
pub enum SeoError {
    #[error("Couldn't serialize structured data: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
}

/// schema.org `WebPage` describing the home page. The avatar is listed as
/// both logo and image so search results can show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub logo: String,
    pub url: String,
    pub image: String,
    pub author: Person,
}

impl StructuredData {
    pub fn for_site(config: &SiteConfig) -> Self {
        let avatar = config.asset_url(AVATAR_PATH);
        Self {
            context: SCHEMA_CONTEXT.to_string(),
            kind: "WebPage".to_string(),
            name: NAME.to_string(),
            logo: avatar.clone(),
            url: config.site_url.clone(),
            image: avatar,
            author: Person {
                kind: "Person".to_string(),
                name: NAME.to_string(),
            },
        }
    }
}

/// Serializes `data` as JSON that can sit inside a `<script>` element.
///
/// `<`, `>` and `&` only ever occur inside JSON strings, where they are
/// replaced by their `\u` escapes; the result parses to the same value but
/// cannot terminate the surrounding script tag.
pub fn to_json_ld<T: Serialize + ?Sized>(data: &T) -> Result<String, SeoError> {
    let json = serde_json::to_string(data)?;
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            c => out.push(c),
        }
    }
    Ok(out)
}
