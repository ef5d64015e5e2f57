use log::Level;
use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Key for the fallback maps embed, taken from the build environment.
pub fn maps_api_key() -> &'static str {
    option_env!("MAPS_EMBED_API_KEY").unwrap_or("")
}

pub const MAPS_EMBED_BASE: &str = "https://www.google.com/maps/embed/v1/place";

/// Shared site configuration, loaded once from `config.json`.
///
/// Every field is required. Sections read colors and therapist details
/// straight from here, so a missing value fails the load instead of
/// rendering a default.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub site_name: String,
    pub site_description: String,
    pub therapist: Therapist,
    pub location: Location,
    pub colors: Colors,
    pub fonts: Fonts,
    pub social: Social,
    pub metadata: Metadata,
    pub crisis_help: CrisisHelp,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Therapist {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub working_hours: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub address: String,
    pub map_url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Colors {
    pub primary: String,
    pub primary_light: String,
    pub secondary: String,
    pub secondary_light: String,
    pub accent: String,
    pub accent_light: String,
    pub dark: String,
    pub light: String,
    pub white: String,
    pub black: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub background: String,
    pub background_light: String,
    pub background_dark: String,
}

impl Colors {
    fn slots(&self) -> [(&'static str, &str); 15] {
        [
            ("primary", self.primary.as_str()),
            ("primary-light", self.primary_light.as_str()),
            ("secondary", self.secondary.as_str()),
            ("secondary-light", self.secondary_light.as_str()),
            ("accent", self.accent.as_str()),
            ("accent-light", self.accent_light.as_str()),
            ("dark", self.dark.as_str()),
            ("light", self.light.as_str()),
            ("white", self.white.as_str()),
            ("black", self.black.as_str()),
            ("text-primary", self.text_primary.as_str()),
            ("text-secondary", self.text_secondary.as_str()),
            ("background", self.background.as_str()),
            ("background-light", self.background_light.as_str()),
            ("background-dark", self.background_dark.as_str()),
        ]
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Fonts {
    pub heading: String,
    pub body: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Social {
    pub facebook: String,
    pub instagram: String,
    pub linkedin: String,
}

impl Social {
    /// Configured profiles as (label, url), skipping empty ones.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", self.facebook.as_str()),
            ("Instagram", self.instagram.as_str()),
            ("LinkedIn", self.linkedin.as_str()),
        ]
        .into_iter()
        .filter(|(_, url)| !url.trim().is_empty())
        .collect()
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CrisisHelp {
    pub phone_number: String,
    pub availability_text: String,
}

impl SiteConfig {
    /// Inline style for the page root: every palette slot and both fonts as
    /// CSS custom properties.
    pub fn theme_style(&self) -> String {
        let mut style: String = self
            .colors
            .slots()
            .iter()
            .map(|(slot, value)| format!("--color-{}: {}; ", slot, value))
            .collect();
        style.push_str(&format!(
            "--font-heading: {}; --font-body: {};",
            self.fonts.heading, self.fonts.body
        ));
        style
    }
}

/// Appends a two digit hex alpha to a `#rrggbb` color.
pub fn tint(color: &str, alpha_hex: &str) -> String {
    format!("{}{}", color, alpha_hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tint_appends_alpha() {
        assert_eq!(tint("#4a7c74", "20"), "#4a7c7420");
    }

    #[test]
    fn social_links_skip_empty_profiles() {
        let social = Social {
            facebook: "https://facebook.com/gabinet".into(),
            instagram: "  ".into(),
            linkedin: String::new(),
        };
        assert_eq!(social.links(), vec![("Facebook", "https://facebook.com/gabinet")]);
    }
}
