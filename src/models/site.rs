use anyhow::{anyhow, bail, Context, Result};
use lazy_static::lazy_static;
use std::collections::HashSet;
use crate::models::media::MediaItem;

/// Embedded configuration table. Content, asset lists and colors for the page live here.
pub const SITE_JSON: &str = include_str!("../../site.json");

lazy_static! {
    static ref SITE: Result<SiteConfig> = load_site_config(SITE_JSON);
}

/// The parsed embedded table, parsed once on first use.
pub fn site_config() -> Result<&'static SiteConfig> {
    SITE.as_ref().map_err(|e| anyhow!("{e:#}"))
}

/// Parse and validate a site table.
pub fn load_site_config(json: &str) -> Result<SiteConfig> {
    let site: SiteConfig = serde_json::from_str(json).context("Failed to parse site table")?;
    site.validate()?;
    Ok(site)
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SiteConfig {
    pub brand: Brand,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub timing: Timing,
    #[serde(default)]
    pub preloader: Preloader,
    pub nav: Nav,
    pub hero: Hero,
    pub about: About,
    pub mission: Mission,
    pub vision: Vision,
    pub culture: Culture,
    pub videos: Videos,
    pub visit: Visit,
    pub tribute: Tribute,
    pub donate: Donate,
    pub founder: Founder,
    pub contact: Contact,
}

impl SiteConfig {
    fn validate(&self) -> Result<()> {
        if self.about.images.is_empty() {
            bail!("about carousel has no images");
        }
        if self.culture.images.is_empty() {
            bail!("culture carousel has no images");
        }
        if self.timing.about_interval_ms == 0 || self.timing.culture_interval_ms == 0 {
            bail!("carousel intervals must be positive");
        }
        let mut ids = HashSet::new();
        for item in &self.videos.items {
            if !ids.insert(item.id) {
                bail!("duplicate media id {}", item.id);
            }
        }
        Ok(())
    }

    /// Every image the page shows, in page order, without duplicates.
    pub fn preload_images(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        std::iter::once(&self.brand.logo)
            .chain(std::iter::once(&self.hero.background))
            .chain(self.about.images.iter())
            .chain(self.culture.images.iter())
            .chain(self.videos.items.iter().map(|v| &v.thumbnail))
            .chain(std::iter::once(&self.tribute.background))
            .chain(std::iter::once(&self.founder.image))
            .filter(|src| !src.is_empty() && seen.insert(src.as_str()))
            .cloned()
            .collect()
    }

    /// Video files to pre-warm; never part of the preload count.
    pub fn video_sources(&self) -> Vec<String> {
        self.videos.items.iter().map(|v| v.media.clone()).collect()
    }

    pub fn media(&self, id: u32) -> Option<&MediaItem> {
        self.videos.items.iter().find(|v| v.id == id)
    }

    /// Theme tokens as CSS custom properties for the page root.
    pub fn theme_style(&self) -> String {
        let t = &self.theme;
        format!(
            "--accent: {}; --accent-dark: {}; --accent-soft: {}; --accent-muted: {}; --ink: {};",
            t.accent, t.accent_dark, t.accent_soft, t.accent_muted, t.ink
        )
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Brand {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    pub logo: String,
    #[serde(default)]
    pub logo_alt: String,
    pub document_title: String,
    pub footer_owner: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub accent: String,
    pub accent_dark: String,
    pub accent_soft: String,
    pub accent_muted: String,
    pub ink: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: "#15803d".to_string(),
            accent_dark: "#166534".to_string(),
            accent_soft: "#f0fdf4".to_string(),
            accent_muted: "#86efac".to_string(),
            ink: "#111827".to_string(),
        }
    }
}

/// Durations are milliseconds, the threshold is CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Timing {
    pub about_interval_ms: u32,
    pub culture_interval_ms: u32,
    pub preload_grace_ms: u32,
    pub preload_ceiling_ms: u32,
    pub preload_fade_ms: u32,
    pub scroll_threshold_px: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            about_interval_ms: 5000,
            culture_interval_ms: 4000,
            preload_grace_ms: 600,
            preload_ceiling_ms: 5000,
            preload_fade_ms: 700,
            scroll_threshold_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Preloader {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Nav {
    pub links: Vec<Link>,
    pub cta: Link,
}

/// A run of text, optionally emphasized.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default)]
    pub emphasis: bool,
}

/// Color family for an icon badge. Maps onto fixed utility classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Green,
    Purple,
    Yellow,
    Red,
    Indigo,
}

impl Tone {
    /// Badge background and icon color.
    pub fn badge_classes(self) -> &'static str {
        match self {
            Tone::Blue => "bg-blue-100 text-blue-600",
            Tone::Green => "bg-green-100 text-green-600",
            Tone::Purple => "bg-purple-100 text-purple-600",
            Tone::Yellow => "bg-yellow-100 text-yellow-600",
            Tone::Red => "bg-red-100 text-red-600",
            Tone::Indigo => "bg-indigo-100 text-indigo-600",
        }
    }

    /// Panel background and label color.
    pub fn panel_classes(self) -> (&'static str, &'static str) {
        match self {
            Tone::Blue => ("bg-blue-50", "text-blue-700"),
            Tone::Green => ("bg-green-50", "text-green-700"),
            Tone::Purple => ("bg-purple-50", "text-purple-700"),
            Tone::Yellow => ("bg-yellow-50", "text-yellow-700"),
            Tone::Red => ("bg-red-50", "text-red-700"),
            Tone::Indigo => ("bg-indigo-50", "text-indigo-700"),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub background: String,
    pub cta: Link,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub images: Vec<String>,
    #[serde(default)]
    pub image_alt: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Mission {
    pub eyebrow: String,
    pub statement: Vec<TextRun>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct VisionCard {
    pub icon: String,
    pub tone: Tone,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Vision {
    pub heading: String,
    pub intro: String,
    pub cards: Vec<VisionCard>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Culture {
    pub eyebrow: String,
    pub heading_lead: String,
    pub heading_accent: String,
    pub quote: String,
    pub body: Vec<TextRun>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: Link,
    pub images: Vec<String>,
    #[serde(default)]
    pub image_alt: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Videos {
    pub eyebrow: String,
    pub heading: String,
    pub intro: String,
    pub call_to_action: String,
    pub items: Vec<MediaItem>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MapEmbed {
    pub title: String,
    /// Opaque provider URL, coordinates baked in.
    pub embed_url: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Visit {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub note: String,
    pub map: MapEmbed,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Scripture {
    pub text: String,
    pub reference: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Achievement {
    pub title: String,
    pub detail: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FundingStatus {
    pub label: String,
    pub value: String,
    pub percent: u8,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Tribute {
    pub eyebrow: String,
    pub heading_lead: String,
    pub heading_accent: String,
    pub background: String,
    #[serde(default)]
    pub background_alt: String,
    pub paragraphs: Vec<String>,
    pub scripture: Scripture,
    pub badge: String,
    pub achievements_title: String,
    pub achievements: Vec<Achievement>,
    pub status: FundingStatus,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DonationField {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub mono: bool,
}

/// Display-only payment instructions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DonationMethod {
    pub icon: String,
    pub tone: Tone,
    pub title: String,
    pub subtitle: String,
    pub fields: Vec<DonationField>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Donate {
    pub heading: String,
    pub intro: String,
    pub methods: Vec<DonationMethod>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Founder {
    pub image: String,
    #[serde(default)]
    pub image_alt: String,
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Phone,
    Email,
    Social,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ContactCard {
    pub kind: ContactKind,
    pub title: String,
    pub detail: String,
    pub label: String,
    /// `tel:`, `mailto:` or an external profile URL. Not validated.
    pub href: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Contact {
    pub eyebrow: String,
    pub heading: String,
    pub intro: String,
    pub cards: Vec<ContactCard>,
}
