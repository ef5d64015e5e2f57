use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config::{self, SiteConfig};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content document `{document}` does not match its schema: {source}")]
    Malformed {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HeroData {
    pub image_url: String,
    pub tagline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub highlights: Vec<String>,
    pub availability_note: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AboutData {
    pub title: String,
    pub name: String,
    pub credentials: String,
    pub image_url: String,
    pub image_alt: String,
    pub description: Vec<String>,
    pub badges: Vec<String>,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServicesLayout {
    Grid,
    List,
    Cards,
}

impl ServicesLayout {
    pub fn class(self) -> &'static str {
        match self {
            ServicesLayout::Grid => "services-grid",
            ServicesLayout::List => "services-list",
            ServicesLayout::Cards => "services-cards",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SpecializationData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub order: u32,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServicesData {
    pub title: String,
    pub description: String,
    pub show_icons: bool,
    pub show_hover_effects: bool,
    pub layout: ServicesLayout,
    pub specializations: Vec<SpecializationData>,
}

impl ServicesData {
    pub fn ordered(&self) -> Vec<&SpecializationData> {
        let mut items: Vec<_> = self.specializations.iter().collect();
        items.sort_by_key(|s| s.order);
        items
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ProcessStep {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub order: u32,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ProcessData {
    pub title: String,
    pub description: String,
    pub steps: Vec<ProcessStep>,
}

impl ProcessData {
    pub fn ordered(&self) -> Vec<&ProcessStep> {
        let mut steps: Vec<_> = self.steps.iter().collect();
        steps.sort_by_key(|s| s.order);
        steps
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingService {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub currency: String,
    pub duration: u32,
    pub duration_unit: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl PricingService {
    /// "180 zł", or "180.50 zł" when the price has a fractional part.
    pub fn price_label(&self) -> String {
        if self.price.fract() == 0.0 {
            format!("{:.0} {}", self.price, self.currency)
        } else {
            format!("{:.2} {}", self.price, self.currency)
        }
    }

    pub fn duration_label(&self) -> String {
        format!("{} {}", self.duration, self.duration_unit)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricingData {
    pub title: String,
    pub subtitle: String,
    pub services: Vec<PricingService>,
    pub payment_methods: Vec<String>,
    pub notes: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqQuestion {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqData {
    pub title: String,
    pub subtitle: String,
    pub questions: Vec<FaqQuestion>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub text: String,
}

impl Testimonial {
    pub const MAX_RATING: u8 = 5;

    /// Filled and empty stars for the rating, rounded to the nearest whole
    /// star and clamped to 0..=5.
    pub fn stars(&self) -> String {
        let filled = self.rating.clamp(0.0, Self::MAX_RATING as f64).round() as usize;
        let empty = Self::MAX_RATING as usize - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialData {
    pub title: String,
    pub description: String,
    pub google_maps_link: String,
    pub show_rating: bool,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub image_url: String,
    pub image_alt: String,
    pub url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogData {
    pub title: String,
    pub description: String,
    pub read_more_text: String,
    pub articles: Vec<Article>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FieldCopy {
    pub label: String,
    pub placeholder: String,
    pub required: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CheckboxCopy {
    pub label: String,
    pub required: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub name: FieldCopy,
    pub email: FieldCopy,
    pub phone: FieldCopy,
    pub subject: FieldCopy,
    pub message: FieldCopy,
    pub gdpr_checkbox: CheckboxCopy,
}

// Part of the contact document's schema; the section itself shows the
// therapist details from the shared config.
#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub working_hours: String,
}

/// Validation and notification copy for the contact form.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FormMessages {
    pub name_required: String,
    pub email_required: String,
    pub email_invalid: String,
    pub message_required: String,
    pub consent_required: String,
    pub sending: String,
    pub sent_title: String,
    pub sent_description: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            name_required: "Imię jest wymagane".to_string(),
            email_required: "Email jest wymagany".to_string(),
            email_invalid: "Nieprawidłowy adres email".to_string(),
            message_required: "Wiadomość jest wymagana".to_string(),
            consent_required: "Musisz wyrazić zgodę na przetwarzanie danych".to_string(),
            sending: "Wysyłanie...".to_string(),
            sent_title: "Wiadomość wysłana".to_string(),
            sent_description: "Dziękujemy za kontakt. Odezwiemy się wkrótce.".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    pub title: String,
    pub description: String,
    pub form_fields: FormFields,
    pub submit_button: String,
    pub calendly_link: String,
    pub appointment_button_text: String,
    pub contact_info: ContactInfo,
    pub map_embed_url: String,
    #[serde(default)]
    pub messages: FormMessages,
}

impl ContactData {
    /// The configured embed URL, or a place query built from the therapist
    /// address when none is set.
    pub fn map_src(&self, site: &SiteConfig) -> String {
        if !self.map_embed_url.trim().is_empty() {
            return self.map_embed_url.clone();
        }
        format!(
            "{}?key={}&q={}",
            config::MAPS_EMBED_BASE,
            config::maps_api_key(),
            urlencoding::encode(&site.therapist.address)
        )
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FooterCrisisHelp {
    pub title: String,
    pub description: String,
    pub phone_number: String,
    pub availability_text: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CookieConsentData {
    pub message: String,
    pub accept_button_text: String,
    pub more_info_text: String,
    pub more_info_url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FooterData {
    pub copyright: String,
    pub links: Vec<FooterLink>,
    pub crisis_help: FooterCrisisHelp,
    pub cookie_consent: CookieConsentData,
}

/// Every record the page renders, parsed once at start-up.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub config: Rc<SiteConfig>,
    pub hero: Rc<HeroData>,
    pub about: Rc<AboutData>,
    pub services: Rc<ServicesData>,
    pub process: Rc<ProcessData>,
    pub pricing: Rc<PricingData>,
    pub testimonials: Rc<TestimonialData>,
    pub faq: Rc<FaqData>,
    pub blog: Rc<BlogData>,
    pub contact: Rc<ContactData>,
    pub footer: Rc<FooterData>,
}

fn parse<T: DeserializeOwned>(document: &'static str, raw: &str) -> Result<Rc<T>, ContentError> {
    serde_json::from_str(raw)
        .map(Rc::new)
        .map_err(|source| ContentError::Malformed { document, source })
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        Ok(Self {
            config: parse("config.json", include_str!("../data/config.json"))?,
            hero: parse("hero.json", include_str!("../data/hero.json"))?,
            about: parse("about.json", include_str!("../data/about.json"))?,
            services: parse("services.json", include_str!("../data/services.json"))?,
            process: parse("process.json", include_str!("../data/process.json"))?,
            pricing: parse("pricing.json", include_str!("../data/pricing.json"))?,
            testimonials: parse("testimonials.json", include_str!("../data/testimonials.json"))?,
            faq: parse("faq.json", include_str!("../data/faq.json"))?,
            blog: parse("blog.json", include_str!("../data/blog.json"))?,
            contact: parse("contact.json", include_str!("../data/contact.json"))?,
            footer: parse("footer.json", include_str!("../data/footer.json"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteContent {
        SiteContent::load().expect("bundled content parses")
    }

    #[test]
    fn bundled_documents_parse() {
        let site = site();
        assert!(!site.config.therapist.name.is_empty());
        assert!(!site.contact.form_fields.name.label.is_empty());
        assert!(!site.testimonials.testimonials.is_empty());
        assert!(!site.process.steps.is_empty());
    }

    #[test]
    fn missing_field_names_the_document() {
        let err = parse::<HeroData>("hero.json", r#"{"imageUrl": "/hero.jpg"}"#).unwrap_err();
        let ContentError::Malformed { document, .. } = &err;
        assert_eq!(*document, "hero.json");
        assert!(err.to_string().contains("hero.json"));
    }

    #[test]
    fn theme_style_covers_palette_and_fonts() {
        let style = site().config.theme_style();
        assert_eq!(style.matches("--color-").count(), 15);
        assert!(style.contains(&format!("--color-primary: {};", site().config.colors.primary)));
        assert!(style.contains("--font-heading:"));
    }

    #[test]
    fn empty_map_url_falls_back_to_address_query() {
        let site = site();
        let mut contact = (*site.contact).clone();
        contact.map_embed_url = String::new();
        let src = contact.map_src(&site.config);
        assert!(src.starts_with(config::MAPS_EMBED_BASE));
        let encoded = urlencoding::encode(&site.config.therapist.address).into_owned();
        assert!(src.ends_with(&format!("&q={}", encoded)));
        assert!(!src.contains(' '));
    }

    #[test]
    fn explicit_map_url_is_used_verbatim() {
        let site = site();
        let mut contact = (*site.contact).clone();
        contact.map_embed_url = "https://maps.example/embed?pb=1".to_string();
        assert_eq!(contact.map_src(&site.config), "https://maps.example/embed?pb=1");
    }

    #[test]
    fn form_messages_default_when_absent() {
        let site = site();
        assert_eq!(site.contact.messages.sending, "Wysyłanie...");
        assert_eq!(site.contact.messages.name_required, "Imię jest wymagane");
    }

    #[test]
    fn steps_and_specializations_sort_by_order() {
        let site = site();
        let orders: Vec<u32> = site.process.ordered().iter().map(|s| s.order).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
        let orders: Vec<u32> = site.services.ordered().iter().map(|s| s.order).collect();
        assert!(orders.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn stars_clamp_to_five() {
        let mut t = Testimonial {
            id: "t1".into(),
            name: "Marta".into(),
            rating: 4.0,
            text: "Polecam".into(),
        };
        assert_eq!(t.stars(), "★★★★☆");
        t.rating = 9.0;
        assert_eq!(t.stars(), "★★★★★");
    }

    #[test]
    fn fractional_and_negative_ratings_still_render() {
        let mut t: Testimonial =
            serde_json::from_str(r#"{"id":"t1","name":"A","rating":4.5,"text":"x"}"#).unwrap();
        assert_eq!(t.stars(), "★★★★★");
        t.rating = 3.4;
        assert_eq!(t.stars(), "★★★☆☆");
        t.rating = -1.0;
        assert_eq!(t.stars(), "☆☆☆☆☆");
    }

    #[test]
    fn price_labels() {
        let mut service = PricingService {
            id: "individual".into(),
            title: "Konsultacja".into(),
            price: 180.0,
            currency: "zł".into(),
            duration: 50,
            duration_unit: "min".into(),
            description: None,
        };
        assert_eq!(service.price_label(), "180 zł");
        assert_eq!(service.duration_label(), "50 min");
        service.price = 180.5;
        assert_eq!(service.price_label(), "180.50 zł");
    }
}
