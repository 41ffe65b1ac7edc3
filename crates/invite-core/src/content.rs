//! Invitation content: the couple, the date, the story and the gallery.
//!
//! Defaults reproduce the published invitation. Every field can be
//! overridden from the configuration file.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couple {
    pub bride: String,
    pub groom: String,
}

impl Couple {
    /// "Sofi & Criss"
    pub fn display_names(&self) -> String {
        format!("{} & {}", self.bride, self.groom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
}

/// Who, when and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeddingDetails {
    pub couple: Couple,
    pub date: NaiveDate,
    /// Local time the countdown runs to
    #[serde(default = "default_ceremony_time")]
    pub ceremony_time: NaiveTime,
    pub venue: Venue,
    pub contact: Contact,
}

fn default_ceremony_time() -> NaiveTime {
    NaiveTime::MIN
}

impl WeddingDetails {
    /// Local date and time the countdown targets.
    pub fn ceremony_start(&self) -> NaiveDateTime {
        self.date.and_time(self.ceremony_time)
    }

    /// "15 de Abril, 2026"
    pub fn formatted_date(&self) -> String {
        format!(
            "{} de {}, {}",
            self.date.day(),
            MONTHS[self.date.month0() as usize],
            self.date.year()
        )
    }

    /// Weekday of the ceremony, in Spanish.
    pub fn weekday_name(&self) -> &'static str {
        match self.date.weekday() {
            Weekday::Mon => "Lunes",
            Weekday::Tue => "Martes",
            Weekday::Wed => "Miércoles",
            Weekday::Thu => "Jueves",
            Weekday::Fri => "Viernes",
            Weekday::Sat => "Sábado",
            Weekday::Sun => "Domingo",
        }
    }
}

impl Default for WeddingDetails {
    fn default() -> Self {
        Self {
            couple: Couple {
                bride: "Sofi".to_string(),
                groom: "Criss".to_string(),
            },
            date: NaiveDate::from_ymd_opt(2026, 4, 15).unwrap_or_default(),
            ceremony_time: default_ceremony_time(),
            venue: Venue {
                name: "Por anunciar".to_string(),
                address: "Detalles de ubicación próximamente".to_string(),
            },
            contact: Contact {
                email: "sofiandfede@wedding.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
            },
        }
    }
}

/// One entry of the love-story timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryMilestone {
    pub year: String,
    pub title: String,
    pub description: String,
    pub icon: String,
}

impl StoryMilestone {
    fn new(year: &str, title: &str, description: &str, icon: &str) -> Self {
        Self {
            year: year.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}

pub fn default_story() -> Vec<StoryMilestone> {
    vec![
        StoryMilestone::new(
            "2020",
            "First Meeting",
            "We met at a coffee shop on a rainy Tuesday morning. Little did we know it would change our lives forever.",
            "☕",
        ),
        StoryMilestone::new(
            "2021",
            "First Date",
            "Our first official date was at the local botanical garden. We spent hours talking and walking among the flowers.",
            "🌸",
        ),
        StoryMilestone::new(
            "2023",
            "Moving In",
            "We decided to take the next step and move in together. Building our little home filled with love and laughter.",
            "🏠",
        ),
        StoryMilestone::new(
            "2024",
            "The Proposal",
            "Under the starlit sky at our favorite hiking spot, Criss got down on one knee and asked Sofi to be his forever.",
            "💍",
        ),
        StoryMilestone::new(
            "2026",
            "Our Wedding",
            "And now, we're excited to celebrate our love with all of you as we begin this beautiful journey as husband and wife.",
            "💒",
        ),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// A photo or video in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: u32,
    pub url: String,
    pub alt: String,
    pub caption: String,
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: MediaKind,
}

impl GalleryItem {
    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

fn item(id: u32, url: &str, alt: &str, caption: &str, description: &str, kind: MediaKind) -> GalleryItem {
    GalleryItem {
        id,
        url: url.to_string(),
        alt: alt.to_string(),
        caption: caption.to_string(),
        description: description.to_string(),
        kind,
    }
}

pub fn default_gallery() -> Vec<GalleryItem> {
    vec![
        item(
            1,
            "https://images.unsplash.com/photo-1511285560929-80b456fea0bc?w=800&q=80",
            "Foto romántica de pareja",
            "El día de nuestro compromiso",
            "Esta foto fue tomada el día que nos comprometimos. Estábamos en nuestro lugar favorito, el parque donde tuvimos nuestra primera cita. El momento fue mágico y lleno de amor.",
            MediaKind::Image,
        ),
        item(
            2,
            "https://images.unsplash.com/photo-1583939003579-730e3918a45a?w=800&q=80",
            "Anillos de boda",
            "El comienzo del para siempre",
            "Nuestros anillos de compromiso representan la promesa eterna de amor y compromiso. Fueron diseñados especialmente para nosotros con detalles que simbolizan nuestra historia juntos.",
            MediaKind::Image,
        ),
        item(
            3,
            "https://images.unsplash.com/photo-1606216794074-735e91aa2c92?w=800&q=80",
            "Flores de boda",
            "Amor en flor",
            "Las flores que elegimos para nuestra boda tienen un significado especial. Las rosas representan el amor eterno, y las peonías simbolizan el honor y la riqueza en el matrimonio.",
            MediaKind::Image,
        ),
        item(
            4,
            "https://images.unsplash.com/photo-1522673607200-164d1b6ce486?w=800&q=80",
            "Lugar de la boda",
            "Donde los sueños se hacen realidad",
            "Aunque aún no hemos revelado el lugar exacto, este será el escenario perfecto para celebrar nuestro amor rodeados de familiares y amigos más queridos.",
            MediaKind::Image,
        ),
        item(
            5,
            "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800&q=80",
            "Pastel de boda",
            "Momentos dulces",
            "Nuestro pastel de boda será una obra de arte culinaria, diseñada para reflejar nuestro amor y personalidad. Cada capa tiene un sabor especial que representa una etapa de nuestra relación.",
            MediaKind::Image,
        ),
        item(
            6,
            "https://assets.mixkit.co/videos/preview/mixkit-couple-dancing-in-nature-4564-large.mp4",
            "Baile de pareja",
            "Bailando juntos por la vida",
            "Este video captura la esencia de nuestra relación. Bailar juntos es una de nuestras actividades favoritas, y simboliza cómo nos movemos en armonía por la vida.",
            MediaKind::Video,
        ),
        item(
            7,
            "https://images.unsplash.com/photo-1469371670807-013ccf25f16a?w=800&q=80",
            "Baile de boda",
            "Nuestro primer baile",
            "Esta imagen representa nuestro primer baile como pareja comprometida. Será un momento mágico que recordaremos para siempre, rodeados del amor de nuestros seres queridos.",
            MediaKind::Image,
        ),
    ]
}

/// Page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Home,
    Story,
    Gallery,
    Rsvp,
}

impl NavSection {
    pub const ALL: [NavSection; 4] = [
        NavSection::Home,
        NavSection::Story,
        NavSection::Gallery,
        NavSection::Rsvp,
    ];

    /// Element id the section is anchored on.
    pub fn anchor(&self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::Story => "story",
            NavSection::Gallery => "gallery",
            NavSection::Rsvp => "rsvp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Home => "Inicio",
            NavSection::Story => "Nuestra Historia",
            NavSection::Gallery => "Galería",
            NavSection::Rsvp => "Confirmar Asistencia",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_date_formatting() {
        let details = WeddingDetails::default();
        assert_eq!(details.formatted_date(), "15 de Abril, 2026");
        assert_eq!(details.weekday_name(), "Miércoles");
        assert_eq!(details.couple.display_names(), "Sofi & Criss");
    }

    #[test]
    fn test_ceremony_start_uses_configured_time() {
        let mut details = WeddingDetails::default();
        details.ceremony_time = NaiveTime::from_hms_opt(18, 30, 0).unwrap();
        assert_eq!(
            details.ceremony_start().to_string(),
            "2026-04-15 18:30:00"
        );
    }

    #[test]
    fn test_gallery_item_type_field() {
        let json = r#"{"id": 9, "url": "clip.mp4", "alt": "a", "caption": "c", "description": "d", "type": "video"}"#;
        let item: GalleryItem = serde_json::from_str(json).unwrap();
        assert!(item.is_video());

        let json = r#"{"id": 10, "url": "photo.jpg", "alt": "a", "caption": "c", "description": "d"}"#;
        let item: GalleryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, MediaKind::Image);
    }

    #[test]
    fn test_default_gallery_has_one_video() {
        let gallery = default_gallery();
        assert_eq!(gallery.len(), 7);
        assert_eq!(gallery.iter().filter(|item| item.is_video()).count(), 1);
    }

    #[test]
    fn test_nav_anchors() {
        let anchors: Vec<&str> = NavSection::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors, vec!["home", "story", "gallery", "rsvp"]);
    }
}
