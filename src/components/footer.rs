use chrono::{Datelike, Duration};
use dioxus::prelude::*;

use crate::context::use_config;

/// RSVP deadline shown in the footer: one month before the wedding.
fn rsvp_deadline(date: chrono::NaiveDate) -> chrono::NaiveDate {
    date.checked_sub_months(chrono::Months::new(1))
        .unwrap_or(date - Duration::days(30))
}

#[component]
pub fn Footer() -> Element {
    let config = use_config();
    let details = config.read().wedding.clone();

    let names = details.couple.display_names();
    let date = details.formatted_date();
    let weekday = details.weekday_name();
    let deadline = {
        let mut d = details.clone();
        d.date = rsvp_deadline(details.date);
        d.formatted_date()
    };
    let year = details.date.year();

    rsx! {
        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__column",
                    h3 { class: "footer__names", "{names}" }
                    p { class: "footer__text",
                        "No podemos esperar a celebrar este día especial con nuestras personas favoritas. "
                        "Su presencia en nuestras vidas significa el mundo para nosotros."
                    }
                }

                div { class: "footer__column",
                    h3 { class: "footer__heading", "Ponte en Contacto" }
                    p { "✉ {details.contact.email}" }
                    p { "☎ {details.contact.phone}" }
                    p { "📍 {details.venue.name}" }
                }

                div { class: "footer__column",
                    h3 { class: "footer__heading", "Detalles de la Boda" }
                    p { class: "footer__date", "{date}" }
                    p { "{weekday}" }
                    p { class: "footer__note", "Por favor confirma antes del {deadline}" }
                    p { class: "footer__note", "Más detalles próximamente" }
                }
            }

            div { class: "footer__divider" }
            p { class: "footer__copyright", "© {year} Boda de {names}. Hecho con amor." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_deadline_is_one_month_earlier() {
        let date = NaiveDate::from_ymd_opt(2026, 4, 15).unwrap();
        assert_eq!(rsvp_deadline(date), NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
    }
}
