//! Countdown to the ceremony.

use chrono::{DateTime, NaiveDateTime, TimeZone};

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR;

/// Shown instead of the counters once the day has arrived.
pub const ARRIVED_MESSAGE: &str = "¡Es hoy! ¡Nos casamos! 💒";

/// Time remaining until the wedding, clamped at zero once it has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Remaining time from `now` until `target`.
    pub fn until<Tz: TimeZone>(target: &DateTime<Tz>, now: &DateTime<Tz>) -> Self {
        let remaining = target.clone().signed_duration_since(now.clone()).num_seconds();
        if remaining <= 0 {
            return Self::default();
        }

        Self {
            days: remaining / SECS_PER_DAY,
            hours: (remaining % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (remaining % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: remaining % SECS_PER_MINUTE,
        }
    }

    /// Same as [`TimeLeft::until`] for wall-clock times without a zone.
    pub fn until_local(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        Self::until(&target.and_utc(), &now.and_utc())
    }

    /// True once the day has arrived.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Units in display order, each with its value and Spanish label.
    pub fn units(&self) -> [(i64, &'static str); 4] {
        [
            (self.days, unit_label(self.days, "Día", "Días")),
            (self.hours, unit_label(self.hours, "Hora", "Horas")),
            (self.minutes, unit_label(self.minutes, "Minuto", "Minutos")),
            (self.seconds, unit_label(self.seconds, "Segundo", "Segundos")),
        ]
    }
}

impl std::fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .units()
            .iter()
            .map(|(value, label)| format!("{:02} {}", value, label))
            .collect();
        f.write_str(&parts.join(" · "))
    }
}

/// Singular label for exactly one, plural otherwise (including zero).
pub fn unit_label(value: i64, singular: &'static str, plural: &'static str) -> &'static str {
    if value == 1 {
        singular
    } else {
        plural
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_splits_remaining_time() {
        let now = Utc.with_ymd_and_hms(2026, 4, 10, 12, 0, 0).unwrap();
        let target = now + Duration::days(4) + Duration::hours(3) + Duration::minutes(2) + Duration::seconds(1);

        let left = TimeLeft::until(&target, &now);
        assert_eq!(
            left,
            TimeLeft {
                days: 4,
                hours: 3,
                minutes: 2,
                seconds: 1
            }
        );
        assert!(!left.is_zero());
    }

    #[test]
    fn test_past_target_clamps_to_zero() {
        let now = Utc.with_ymd_and_hms(2026, 4, 16, 0, 0, 0).unwrap();
        let target = Utc.with_ymd_and_hms(2026, 4, 15, 0, 0, 0).unwrap();
        assert!(TimeLeft::until(&target, &now).is_zero());
        assert!(TimeLeft::until(&now, &now).is_zero());
    }

    #[test]
    fn test_labels_are_singular_only_for_one() {
        let left = TimeLeft {
            days: 1,
            hours: 0,
            minutes: 2,
            seconds: 1,
        };
        let labels: Vec<&str> = left.units().iter().map(|(_, label)| *label).collect();
        assert_eq!(labels, vec!["Día", "Horas", "Minutos", "Segundo"]);
    }

    #[test]
    fn test_until_local_matches_zoned() {
        let target = NaiveDateTime::parse_from_str("2026-04-15 18:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let now = NaiveDateTime::parse_from_str("2026-04-14 17:29:30", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(
            TimeLeft::until_local(target, now),
            TimeLeft {
                days: 1,
                hours: 1,
                minutes: 0,
                seconds: 30
            }
        );
    }

    #[test]
    fn test_display_zero_pads() {
        let left = TimeLeft {
            days: 12,
            hours: 5,
            minutes: 0,
            seconds: 9,
        };
        assert_eq!(left.to_string(), "12 Días · 05 Horas · 00 Minutos · 09 Segundos");
    }
}
