// Listing of the national and diocesan calendars known upstream

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{LitcalError, LitcalResult};
use crate::types::{CalendarTarget, Locale, DEFAULT_LOCALE};

/// Body of the `calendars` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarsResponse {
    pub litcal_metadata: CalendarListing,
}

/// Available calendars with their locales and settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarListing {
    #[serde(default)]
    pub national_calendars: Vec<NationalCalendarInfo>,
    #[serde(default)]
    pub diocesan_calendars: Vec<DiocesanCalendarInfo>,
    /// Locales of the General Roman Calendar
    #[serde(default)]
    pub locales: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NationalCalendarInfo {
    pub calendar_id: String,
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiocesanCalendarInfo {
    pub calendar_id: String,
    #[serde(default)]
    pub diocese: String,
    #[serde(default)]
    pub nation: String,
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default)]
    pub settings: serde_json::Map<String, serde_json::Value>,
}

impl CalendarListing {
    /// Nation codes, uppercase and sorted.
    pub fn national_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .national_calendars
            .iter()
            .map(|c| c.calendar_id.to_ascii_uppercase())
            .collect();
        ids.sort();
        ids
    }

    /// Diocese ids, lowercase and sorted.
    pub fn diocesan_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .diocesan_calendars
            .iter()
            .map(|c| c.calendar_id.to_ascii_lowercase())
            .collect();
        ids.sort();
        ids
    }

    pub fn find_national(&self, nation: &str) -> Option<&NationalCalendarInfo> {
        self.national_calendars
            .iter()
            .find(|c| c.calendar_id.eq_ignore_ascii_case(nation))
    }

    pub fn find_diocesan(&self, diocese: &str) -> Option<&DiocesanCalendarInfo> {
        self.diocesan_calendars
            .iter()
            .find(|c| c.calendar_id.eq_ignore_ascii_case(diocese))
    }

    /// Fail with `UnknownCalendar` when the target is not listed.
    pub fn ensure_known(&self, target: &CalendarTarget) -> LitcalResult<()> {
        let (known, available) = match target {
            CalendarTarget::General => return Ok(()),
            CalendarTarget::National(nation) => {
                (self.find_national(nation.as_str()).is_some(), self.national_ids())
            }
            CalendarTarget::Diocesan(diocese) => {
                (self.find_diocesan(diocese.as_str()).is_some(), self.diocesan_ids())
            }
        };

        if known {
            return Ok(());
        }

        Err(LitcalError::UnknownCalendar {
            kind: target.calendar_type(),
            id: target.calendar_id().unwrap_or_default().to_string(),
            available,
        })
    }

    /// Locales offered for a calendar.
    pub fn locales_for(&self, target: &CalendarTarget) -> &[String] {
        match target {
            CalendarTarget::General => &self.locales,
            CalendarTarget::National(nation) => self
                .find_national(nation.as_str())
                .map(|c| c.locales.as_slice())
                .unwrap_or_default(),
            CalendarTarget::Diocesan(diocese) => self
                .find_diocesan(diocese.as_str())
                .map(|c| c.locales.as_slice())
                .unwrap_or_default(),
        }
    }

    /// Best locale the calendar can serve for the requested one.
    ///
    /// Order: exact match, same language, `en`, first listed locale, and the
    /// request unchanged when the calendar lists no locales at all.
    pub fn supported_locale(&self, target: &CalendarTarget, requested: &Locale) -> Locale {
        let available = self.locales_for(target);
        let listed = |candidate: &String| Locale(candidate.replace('-', "_"));

        if let Some(exact) = available.iter().map(listed).find(|l| l == requested) {
            return exact;
        }

        if let Some(same_language) = available
            .iter()
            .map(listed)
            .find(|l| l.language().eq_ignore_ascii_case(requested.language()))
        {
            debug!(requested = %requested, resolved = %same_language, "Locale fallback");
            return same_language;
        }

        if available.iter().any(|l| l == DEFAULT_LOCALE) {
            warn!(requested = %requested, "Locale not supported, falling back to 'en'");
            return Locale(DEFAULT_LOCALE.to_string());
        }

        match available.first() {
            Some(first) => {
                let fallback = listed(first);
                warn!(requested = %requested, resolved = %fallback, "Locale not supported");
                fallback
            }
            None => requested.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CalendarType, DioceseId, NationCode};

    fn listing() -> CalendarListing {
        let response: CalendarsResponse = serde_json::from_value(serde_json::json!({
            "litcal_metadata": {
                "national_calendars": [
                    {"calendar_id": "US", "locales": ["en_US", "es_US"], "settings": {"epiphany": "SUNDAY_JAN2_JAN8"}},
                    {"calendar_id": "CA", "locales": ["fr_CA", "en_CA"]},
                    {"calendar_id": "IT", "locales": ["it_IT"]}
                ],
                "diocesan_calendars": [
                    {"calendar_id": "romamo_it", "diocese": "Diocesi di Roma", "nation": "IT", "locales": ["it_IT"]},
                    {"calendar_id": "boston_us", "diocese": "Archdiocese of Boston", "nation": "US", "locales": []}
                ],
                "locales": ["en", "fr", "it", "la"]
            }
        }))
        .unwrap();
        response.litcal_metadata
    }

    #[test]
    fn test_ids_are_sorted_and_normalized() {
        let listing = listing();
        assert_eq!(listing.national_ids(), vec!["CA", "IT", "US"]);
        assert_eq!(listing.diocesan_ids(), vec!["boston_us", "romamo_it"]);
    }

    #[test]
    fn test_ensure_known() {
        let listing = listing();
        let us = CalendarTarget::National(NationCode("US".to_string()));
        assert!(listing.ensure_known(&us).is_ok());
        assert!(listing.ensure_known(&CalendarTarget::General).is_ok());

        let unknown = CalendarTarget::Diocesan(DioceseId("unknown_xx".to_string()));
        match listing.ensure_known(&unknown) {
            Err(LitcalError::UnknownCalendar { kind, id, available }) => {
                assert_eq!(kind, CalendarType::Diocesan);
                assert_eq!(id, "unknown_xx");
                assert_eq!(available, vec!["boston_us", "romamo_it"]);
            }
            other => panic!("Expected UnknownCalendar, got {:?}", other),
        }
    }

    #[test]
    fn test_supported_locale_exact_and_language() {
        let listing = listing();
        let ca = CalendarTarget::National(NationCode("CA".to_string()));

        let exact = listing.supported_locale(&ca, &Locale("en_CA".to_string()));
        assert_eq!(exact.as_str(), "en_CA");

        let by_language = listing.supported_locale(&ca, &Locale("fr".to_string()));
        assert_eq!(by_language.as_str(), "fr_CA");
    }

    #[test]
    fn test_supported_locale_fallbacks() {
        let listing = listing();
        let it = CalendarTarget::National(NationCode("IT".to_string()));
        assert_eq!(
            listing.supported_locale(&it, &Locale("de".to_string())).as_str(),
            "it_IT"
        );

        assert_eq!(
            listing
                .supported_locale(&CalendarTarget::General, &Locale("de".to_string()))
                .as_str(),
            "en"
        );

        let boston = CalendarTarget::Diocesan(DioceseId("boston_us".to_string()));
        assert_eq!(
            listing.supported_locale(&boston, &Locale("pt_BR".to_string())).as_str(),
            "pt_BR"
        );
    }
}
