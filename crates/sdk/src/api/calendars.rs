//! Calendar API endpoints.

use crate::client::LitcalClient;
use crate::error::ApiResult;
use litcal_core::listing::{CalendarListing, CalendarsResponse};
use litcal_core::types::{CalendarRequest, CalendarResponse};
use tracing::debug;

/// Calendars API: the listing and the calendars themselves.
pub struct CalendarsApi<'a> {
    client: &'a LitcalClient,
}

impl<'a> CalendarsApi<'a> {
    pub(crate) fn new(client: &'a LitcalClient) -> Self {
        Self { client }
    }

    /// List the national and diocesan calendars the API knows about.
    pub async fn list(&self) -> ApiResult<CalendarListing> {
        let response: CalendarsResponse = self.client.http.get("calendars").await?;
        debug!(
            national = response.litcal_metadata.national_calendars.len(),
            diocesan = response.litcal_metadata.diocesan_calendars.len(),
            "Fetched calendar listing"
        );
        Ok(response.litcal_metadata)
    }

    /// Fetch one calendar for one civil year.
    pub async fn fetch(&self, request: &CalendarRequest) -> ApiResult<CalendarResponse> {
        let response: CalendarResponse = self
            .client
            .http
            .get_localized(
                &request.target.resource_path(),
                &request.query(),
                request.locale.as_str(),
            )
            .await?;
        debug!(
            calendar = %request.target.title(request.year),
            events = response.litcal.len(),
            "Fetched calendar"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use litcal_core::types::{CalendarTarget, Locale, TransferFlags};
    use litcal_core::validation::{parse_diocese, parse_locale, parse_nation};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> LitcalClient {
        LitcalClient::builder()
            .base_url(format!("{}/api/dev/", server.uri()))
            .build()
            .unwrap()
    }

    fn calendar_body() -> serde_json::Value {
        serde_json::json!({
            "litcal": [
                {
                    "event_key": "MotherGod",
                    "name": "Mary, Mother of God",
                    "date": "2025-01-01T00:00:00+00:00",
                    "grade": 6,
                    "color": ["white"]
                }
            ],
            "settings": {"year": 2025, "locale": "en"}
        })
    }

    #[tokio::test]
    async fn test_list_calendars() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/dev/calendars"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "litcal_metadata": {
                    "national_calendars": [{"calendar_id": "US", "locales": ["en_US"]}],
                    "diocesan_calendars": [
                        {"calendar_id": "boston_us", "diocese": "Archdiocese of Boston", "nation": "US"}
                    ],
                    "locales": ["en", "la"]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let listing = client(&server).calendars().list().await.unwrap();
        assert_eq!(listing.national_ids(), vec!["US"]);
        assert_eq!(listing.diocesan_ids(), vec!["boston_us"]);
        assert_eq!(listing.locales, vec!["en", "la"]);
    }

    #[tokio::test]
    async fn test_general_calendar_sends_transfer_flags() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/dev/calendar"))
            .and(query_param("year", "2025"))
            .and(query_param("locale", "en"))
            .and(query_param("year_type", "CIVIL"))
            .and(query_param("epiphany", "JAN6"))
            .and(query_param("ascension", "SUNDAY"))
            .and(query_param("corpus_christi", "THURSDAY"))
            .and(header("Accept-Language", "en"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body()))
            .expect(1)
            .mount(&server)
            .await;

        let request = CalendarRequest::new(CalendarTarget::General, 2025, Locale::default())
            .with_transfers(TransferFlags {
                epiphany_on_sunday: false,
                ascension_on_sunday: true,
                corpus_christi_on_sunday: false,
            });
        let calendar = client(&server).calendars().fetch(&request).await.unwrap();

        assert_eq!(calendar.litcal.len(), 1);
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(calendar.litcal[0].falls_on(day));
    }

    #[tokio::test]
    async fn test_national_calendar_path() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/dev/calendar/nation/US"))
            .and(query_param("year", "2025"))
            .and(query_param("locale", "en_US"))
            .and(query_param("year_type", "CIVIL"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body()))
            .expect(1)
            .mount(&server)
            .await;

        let target = CalendarTarget::National(parse_nation("us").unwrap());
        let locale = parse_locale(Some("en-us")).unwrap();
        let request = CalendarRequest::new(target, 2025, locale);
        assert!(client(&server).calendars().fetch(&request).await.is_ok());
    }

    #[tokio::test]
    async fn test_diocesan_calendar_path() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/dev/calendar/diocese/boston_us"))
            .and(query_param("year", "2024"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body()))
            .expect(1)
            .mount(&server)
            .await;

        let target = CalendarTarget::Diocesan(parse_diocese("Boston_US").unwrap());
        let request = CalendarRequest::new(target, 2024, Locale::default());
        assert!(client(&server).calendars().fetch(&request).await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_litcal_array_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/dev/calendar"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"settings": {}})),
            )
            .mount(&server)
            .await;

        let request = CalendarRequest::new(CalendarTarget::General, 2025, Locale::default());
        let result = client(&server).calendars().fetch(&request).await;
        assert!(matches!(result, Err(crate::error::ApiError::Malformed(_))));
    }
}
