// Whole-year calendar tools: general, national and diocesan

use super::{
    json_schema_boolean, json_schema_object, json_schema_string, json_schema_year, tool_result,
    Tool, ToolArgs, ToolContext,
};
use crate::protocol::{CallToolResult, ToolSchema};
use anyhow::Result;
use chrono::Datelike;
use litcal_core::format::format_calendar;
use litcal_core::types::{CalendarTarget, TransferFlags};
use litcal_core::validation::{parse_diocese, parse_locale, parse_nation, resolve_year};
use litcal_core::LitcalResult;
use tracing::info;

const YEAR_DESCRIPTION: &str =
    "Four-digit civil year between 1970 and 9999 (e.g. 2025). Defaults to the current year.";

/// Fetch, validate and render one calendar.
async fn render_calendar(
    context: &ToolContext,
    target: CalendarTarget,
    args: &ToolArgs,
    transfers: Option<TransferFlags>,
) -> LitcalResult<String> {
    let year = resolve_year(args.year("year")?, context.today().year())?;
    let locale = parse_locale(args.string("locale")?)?;

    info!(calendar = %target.title(year), locale = %locale, "Fetching calendar");

    let mut request = context.calendar_request(target, year, locale).await?;
    if let Some(transfers) = transfers {
        request = request.with_transfers(transfers);
    }
    let response = context.fetch(&request).await?;

    Ok(format_calendar(&request.target, year, &response))
}

/// Tool returning the General Roman Calendar for a year
pub struct GeneralCalendarTool {
    context: ToolContext,
}

impl GeneralCalendarTool {
    pub const NAME: &'static str = "get_general_calendar";

    pub fn new(context: ToolContext) -> Self {
        Self { context }
    }

    async fn run(&self, arguments: serde_json::Value) -> LitcalResult<String> {
        let args = ToolArgs::parse(arguments)?;
        let defaults = TransferFlags::default();
        let transfers = TransferFlags {
            epiphany_on_sunday: args
                .boolean("epiphany_on_sunday")?
                .unwrap_or(defaults.epiphany_on_sunday),
            ascension_on_sunday: args
                .boolean("ascension_on_sunday")?
                .unwrap_or(defaults.ascension_on_sunday),
            corpus_christi_on_sunday: args
                .boolean("corpus_christi_on_sunday")?
                .unwrap_or(defaults.corpus_christi_on_sunday),
        };

        render_calendar(&self.context, CalendarTarget::General, &args, Some(transfers)).await
    }
}

#[async_trait::async_trait]
impl Tool for GeneralCalendarTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: "Retrieve the General Roman Calendar for a year, optionally translated. \
                Epiphany, Ascension and Corpus Christi are moved to the nearest Sunday unless \
                told otherwise."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "year": json_schema_year(YEAR_DESCRIPTION),
                    "locale": json_schema_string("Locale for translations (e.g. 'en', 'fr', 'la'). Defaults to 'en'."),
                    "epiphany_on_sunday": json_schema_boolean("Celebrate Epiphany on the Sunday between January 2 and 8 instead of January 6 (default: true)"),
                    "ascension_on_sunday": json_schema_boolean("Celebrate the Ascension on Sunday instead of Thursday (default: true)"),
                    "corpus_christi_on_sunday": json_schema_boolean("Celebrate Corpus Christi on Sunday instead of Thursday (default: true)")
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        Ok(tool_result(Self::NAME, self.run(arguments).await))
    }
}

/// Tool returning the calendar of one nation
pub struct NationalCalendarTool {
    context: ToolContext,
}

impl NationalCalendarTool {
    pub const NAME: &'static str = "get_national_calendar";

    pub fn new(context: ToolContext) -> Self {
        Self { context }
    }

    async fn run(&self, arguments: serde_json::Value) -> LitcalResult<String> {
        let args = ToolArgs::parse(arguments)?;
        let nation = parse_nation(args.string("nation")?.unwrap_or_default())?;

        render_calendar(&self.context, CalendarTarget::National(nation), &args, None).await
    }
}

#[async_trait::async_trait]
impl Tool for NationalCalendarTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: "Retrieve the liturgical calendar of a nation for a year. Use \
                list_available_calendars to see which nations are available."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "nation": json_schema_string("Two-letter nation code, e.g. 'CA' for Canada or 'US' for the United States"),
                    "year": json_schema_year(YEAR_DESCRIPTION),
                    "locale": json_schema_string("Locale such as 'fr_CA'; the closest locale the nation offers is used. Defaults to 'en'.")
                }),
                vec!["nation"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        Ok(tool_result(Self::NAME, self.run(arguments).await))
    }
}

/// Tool returning the calendar of one diocese
pub struct DiocesanCalendarTool {
    context: ToolContext,
}

impl DiocesanCalendarTool {
    pub const NAME: &'static str = "get_diocesan_calendar";

    pub fn new(context: ToolContext) -> Self {
        Self { context }
    }

    async fn run(&self, arguments: serde_json::Value) -> LitcalResult<String> {
        let args = ToolArgs::parse(arguments)?;
        let diocese = parse_diocese(args.string("diocese")?.unwrap_or_default())?;

        render_calendar(&self.context, CalendarTarget::Diocesan(diocese), &args, None).await
    }
}

#[async_trait::async_trait]
impl Tool for DiocesanCalendarTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: "Retrieve the liturgical calendar of a diocese for a year. Use \
                list_available_calendars to see which dioceses are available."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "diocese": json_schema_string("Diocese id, e.g. 'romamo_it' for the Diocese of Rome"),
                    "year": json_schema_year(YEAR_DESCRIPTION),
                    "locale": json_schema_string("Locale such as 'it_IT'; the closest locale the diocese offers is used. Defaults to 'en'.")
                }),
                vec!["diocese"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        Ok(tool_result(Self::NAME, self.run(arguments).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support::{calendar_body, context, event, mount_listing};
    use serde_json::json;
    use wiremock::matchers::{any, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn event_lines(result: &CallToolResult) -> usize {
        result
            .joined_text()
            .lines()
            .take_while(|l| !l.starts_with("## "))
            .filter(|l| l.starts_with("📅"))
            .count()
    }

    #[tokio::test]
    async fn test_general_calendar() {
        let server = MockServer::start().await;
        mount_listing(&server, 0).await;

        Mock::given(method("GET"))
            .and(path("/api/dev/calendar"))
            .and(query_param("year", "2025"))
            .and(query_param("locale", "en"))
            .and(query_param("year_type", "CIVIL"))
            .and(query_param("epiphany", "SUNDAY_JAN2_JAN8"))
            .and(query_param("ascension", "SUNDAY"))
            .and(query_param("corpus_christi", "SUNDAY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body(vec![
                event("Mary Mother of God", "2025-01-01", 6),
                event("Epiphany", "2025-01-05", 6),
                event("Baptism of the Lord", "2025-01-12", 5),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GeneralCalendarTool::new(context(&server));
        let result = tool
            .execute(json!({"year": 2025, "locale": "en"}))
            .await
            .unwrap();

        assert_eq!(result.is_error, None);
        let text = result.joined_text();
        assert!(text.starts_with("✅ General Roman Calendar 2025"));
        assert_eq!(event_lines(&result), 3);
        assert!(!text.contains("truncated"));
    }

    #[tokio::test]
    async fn test_general_calendar_transfer_flags_and_default_year() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/dev/calendar"))
            .and(query_param("year", "2025"))
            .and(query_param("epiphany", "JAN6"))
            .and(query_param("ascension", "THURSDAY"))
            .and(query_param("corpus_christi", "SUNDAY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body(vec![])))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GeneralCalendarTool::new(context(&server));
        let result = tool
            .execute(json!({"epiphany_on_sunday": false, "ascension_on_sunday": false}))
            .await
            .unwrap();
        assert_eq!(result.is_error, None);
        assert!(result.joined_text().contains("Total events: 0"));
    }

    #[tokio::test]
    async fn test_out_of_range_year_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let general = GeneralCalendarTool::new(context(&server));
        let national = NationalCalendarTool::new(context(&server));
        for (tool, args) in [
            (&general as &dyn Tool, json!({"year": 1969})),
            (&general as &dyn Tool, json!({"year": "10000"})),
            (&national as &dyn Tool, json!({"nation": "US", "year": 1800})),
        ] {
            let result = tool.execute(args).await.unwrap();
            assert_eq!(result.is_error, Some(true));
            assert!(result
                .joined_text()
                .starts_with("❌ Error [InvalidParameter]: invalid parameter `year`"));
        }
    }

    #[tokio::test]
    async fn test_string_booleans_are_rejected() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tool = GeneralCalendarTool::new(context(&server));
        let result = tool
            .execute(json!({"epiphany_on_sunday": "false"}))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(result.joined_text().contains("`epiphany_on_sunday`"));
    }

    #[tokio::test]
    async fn test_national_code_is_uppercased() {
        let server = MockServer::start().await;
        mount_listing(&server, 1).await;

        Mock::given(method("GET"))
            .and(path("/api/dev/calendar/nation/US"))
            .and(query_param("year", "2025"))
            .and(query_param("locale", "en_US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body(vec![event(
                "Thanksgiving Day",
                "2025-11-27",
                3,
            )])))
            .expect(1)
            .mount(&server)
            .await;

        let tool = NationalCalendarTool::new(context(&server));
        let result = tool
            .execute(json!({"nation": "us", "year": "2025"}))
            .await
            .unwrap();

        assert_eq!(result.is_error, None);
        assert!(result.joined_text().starts_with("✅ National Calendar US 2025"));
        assert_eq!(event_lines(&result), 1);
    }

    #[tokio::test]
    async fn test_national_locale_falls_back_to_same_language() {
        let server = MockServer::start().await;
        mount_listing(&server, 1).await;

        Mock::given(method("GET"))
            .and(path("/api/dev/calendar/nation/CA"))
            .and(query_param("locale", "fr_CA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body(vec![])))
            .expect(1)
            .mount(&server)
            .await;

        let tool = NationalCalendarTool::new(context(&server));
        let result = tool
            .execute(json!({"nation": "CA", "year": 2025, "locale": "fr"}))
            .await
            .unwrap();
        assert_eq!(result.is_error, None);
    }

    #[tokio::test]
    async fn test_malformed_nation_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tool = NationalCalendarTool::new(context(&server));
        for args in [json!({"nation": "USA"}), json!({})] {
            let result = tool.execute(args).await.unwrap();
            assert_eq!(result.is_error, Some(true));
            assert!(result
                .joined_text()
                .starts_with("❌ Error [InvalidParameter]: invalid parameter `nation`"));
        }
    }

    #[tokio::test]
    async fn test_unknown_nation_lists_available() {
        let server = MockServer::start().await;
        mount_listing(&server, 1).await;
        Mock::given(method("GET"))
            .and(path("/api/dev/calendar/nation/XX"))
            .respond_with(ResponseTemplate::new(404))
            .expect(0)
            .mount(&server)
            .await;

        let tool = NationalCalendarTool::new(context(&server));
        let result = tool.execute(json!({"nation": "xx"})).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        let text = result.joined_text();
        assert!(text.starts_with("❌ Error [UnknownCalendar]: national calendar not found for: XX"));
        assert!(text.contains("💡 Available nations: CA, IT, US"));
    }

    #[tokio::test]
    async fn test_unknown_diocese_makes_no_calendar_request() {
        let server = MockServer::start().await;
        mount_listing(&server, 1).await;
        Mock::given(method("GET"))
            .and(path("/api/dev/calendar/diocese/unknown_xx"))
            .respond_with(ResponseTemplate::new(404))
            .expect(0)
            .mount(&server)
            .await;

        let tool = DiocesanCalendarTool::new(context(&server));
        let result = tool
            .execute(json!({"diocese": "unknown_xx", "year": 2025}))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        let text = result.joined_text();
        assert!(text.contains("[UnknownCalendar]"));
        assert!(text.contains("💡 Available dioceses: boston_us, romamo_it"));
    }

    #[tokio::test]
    async fn test_diocesan_calendar() {
        let server = MockServer::start().await;
        mount_listing(&server, 1).await;

        Mock::given(method("GET"))
            .and(path("/api/dev/calendar/diocese/romamo_it"))
            .and(query_param("year", "2024"))
            .and(query_param("locale", "it_IT"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body(vec![event(
                "Dedication of the Lateran Basilica",
                "2024-11-09",
                5,
            )])))
            .expect(1)
            .mount(&server)
            .await;

        let tool = DiocesanCalendarTool::new(context(&server));
        let result = tool
            .execute(json!({"diocese": "RomaMo_IT", "year": 2024, "locale": "it"}))
            .await
            .unwrap();

        assert_eq!(result.is_error, None);
        assert!(result
            .joined_text()
            .starts_with("✅ Diocesan Calendar romamo_it 2024"));
    }

    #[tokio::test]
    async fn test_long_calendar_is_truncated() {
        let server = MockServer::start().await;
        let events = (0..75)
            .map(|i| event(&format!("Weekday {}", i), "2025-02-03", 0))
            .collect();

        Mock::given(method("GET"))
            .and(path("/api/dev/calendar"))
            .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body(events)))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GeneralCalendarTool::new(context(&server));
        let result = tool.execute(json!({"year": 2025})).await.unwrap();

        assert_eq!(event_lines(&result), 50);
        let text = result.joined_text();
        assert_eq!(text.matches("list truncated").count(), 1);
        assert!(text.contains("of 75 events"));
    }

    #[tokio::test]
    async fn test_upstream_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/dev/calendar"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let tool = GeneralCalendarTool::new(context(&server));
        let result = tool.execute(json!({"year": 2025})).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result.joined_text(),
            "❌ Error [UpstreamHTTPError]: upstream API returned HTTP 500: boom"
        );
    }
}
