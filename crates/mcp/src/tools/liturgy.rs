// Tool returning the celebrations of a single day

use super::{
    json_schema_enum, json_schema_object, json_schema_string, tool_result, Tool, ToolArgs,
    ToolContext,
};
use crate::protocol::{CallToolResult, ToolSchema};
use anyhow::Result;
use chrono::Datelike;
use litcal_core::format::format_liturgy_of_the_day;
use litcal_core::types::CalendarType;
use litcal_core::validation::{parse_locale, parse_target, resolve_date};
use litcal_core::LitcalResult;
use tracing::info;

/// Tool returning the liturgy of one day, with readings, from any calendar
pub struct LiturgyOfTheDayTool {
    context: ToolContext,
}

impl LiturgyOfTheDayTool {
    pub const NAME: &'static str = "get_liturgy_of_the_day";

    pub fn new(context: ToolContext) -> Self {
        Self { context }
    }

    async fn run(&self, arguments: serde_json::Value) -> LitcalResult<String> {
        let args = ToolArgs::parse(arguments)?;

        let calendar_type = match args.string("calendar_type")?.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.parse::<CalendarType>()?,
            _ => CalendarType::General,
        };
        let target = parse_target(calendar_type, args.string("calendar_id")?)?;
        let day = resolve_date(args.string("date")?, self.context.today())?;
        let locale = parse_locale(args.string("locale")?)?;

        info!(calendar = %target.title(day.year()), date = %day, "Fetching liturgy of the day");

        let request = self
            .context
            .calendar_request(target, day.year(), locale)
            .await?;
        let response = self.context.fetch(&request).await?;

        format_liturgy_of_the_day(&request.target, day, &response)
    }
}

#[async_trait::async_trait]
impl Tool for LiturgyOfTheDayTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: "Retrieve the liturgical celebrations of a date, with their readings, \
                from the general, a national or a diocesan calendar. Examples: today in the \
                General Roman Calendar (no arguments); Christmas in the United States \
                (date='2024-12-25', calendar_type='national', calendar_id='US')."
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "date": json_schema_string("Date in YYYY-MM-DD format. Defaults to today."),
                    "calendar_type": json_schema_enum(
                        &["general", "national", "diocesan"],
                        "Which calendar to read (default: general)"
                    ),
                    "calendar_id": json_schema_string("Nation code like 'US' or diocese id like 'romamo_it'. Required for national and diocesan calendars, ignored for the general calendar."),
                    "locale": json_schema_string("Locale for translations (e.g. 'en', 'fr_CA'). Defaults to 'en'.")
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        Ok(tool_result(Self::NAME, self.run(arguments).await))
    }
}
