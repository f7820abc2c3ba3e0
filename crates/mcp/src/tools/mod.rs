// Calendar tools exposed over MCP

mod args;
mod calendar;
mod listing;
mod liturgy;
mod registry;

pub use args::ToolArgs;
pub use calendar::{DiocesanCalendarTool, GeneralCalendarTool, NationalCalendarTool};
pub use listing::ListCalendarsTool;
pub use liturgy::LiturgyOfTheDayTool;
pub use registry::{
    json_schema_boolean, json_schema_enum, json_schema_object, json_schema_string,
    json_schema_year, Tool, ToolRegistry,
};

use crate::protocol::CallToolResult;
use chrono::NaiveDate;
use litcal_core::format::format_error;
use litcal_core::types::{CalendarRequest, CalendarResponse, CalendarTarget, Locale};
use litcal_core::LitcalResult;
use litcal_sdk::LitcalClient;
use std::sync::Arc;
use tracing::{debug, warn};

/// Source of "today", used for the default year and date.
pub type Today = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// What every calendar tool needs: the upstream client and a clock.
#[derive(Debug, Clone)]
pub struct ToolContext {
    client: LitcalClient,
    today: Today,
}

impl ToolContext {
    pub fn new(client: LitcalClient) -> Self {
        Self {
            client,
            today: local_today,
        }
    }

    pub fn with_today(mut self, today: Today) -> Self {
        self.today = today;
        self
    }

    pub fn client(&self) -> &LitcalClient {
        &self.client
    }

    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    /// Build a request for a syntactically valid target.
    ///
    /// National and diocesan targets are checked against the upstream listing
    /// first, and their locale is matched against the locales that calendar
    /// offers. The general calendar needs no listing.
    pub async fn calendar_request(
        &self,
        target: CalendarTarget,
        year: i32,
        locale: Locale,
    ) -> LitcalResult<CalendarRequest> {
        let locale = match target {
            CalendarTarget::General => locale,
            _ => {
                let listing = self.client.calendars().list().await?;
                listing.ensure_known(&target)?;
                listing.supported_locale(&target, &locale)
            }
        };
        Ok(CalendarRequest::new(target, year, locale))
    }

    pub async fn fetch(&self, request: &CalendarRequest) -> LitcalResult<CalendarResponse> {
        debug!(
            path = %request.target.resource_path(),
            year = request.year,
            locale = %request.locale,
            "Fetching calendar"
        );
        Ok(self.client.calendars().fetch(request).await?)
    }
}

/// Turn the outcome of a tool into its MCP result.
pub(crate) fn tool_result(tool: &str, outcome: LitcalResult<String>) -> CallToolResult {
    match outcome {
        Ok(text) => CallToolResult::text(text),
        Err(e) => {
            warn!(tool = tool, kind = e.kind(), error = %e, "Tool call failed");
            CallToolResult::error(format_error(&e))
        }
    }
}

/// Registry with every calendar tool, in the order they are listed to clients.
pub fn calendar_registry(context: ToolContext) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(ListCalendarsTool::new(context.clone())));
    registry.register(Arc::new(GeneralCalendarTool::new(context.clone())));
    registry.register(Arc::new(NationalCalendarTool::new(context.clone())));
    registry.register(Arc::new(DiocesanCalendarTool::new(context.clone())));
    registry.register(Arc::new(LiturgyOfTheDayTool::new(context)));
    registry
}
