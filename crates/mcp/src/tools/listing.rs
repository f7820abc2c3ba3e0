// Tool listing the calendars known upstream

use super::{json_schema_object, tool_result, Tool, ToolArgs, ToolContext};
use crate::protocol::{CallToolResult, ToolSchema};
use anyhow::Result;
use litcal_core::format::format_listing;
use litcal_core::LitcalResult;
use tracing::info;

/// Tool listing national and diocesan calendars with their locales and settings
pub struct ListCalendarsTool {
    context: ToolContext,
}

impl ListCalendarsTool {
    pub const NAME: &'static str = "list_available_calendars";

    pub fn new(context: ToolContext) -> Self {
        Self { context }
    }

    async fn run(&self, arguments: serde_json::Value) -> LitcalResult<String> {
        // Takes no parameters, but a non-object is still a malformed call
        ToolArgs::parse(arguments)?;

        let listing = self.context.client().calendars().list().await?;
        info!(
            national = listing.national_calendars.len(),
            diocesan = listing.diocesan_calendars.len(),
            "Listing calendars"
        );
        Ok(format_listing(&listing))
    }
}

#[async_trait::async_trait]
impl Tool for ListCalendarsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            description: "List all available national and diocesan calendars with their \
                locales and settings, plus the locales of the General Roman Calendar."
                .to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        Ok(tool_result(Self::NAME, self.run(arguments).await))
    }
}
