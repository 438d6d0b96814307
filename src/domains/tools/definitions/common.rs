//! Common utilities shared across Poly Pizza tools.
//!
//! Search filters and query-string encoding, tool metadata construction, and
//! the response envelopes every tool call ends in.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Number, Value};
use tracing::warn;

use crate::domains::tools::error::ToolError;

/// Largest page size the API advertises for searches.
pub const MAX_SEARCH_LIMIT: u32 = 32;

/// Optional filters shared by both search tools.
///
/// Empty strings and zero numbers are treated as absent, matching the
/// "append only if set" behaviour clients expect.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchFilters {
    #[schemars(description = "Filter by category (0-11): 0=Food & Drink, 1=Clutter, 2=Weapons, 3=Transport, 4=Furniture & Decor, 5=Objects, 6=Nature, 7=Animals, 8=Buildings/Architecture, 9=People & Characters, 10=Scenes & Levels, 11=Other")]
    #[serde(default)]
    pub category: Option<String>,

    #[schemars(description = "Filter by license (e.g., CC0, CC-BY, CC-BY-SA)")]
    #[serde(default)]
    pub license: Option<String>,

    #[schemars(description = "Filter by animation status")]
    #[serde(default)]
    pub animated: Option<bool>,

    /// Forwarded unchanged even above the advertised maximum.
    #[schemars(description = "Maximum number of results (max 32)", range(max = 32))]
    #[serde(default, deserialize_with = "integral")]
    pub limit: Option<u32>,

    #[schemars(description = "Page number for pagination")]
    #[serde(default, deserialize_with = "integral")]
    pub page: Option<u32>,
}

impl SearchFilters {
    /// Encode the filters as a query string, `None` when nothing is set.
    pub fn to_query(&self) -> Result<Option<String>, ToolError> {
        QueryParams {
            category: non_empty(&self.category),
            license: non_empty(&self.license),
            animated: self.animated,
            limit: non_zero(self.limit),
            page: non_zero(self.page),
        }
        .encode()
    }
}

/// Query parameters understood by the API, in the order they are sent.
#[derive(Debug, Default, Serialize)]
pub struct QueryParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl QueryParams<'_> {
    /// Form-encode the set parameters; an empty result means no query at all.
    pub fn encode(&self) -> Result<Option<String>, ToolError> {
        let query = serde_urlencoded::to_string(self).map_err(|e| ToolError::encode(e.to_string()))?;
        Ok(Some(query).filter(|q| !q.is_empty()))
    }
}

/// Deserialize an optional count from any JSON number with no fractional part.
///
/// `10` and `10.0` both decode to `10`. Anything else that does not fit a
/// `u32` is rejected.
pub fn integral<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };

    number
        .as_u64()
        .or_else(|| {
            number
                .as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as u64)
        })
        .and_then(|n| u32::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("expected a non-negative integer, got {number}")))
}

/// `Some` only for a non-empty string.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// `Some` only for a non-zero number.
pub fn non_zero(value: Option<u32>) -> Option<u32> {
    value.filter(|n| *n != 0)
}

/// Build the MCP tool metadata for a parameters type.
pub fn build_tool<P: JsonSchema + 'static>(name: &'static str, description: &'static str) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a success result: the body pretty-printed as a single text item.
///
/// The error flag is left unset so the envelope is exactly `{content: [...]}`.
pub fn success_result(body: &Value) -> Result<CallToolResult, ToolError> {
    let text = serde_json::to_string_pretty(body)?;
    let mut result = CallToolResult::success(vec![Content::text(text)]);
    result.is_error = None;
    Ok(result)
}

/// Create an error result with an `Error: <message>` text item.
pub fn error_result(error: &ToolError) -> CallToolResult {
    warn!(kind = error.kind(), "{}", error);
    CallToolResult::error(vec![Content::text(format!("Error: {error}"))])
}

/// Convert the outcome of a tool call into its response envelope.
pub fn envelope(outcome: Result<Value, ToolError>) -> CallToolResult {
    match outcome.and_then(|body| success_result(&body)) {
        Ok(result) => result,
        Err(e) => error_result(&e),
    }
}
