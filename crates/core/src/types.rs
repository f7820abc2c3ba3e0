use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LitcalError;

/// Earliest year the upstream API computes.
pub const MIN_YEAR: i32 = 1970;

/// Latest year the upstream API computes.
pub const MAX_YEAR: i32 = 9999;

/// Locale used when the caller does not ask for one.
pub const DEFAULT_LOCALE: &str = "en";

/// Scope of a liturgical calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    General,
    National,
    Diocesan,
}

impl CalendarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::National => "national",
            Self::Diocesan => "diocesan",
        }
    }
}

impl std::fmt::Display for CalendarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarType {
    type Err = LitcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" | "general_roman" => Ok(Self::General),
            "national" => Ok(Self::National),
            "diocesan" => Ok(Self::Diocesan),
            other => Err(LitcalError::invalid_parameter(
                "calendar_type",
                format!("`{}` is not one of general, national, diocesan", other),
            )),
        }
    }
}

/// Two-letter nation code, always uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NationCode(pub(crate) String);

impl NationCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Diocese identifier such as `romamo_it`, always lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DioceseId(pub(crate) String);

impl DioceseId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DioceseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Locale code in `ll` or `ll_RR` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale(pub(crate) String);

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language part of the locale (`fr` for `fr_CA`).
    pub fn language(&self) -> &str {
        self.0.split('_').next().unwrap_or(&self.0)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which calendar a request targets.
///
/// National and diocesan calendars always carry their identifier, the
/// general calendar never does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalendarTarget {
    General,
    National(NationCode),
    Diocesan(DioceseId),
}

impl CalendarTarget {
    pub fn calendar_type(&self) -> CalendarType {
        match self {
            Self::General => CalendarType::General,
            Self::National(_) => CalendarType::National,
            Self::Diocesan(_) => CalendarType::Diocesan,
        }
    }

    pub fn calendar_id(&self) -> Option<&str> {
        match self {
            Self::General => None,
            Self::National(nation) => Some(nation.as_str()),
            Self::Diocesan(diocese) => Some(diocese.as_str()),
        }
    }

    /// Resource path relative to the API base URL.
    pub fn resource_path(&self) -> String {
        match self {
            Self::General => "calendar".to_string(),
            Self::National(nation) => format!("calendar/nation/{}", nation),
            Self::Diocesan(diocese) => format!("calendar/diocese/{}", diocese),
        }
    }

    /// Human readable title, e.g. `General Roman Calendar 2025`.
    pub fn title(&self, year: i32) -> String {
        match self {
            Self::General => format!("General Roman Calendar {}", year),
            Self::National(nation) => format!("National Calendar {} {}", nation, year),
            Self::Diocesan(diocese) => format!("Diocesan Calendar {} {}", diocese, year),
        }
    }
}

/// Whether moveable solemnities are transferred to the following Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransferFlags {
    pub epiphany_on_sunday: bool,
    pub ascension_on_sunday: bool,
    pub corpus_christi_on_sunday: bool,
}

impl Default for TransferFlags {
    fn default() -> Self {
        Self {
            epiphany_on_sunday: true,
            ascension_on_sunday: true,
            corpus_christi_on_sunday: true,
        }
    }
}

impl TransferFlags {
    pub fn epiphany_param(&self) -> &'static str {
        if self.epiphany_on_sunday {
            "SUNDAY_JAN2_JAN8"
        } else {
            "JAN6"
        }
    }

    pub fn ascension_param(&self) -> &'static str {
        if self.ascension_on_sunday {
            "SUNDAY"
        } else {
            "THURSDAY"
        }
    }

    pub fn corpus_christi_param(&self) -> &'static str {
        if self.corpus_christi_on_sunday {
            "SUNDAY"
        } else {
            "THURSDAY"
        }
    }
}

/// Year boundaries used by the upstream API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum YearType {
    Civil,
}

/// Fully validated calendar request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRequest {
    pub target: CalendarTarget,
    pub year: i32,
    pub locale: Locale,
    /// Only meaningful for the general calendar; national and diocesan
    /// calendars carry their own transfer settings upstream.
    pub transfers: Option<TransferFlags>,
}

impl CalendarRequest {
    pub fn new(target: CalendarTarget, year: i32, locale: Locale) -> Self {
        let transfers = match target {
            CalendarTarget::General => Some(TransferFlags::default()),
            _ => None,
        };
        Self {
            target,
            year,
            locale,
            transfers,
        }
    }

    pub fn with_transfers(mut self, transfers: TransferFlags) -> Self {
        if self.target == CalendarTarget::General {
            self.transfers = Some(transfers);
        }
        self
    }

    /// Query string sent with the request.
    pub fn query(&self) -> CalendarQuery<'_> {
        CalendarQuery {
            year: self.year,
            locale: self.locale.as_str(),
            year_type: YearType::Civil,
            epiphany: self.transfers.map(|t| t.epiphany_param()),
            ascension: self.transfers.map(|t| t.ascension_param()),
            corpus_christi: self.transfers.map(|t| t.corpus_christi_param()),
        }
    }
}

/// Query parameters of a calendar request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarQuery<'a> {
    pub year: i32,
    pub locale: &'a str,
    pub year_type: YearType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epiphany: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascension: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus_christi: Option<&'static str>,
}

/// Rank of a celebration, 0 (weekday) to 7 (higher solemnity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Grade {
    Weekday = 0,
    Commemoration = 1,
    OptionalMemorial = 2,
    Memorial = 3,
    Feast = 4,
    FeastOfTheLord = 5,
    Solemnity = 6,
    HigherSolemnity = 7,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekday => "Weekday",
            Self::Commemoration => "Commemoration",
            Self::OptionalMemorial => "Optional Memorial",
            Self::Memorial => "Memorial",
            Self::Feast => "Feast",
            Self::FeastOfTheLord => "Feast of the Lord",
            Self::Solemnity => "Solemnity",
            Self::HigherSolemnity => "Higher Solemnity",
        }
    }
}

impl TryFrom<u8> for Grade {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Weekday),
            1 => Ok(Self::Commemoration),
            2 => Ok(Self::OptionalMemorial),
            3 => Ok(Self::Memorial),
            4 => Ok(Self::Feast),
            5 => Ok(Self::FeastOfTheLord),
            6 => Ok(Self::Solemnity),
            7 => Ok(Self::HigherSolemnity),
            other => Err(format!("liturgical grade {} is outside 0..=7", other)),
        }
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> Self {
        grade as u8
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Liturgical color of a celebration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiturgicalColor {
    White,
    Red,
    Green,
    Purple,
    #[serde(alias = "pink")]
    Rose,
}

impl LiturgicalColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Red => "red",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Rose => "rose",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::White => "⚪",
            Self::Red => "🔴",
            Self::Green => "🟢",
            Self::Purple => "🟣",
            Self::Rose => "🌸",
        }
    }
}

impl std::fmt::Display for LiturgicalColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji(), self.as_str())
    }
}

/// Event date as sent upstream: RFC 3339 text, or a Unix timestamp on
/// older API versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventDate {
    Timestamp(i64),
    Text(String),
}

impl EventDate {
    pub fn naive_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Timestamp(ts) => DateTime::from_timestamp(*ts, 0).map(|dt| dt.date_naive()),
            Self::Text(text) => text
                .get(..10)
                .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()),
        }
    }
}

impl std::fmt::Display for EventDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.naive_date(), self) {
            (Some(date), _) => write!(f, "{}", date.format("%Y-%m-%d")),
            (None, Self::Text(text)) => f.write_str(text),
            (None, Self::Timestamp(ts)) => write!(f, "{}", ts),
        }
    }
}

/// A single celebration as returned by the upstream API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiturgicalEvent {
    #[serde(default)]
    pub event_key: String,
    pub name: String,
    pub date: EventDate,
    pub grade: Grade,
    #[serde(default)]
    pub grade_lcl: Option<String>,
    #[serde(default)]
    pub color: Vec<LiturgicalColor>,
    #[serde(default)]
    pub color_lcl: Vec<String>,
    #[serde(default)]
    pub liturgical_season: Option<String>,
    #[serde(default)]
    pub liturgical_season_lcl: Option<String>,
    #[serde(default)]
    pub common: Vec<String>,
    #[serde(default)]
    pub common_lcl: Option<String>,
    #[serde(default)]
    pub liturgical_year: Option<String>,
    #[serde(default)]
    pub readings: Option<serde_json::Value>,
    #[serde(default)]
    pub is_vigil_mass: bool,
    #[serde(default)]
    pub holy_day_of_obligation: bool,
    /// Set when the event belongs to this calendar and not the general one.
    #[serde(default)]
    pub is_particular: bool,
}

impl LiturgicalEvent {
    /// Season label, preferring the localized one.
    pub fn season(&self) -> Option<&str> {
        self.liturgical_season_lcl
            .as_deref()
            .or(self.liturgical_season.as_deref())
            .filter(|s| !s.is_empty())
    }

    pub fn falls_on(&self, day: NaiveDate) -> bool {
        self.date.naive_date() == Some(day)
    }
}

/// Settings echoed back by the upstream API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    pub year: Option<i32>,
    pub locale: Option<String>,
    pub national_calendar: Option<String>,
    pub diocesan_calendar: Option<String>,
    pub epiphany: Option<String>,
    pub ascension: Option<String>,
    pub corpus_christi: Option<String>,
    pub year_type: Option<String>,
}

/// Body of a calendar response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub litcal: Vec<LiturgicalEvent>,
    #[serde(default)]
    pub settings: CalendarSettings,
}

/// Lectionary cycles in effect for a civil year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LectionaryCycles {
    /// Sundays and solemnities: A, B or C
    pub festive: char,
    /// Weekdays: I or II
    pub ferial: &'static str,
}

impl LectionaryCycles {
    pub fn for_year(year: i32) -> Self {
        const FESTIVE: [char; 3] = ['A', 'B', 'C'];
        const FERIAL: [&str; 2] = ["I", "II"];

        let offset = year - 1;
        Self {
            festive: FESTIVE[offset.rem_euclid(3) as usize],
            ferial: FERIAL[offset.rem_euclid(2) as usize],
        }
    }
}
