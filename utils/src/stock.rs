use std::fmt::{self, Display};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use crate::Reqwest;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(input: &str) -> crate::Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| crate::Error::InvalidDate(input.to_string()))
}

/// Accepts the date shapes seen from price backends: a plain date, an
/// RFC 3339 timestamp, or a naive timestamp taken as UTC.
pub fn parse_bar_date(input: &str) -> crate::Result<NaiveDate> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Ok(datetime.naive_utc().date());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .map(|datetime| datetime.date())
        .map_err(|_| crate::Error::InvalidDate(input.to_string()))
}

/// A validated request for daily bars of one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    symbol: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl Query {
    pub fn new(symbol: &str, start: NaiveDate, end: NaiveDate) -> crate::Result<Self> {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(crate::Error::EmptySymbol);
        }
        if start > end {
            return Err(crate::Error::DateRangeInverted { start, end });
        }
        Ok(Self { symbol, start, end })
    }

    pub fn parse(symbol: &str, start: &str, end: &str) -> crate::Result<Self> {
        Self::new(symbol, parse_date(start)?, parse_date(end)?)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn start_str(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}..{}", self.symbol, self.start_str(), self.end_str())
    }
}

/// One trading day as served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    #[serde(serialize_with = "serialize_date", deserialize_with = "deserialize_date")]
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl DailyBar {
    /// Unix seconds of the bar's date at midnight UTC.
    pub fn timestamp(&self) -> i64 {
        self.date.and_time(NaiveTime::MIN).and_utc().timestamp()
    }
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(DATE_FORMAT))
}

fn deserialize_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_bar_date(&raw).map_err(serde::de::Error::custom)
}

#[derive(Debug, Serialize)]
struct RangeParams {
    start: String,
    end: String,
}

/// Client for `GET {base}/api/stock/{symbol}?start=..&end=..`.
#[derive(Debug, Clone)]
pub struct StockApi {
    base_url: Url,
    client: Client,
}

impl StockApi {
    pub fn new(base_url: &str) -> crate::Result<Self> {
        let base_url = base_url
            .parse::<Url>()
            .map_err(|_| crate::Error::InvalidUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(crate::Error::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url,
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn bars_url(&self, symbol: &str) -> crate::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| crate::Error::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "stock", symbol]);
        Ok(url)
    }

    pub async fn daily_bars(&self, query: &Query) -> crate::Result<Vec<DailyBar>> {
        let params = RangeParams {
            start: query.start_str(),
            end: query.end_str(),
        };
        Reqwest::get_with(&self.client, self.bars_url(query.symbol())?)?
            .query(&params)
            .receive_json::<Vec<DailyBar>>()
            .await
    }
}
