//! Prediction history and win-rate statistics.
//!
//! Every chart analysis leaves a [`HistoricalPrediction`]; the trader later
//! flags it as successful or not. [`PerformanceStats`] summarizes the flagged
//! history.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime, UtcOffset};

use crate::error::StoreError;
use crate::store::JsonStore;
use crate::ValidationError;

/// Label used when a prediction carries no asset.
pub const UNKNOWN_ASSET: &str = "N/A";

/// Manual outcome assigned by the trader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManualFlag {
    Successful,
    Unsuccessful,
}

impl ManualFlag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Successful => "successful",
            Self::Unsuccessful => "unsuccessful",
        }
    }
}

impl Display for ManualFlag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManualFlag {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "successful" | "success" | "win" => Ok(Self::Successful),
            "unsuccessful" | "failure" | "loss" => Ok(Self::Unsuccessful),
            other => Err(ValidationError::InvalidManualFlag {
                value: other.to_owned(),
            }),
        }
    }
}

/// One analysed chart and its outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalPrediction {
    pub id: String,
    /// RFC3339 timestamp of the analysis.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    pub market_direction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_flag: Option<ManualFlag>,
}

impl HistoricalPrediction {
    /// UTC calendar day of `date`.
    pub fn day(&self) -> Result<Date, ValidationError> {
        OffsetDateTime::parse(&self.date, &Rfc3339)
            .map(|ts| ts.to_offset(UtcOffset::UTC).date())
            .map_err(|_| ValidationError::InvalidTimestamp {
                value: self.date.clone(),
            })
    }
}

/// Prediction history, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceLedger {
    predictions: Vec<HistoricalPrediction>,
}

impl PerformanceLedger {
    pub fn new(predictions: Vec<HistoricalPrediction>) -> Self {
        Self { predictions }
    }

    pub fn load(store: &JsonStore<HistoricalPrediction>) -> Result<Self, StoreError> {
        store.load().map(Self::new)
    }

    pub fn save(&self, store: &JsonStore<HistoricalPrediction>) -> Result<(), StoreError> {
        store.save(&self.predictions)
    }

    pub fn list(&self) -> &[HistoricalPrediction] {
        &self.predictions
    }

    /// Prepend entries whose id is not yet recorded. Returns how many were added.
    pub fn merge_new(&mut self, incoming: Vec<HistoricalPrediction>) -> usize {
        let mut seen = self
            .predictions
            .iter()
            .map(|p| p.id.clone())
            .collect::<HashSet<_>>();
        let mut merged = incoming
            .into_iter()
            .filter(|p| seen.insert(p.id.clone()))
            .collect::<Vec<_>>();

        let added = merged.len();
        if added > 0 {
            merged.append(&mut self.predictions);
            self.predictions = merged;
        }
        added
    }

    pub fn flag(
        &mut self,
        id: &str,
        flag: ManualFlag,
    ) -> Result<&HistoricalPrediction, ValidationError> {
        let prediction = self
            .predictions
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| unknown(id))?;
        prediction.manual_flag = Some(flag);
        Ok(prediction)
    }

    pub fn remove(&mut self, id: &str) -> Result<HistoricalPrediction, ValidationError> {
        let index = self
            .predictions
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| unknown(id))?;
        Ok(self.predictions.remove(index))
    }

    pub fn stats(&self, today: Date) -> PerformanceStats {
        PerformanceStats::compute(&self.predictions, today)
    }
}

fn unknown(id: &str) -> ValidationError {
    ValidationError::UnknownPrediction { id: id.to_owned() }
}

/// Summary of flagged predictions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceStats {
    pub total_predictions: usize,
    pub successful_trades: usize,
    pub unsuccessful_trades: usize,
    /// Percentage of flagged predictions that succeeded; 0 when none are flagged.
    pub win_rate: f64,
    /// Consecutive days with at least one success, ending today or yesterday.
    pub current_streak: u32,
    pub best_asset: String,
    /// Win rate of `best_asset`, or -1 when nothing is flagged.
    pub best_asset_win_rate: f64,
}

impl PerformanceStats {
    pub fn compute(predictions: &[HistoricalPrediction], today: Date) -> Self {
        let successful_trades = count_flag(predictions, ManualFlag::Successful);
        let unsuccessful_trades = count_flag(predictions, ManualFlag::Unsuccessful);
        let total_flagged = successful_trades + unsuccessful_trades;

        let win_rate = if total_flagged > 0 {
            successful_trades as f64 / total_flagged as f64 * 100.0
        } else {
            0.0
        };

        let (best_asset, best_asset_win_rate) = best_asset(predictions);

        Self {
            total_predictions: predictions.len(),
            successful_trades,
            unsuccessful_trades,
            win_rate,
            current_streak: current_streak(predictions, today),
            best_asset,
            best_asset_win_rate,
        }
    }
}

fn count_flag(predictions: &[HistoricalPrediction], flag: ManualFlag) -> usize {
    predictions
        .iter()
        .filter(|p| p.manual_flag == Some(flag))
        .count()
}

fn current_streak(predictions: &[HistoricalPrediction], today: Date) -> u32 {
    // Unparseable dates cannot extend a streak and are skipped.
    let days = predictions
        .iter()
        .filter(|p| p.manual_flag == Some(ManualFlag::Successful))
        .filter_map(|p| p.day().ok())
        .collect::<BTreeSet<_>>();

    let mut newest_first = days.into_iter().rev();
    let Some(latest) = newest_first.next() else {
        return 0;
    };
    if (today - latest).whole_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    let mut previous = latest;
    for day in newest_first {
        if (previous - day).whole_days() != 1 {
            break;
        }
        streak += 1;
        previous = day;
    }
    streak
}

fn best_asset(predictions: &[HistoricalPrediction]) -> (String, f64) {
    let mut order = Vec::new();
    let mut tallies: HashMap<&str, (u32, u32)> = HashMap::new();

    for prediction in predictions {
        let Some(flag) = prediction.manual_flag else {
            continue;
        };
        let asset = prediction
            .asset
            .as_deref()
            .filter(|asset| !asset.is_empty())
            .unwrap_or(UNKNOWN_ASSET);

        let tally = tallies.entry(asset).or_insert_with(|| {
            order.push(asset);
            (0, 0)
        });
        tally.1 += 1;
        if flag == ManualFlag::Successful {
            tally.0 += 1;
        }
    }

    let mut best = (String::from(UNKNOWN_ASSET), -1.0);
    for asset in order {
        let (wins, total) = tallies[asset];
        let rate = f64::from(wins) / f64::from(total) * 100.0;
        if rate > best.1 {
            best = (asset.to_owned(), rate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn prediction(
        id: &str,
        date: &str,
        asset: Option<&str>,
        flag: Option<ManualFlag>,
    ) -> HistoricalPrediction {
        HistoricalPrediction {
            id: id.to_owned(),
            date: date.to_owned(),
            asset: asset.map(str::to_owned),
            market_direction: String::from("Bullish"),
            manual_flag: flag,
        }
    }

    fn day(d: u8) -> Date {
        Date::from_calendar_date(2024, Month::May, d).expect("valid date")
    }

    #[test]
    fn empty_history_has_neutral_stats() {
        let stats = PerformanceStats::compute(&[], day(10));
        assert_eq!(stats.total_predictions, 0);
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_asset, "N/A");
        assert_eq!(stats.best_asset_win_rate, -1.0);
    }

    #[test]
    fn streak_counts_consecutive_successful_days() {
        let history = vec![
            prediction("a", "2024-05-10T09:00:00Z", Some("AAPL"), Some(ManualFlag::Successful)),
            prediction("b", "2024-05-10T15:00:00Z", Some("AAPL"), Some(ManualFlag::Successful)),
            prediction("c", "2024-05-09T12:00:00Z", Some("BTC/USD"), Some(ManualFlag::Successful)),
            prediction("d", "2024-05-07T12:00:00Z", Some("BTC/USD"), Some(ManualFlag::Successful)),
        ];
        assert_eq!(current_streak(&history, day(11)), 2);
        assert_eq!(current_streak(&history, day(12)), 0);
    }

    #[test]
    fn best_asset_keeps_first_on_ties() {
        let history = vec![
            prediction("a", "2024-05-10T09:00:00Z", Some("EUR/USD"), Some(ManualFlag::Successful)),
            prediction("b", "2024-05-10T09:00:00Z", Some("AAPL"), Some(ManualFlag::Successful)),
            prediction("c", "2024-05-10T09:00:00Z", None, Some(ManualFlag::Unsuccessful)),
            prediction("d", "2024-05-10T09:00:00Z", Some("TSLA"), None),
        ];
        assert_eq!(best_asset(&history), (String::from("EUR/USD"), 100.0));
    }

    #[test]
    fn merge_skips_known_and_duplicate_ids() {
        let mut ledger =
            PerformanceLedger::new(vec![prediction("a", "2024-05-10T09:00:00Z", None, None)]);
        let added = ledger.merge_new(vec![
            prediction("a", "2024-05-11T09:00:00Z", None, None),
            prediction("b", "2024-05-11T09:00:00Z", None, None),
            prediction("b", "2024-05-11T09:00:00Z", None, None),
        ]);

        assert_eq!(added, 1);
        let ids = ledger.list().iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
