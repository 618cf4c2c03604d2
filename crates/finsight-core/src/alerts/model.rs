use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::ValidationError;

const MIN_NAME_LEN: usize = 3;
const MIN_ASSET_LEN: usize = 2;

/// Event an alert watches for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionType {
    PriceTarget,
    ConfidenceChange,
    PatternDetected,
}

impl ConditionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceTarget => "price_target",
            Self::ConfidenceChange => "confidence_change",
            Self::PatternDetected => "pattern_detected",
        }
    }

    /// Human label, e.g. `price target`.
    pub fn label(self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

impl Display for ConditionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "price_target" => Ok(Self::PriceTarget),
            "confidence_change" => Ok(Self::ConfidenceChange),
            "pattern_detected" => Ok(Self::PatternDetected),
            other => Err(ValidationError::InvalidConditionType {
                value: other.to_owned(),
            }),
        }
    }
}

/// Delivery channel requested for an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationMethod {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "sms")]
    Sms,
    #[serde(rename = "in-app")]
    InApp,
}

impl NotificationMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
            Self::InApp => "in-app",
        }
    }
}

impl Display for NotificationMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationMethod {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            "in-app" | "in_app" | "inapp" => Ok(Self::InApp),
            other => Err(ValidationError::InvalidNotificationMethod {
                value: other.to_owned(),
            }),
        }
    }
}

/// Alert as submitted by the user, before an id and reference price exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlert {
    pub name: String,
    pub asset: String,
    pub condition_type: ConditionType,
    pub value: String,
    pub notification_method: NotificationMethod,
    pub is_active: bool,
}

impl NewAlert {
    pub fn new(
        name: impl Into<String>,
        asset: impl Into<String>,
        condition_type: ConditionType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            asset: asset.into(),
            condition_type,
            value: value.into(),
            notification_method: NotificationMethod::InApp,
            is_active: true,
        }
    }

    pub fn with_notification_method(mut self, method: NotificationMethod) -> Self {
        self.notification_method = method;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().chars().count() < MIN_NAME_LEN {
            return Err(ValidationError::AlertNameTooShort { min: MIN_NAME_LEN });
        }
        if self.asset.trim().chars().count() < MIN_ASSET_LEN {
            return Err(ValidationError::AlertAssetTooShort);
        }
        if self.value.trim().is_empty() {
            return Err(ValidationError::EmptyAlertValue);
        }
        Ok(())
    }
}

/// Persisted alert. Field names match the dashboard's stored JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertConfig {
    pub id: String,
    pub name: String,
    pub asset: String,
    pub condition_type: ConditionType,
    pub value: String,
    pub notification_method: NotificationMethod,
    pub is_active: bool,
    pub created_at: String,
    /// Price of `asset` when the alert was created, if it could be fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
}

impl AlertConfig {
    /// Validate `new` and stamp it with a fresh id and creation time.
    pub fn create(
        new: NewAlert,
        original_price: Option<f64>,
        created_at: OffsetDateTime,
    ) -> Result<Self, ValidationError> {
        new.validate()?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: new.name.trim().to_owned(),
            asset: new.asset.trim().to_owned(),
            condition_type: new.condition_type,
            value: new.value.trim().to_owned(),
            notification_method: new.notification_method,
            is_active: new.is_active,
            created_at: created_at
                .format(&Rfc3339)
                .unwrap_or_else(|_| created_at.to_string()),
            original_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_names_and_assets() {
        let alert = NewAlert::new("ab", "BTC/USD", ConditionType::PriceTarget, "70000");
        assert_eq!(
            alert.validate(),
            Err(ValidationError::AlertNameTooShort { min: 3 })
        );

        let alert = NewAlert::new("Moon", "B", ConditionType::PriceTarget, "70000");
        assert_eq!(alert.validate(), Err(ValidationError::AlertAssetTooShort));

        let alert = NewAlert::new("Moon", "BTC", ConditionType::PriceTarget, "  ");
        assert_eq!(alert.validate(), Err(ValidationError::EmptyAlertValue));
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!(
            "pattern_detected".parse::<ConditionType>(),
            Ok(ConditionType::PatternDetected)
        );
        assert_eq!(
            "in-app".parse::<NotificationMethod>(),
            Ok(NotificationMethod::InApp)
        );
        assert!("fax".parse::<NotificationMethod>().is_err());
    }

    #[test]
    fn condition_label_replaces_first_underscore() {
        assert_eq!(ConditionType::ConfidenceChange.label(), "confidence change");
    }

    #[test]
    fn stored_json_uses_dashboard_field_names() {
        let alert = AlertConfig::create(
            NewAlert::new("Breakout", "AAPL", ConditionType::PriceTarget, "200"),
            Some(172.35),
            OffsetDateTime::UNIX_EPOCH,
        )
        .expect("valid alert");

        let json = serde_json::to_value(&alert).expect("serialize");
        assert_eq!(json["conditionType"], "price_target");
        assert_eq!(json["notificationMethod"], "in-app");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
        assert_eq!(json["originalPrice"], 172.35);
    }
}
