use serde::Serialize;

use super::model::{AlertConfig, NotificationMethod};

/// Rendered message for a triggered alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertNotification {
    pub alert_id: String,
    pub method: NotificationMethod,
    pub subject: String,
    pub body: String,
}

impl AlertNotification {
    pub fn for_alert(alert: &AlertConfig) -> Self {
        let body = format!(
            "Your alert for {} has met its condition: {} at {}.",
            alert.asset,
            alert.condition_type.label(),
            alert.value
        );

        let (subject, body) = match alert.notification_method {
            NotificationMethod::InApp => (
                format!("Alert Triggered: {}", alert.name),
                format!("{body} (This is a simulated trigger)"),
            ),
            NotificationMethod::Email | NotificationMethod::Sms => (
                format!("FinSight AI Alert Triggered: {}", alert.name),
                body,
            ),
        };

        Self {
            alert_id: alert.id.clone(),
            method: alert.notification_method,
            subject,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{ConditionType, NewAlert};
    use time::OffsetDateTime;

    fn alert(method: NotificationMethod) -> AlertConfig {
        AlertConfig::create(
            NewAlert::new("BTC breakout", "BTC/USD", ConditionType::PriceTarget, "70000")
                .with_notification_method(method),
            None,
            OffsetDateTime::UNIX_EPOCH,
        )
        .expect("valid alert")
    }

    #[test]
    fn email_notification_uses_branded_subject() {
        let notification = AlertNotification::for_alert(&alert(NotificationMethod::Email));
        assert_eq!(notification.subject, "FinSight AI Alert Triggered: BTC breakout");
        assert_eq!(
            notification.body,
            "Your alert for BTC/USD has met its condition: price target at 70000."
        );
    }

    #[test]
    fn in_app_notification_is_marked_simulated() {
        let notification = AlertNotification::for_alert(&alert(NotificationMethod::InApp));
        assert_eq!(notification.subject, "Alert Triggered: BTC breakout");
        assert!(notification.body.ends_with("(This is a simulated trigger)"));
    }
}
