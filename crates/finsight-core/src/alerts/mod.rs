//! Client-side price and signal alerts.
//!
//! Alerts are plain records kept in an [`AlertBook`] and persisted through a
//! [`JsonStore`](crate::store::JsonStore). Triggering renders an
//! [`AlertNotification`]; delivery itself is left to the caller.

mod book;
mod model;
mod notification;

pub use book::{create_alert, AlertBook};
pub use model::{AlertConfig, ConditionType, NewAlert, NotificationMethod};
pub use notification::AlertNotification;
