use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::macros::id;

id!(NotificationId);

/// Transient feedback shown after a contact form submission completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
