use std::{sync::LazyLock, time::Duration};

use chrono::{DateTime, TimeZone, Utc};
use portfolio_models::{
    contact::ContactFormInput,
    notification::{Notification, NotificationId},
};

use crate::{UUID1, UUID2};

pub const SUBMISSION_DELAY: Duration = Duration::from_secs(2);
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(5);
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

pub static NOW: LazyLock<DateTime<Utc>> =
    LazyLock::new(|| Utc.with_ymd_and_hms(2024, 3, 14, 15, 9, 26).unwrap());

pub static VALID: LazyLock<ContactFormInput> = LazyLock::new(|| ContactFormInput {
    name: "Jo".into(),
    email: "jo@example.com".into(),
    message: "Hello there, how are you?".into(),
});

pub static INVALID: LazyLock<ContactFormInput> = LazyLock::new(|| ContactFormInput {
    name: "J".into(),
    email: "bad".into(),
    message: "short".into(),
});

pub static NOTIFICATION_1: LazyLock<Notification> = LazyLock::new(|| Notification {
    id: NotificationId::from(UUID1),
    message: SUCCESS_MESSAGE.into(),
    created_at: *NOW,
});

pub static NOTIFICATION_2: LazyLock<Notification> = LazyLock::new(|| Notification {
    id: NotificationId::from(UUID2),
    message: SUCCESS_MESSAGE.into(),
    created_at: *NOW,
});
