use portfolio_demo::contact::{NOTIFICATION_DURATION, SUBMISSION_DELAY, SUCCESS_MESSAGE};
use portfolio_models::notification::Notification;
use portfolio_shared_contracts::{id::MockIdService, time::MockTimeService};

use crate::{ContactFormFeatureConfig, ContactFormFeatureServiceImpl};


type Sut = ContactFormFeatureServiceImpl<MockTimeService, MockIdService>;

fn config() -> ContactFormFeatureConfig {
    ContactFormFeatureConfig {
        submission_delay: SUBMISSION_DELAY,
        notification_duration: NOTIFICATION_DURATION,
        success_message: SUCCESS_MESSAGE.into(),
    }
}

/// A service that expects exactly one successful submission per given
/// notification.
fn sut(notifications: &[&Notification]) -> Sut {
    let mut time = MockTimeService::new();
    let mut id = MockIdService::new();
    for notification in notifications {
        time = time.with_now(notification.created_at);
        id = id.with_notification_id(notification.id);
    }
    Sut::new(time, id, config())
}
