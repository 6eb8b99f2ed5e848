use portfolio_models::notification::NotificationId;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait IdService: Send + Sync + 'static {
    /// Returns a fresh id for a notification that is about to be shown.
    fn notification_id(&self) -> NotificationId;
}

#[cfg(feature = "mock")]
impl MockIdService {
    pub fn with_notification_id(mut self, id: NotificationId) -> Self {
        self.expect_notification_id().once().return_const(id);
        self
    }
}
