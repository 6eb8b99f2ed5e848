use portfolio_models::notification::NotificationId;
use portfolio_shared_contracts::id::IdService;
use portfolio_utils::trace_instrument;
use uuid::Uuid;

/// Random v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    #[trace_instrument(skip(self))]
    fn notification_id(&self) -> NotificationId {
        Uuid::new_v4().into()
    }
}
