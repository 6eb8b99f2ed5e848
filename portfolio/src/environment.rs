use portfolio_config::{ContactConfig, PageConfig};
use portfolio_core_contact_impl::{ContactFormFeatureConfig, ContactFormFeatureServiceImpl};
use portfolio_page::reveal::RevealTracker;
use portfolio_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};

pub type ContactForm = ContactFormFeatureServiceImpl<TimeServiceImpl, IdServiceImpl>;

pub fn contact_form(config: &ContactConfig) -> ContactForm {
    ContactFormFeatureServiceImpl::new(
        TimeServiceImpl,
        IdServiceImpl,
        ContactFormFeatureConfig {
            submission_delay: config.submission_delay.into(),
            notification_duration: config.notification_duration.into(),
            success_message: config.success_message.clone(),
        },
    )
}

pub fn reveal_tracker<K>(config: &PageConfig) -> RevealTracker<K>
where
    K: Eq + std::hash::Hash + Clone,
{
    RevealTracker::new(config.reveal_threshold, config.reveal_bottom_margin)
}
