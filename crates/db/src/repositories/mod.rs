//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or a `PgExecutor` where the dispatch executor
//! needs transaction scoping) as the first argument.

pub mod campaign_recipient_repo;
pub mod campaign_repo;
pub mod newsletter_repo;
pub mod newsletter_subscription_repo;
pub mod notification_log_repo;
pub mod notification_preference_repo;
pub mod order_repo;
pub mod product_repo;
pub mod user_repo;

pub use campaign_recipient_repo::CampaignRecipientRepo;
pub use campaign_repo::CampaignRepo;
pub use newsletter_repo::NewsletterRepo;
pub use newsletter_subscription_repo::NewsletterSubscriptionRepo;
pub use notification_log_repo::NotificationLogRepo;
pub use notification_preference_repo::NotificationPreferenceRepo;
pub use order_repo::OrderRepo;
pub use product_repo::ProductRepo;
pub use user_repo::UserRepo;
