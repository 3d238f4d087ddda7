/*
[INPUT]:  Shared request pipeline
[OUTPUT]: One typed client per API resource family
[POS]:    Resource layer - endpoint bindings built on the pipeline verbs
[UPDATE]: When adding resources or endpoints
*/

pub mod balance;
pub mod campaigns;
pub mod clips;
pub mod disputes;
pub mod notifications;
pub mod studios;
pub mod users;

pub use balance::BalanceClient;
pub use campaigns::CampaignsClient;
pub use clips::ClipsClient;
pub use disputes::DisputesClient;
pub use notifications::NotificationsClient;
pub use studios::StudiosClient;
pub use users::UsersClient;
