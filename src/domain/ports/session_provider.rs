//! Session provider port - the signed-in account's subscriptions

use crate::domain::entities::SubscriptionFilter;
use crate::error::DeployResult;

/// Source of subscriptions and their credentials.
///
/// Returns [`DeployError::MissingCollaborator`](crate::error::DeployError)
/// when no account session is available at all. An account with no
/// subscriptions is an empty list, not an error.
pub trait SessionProvider {
    fn filters(&self) -> DeployResult<Vec<SubscriptionFilter>>;
}
