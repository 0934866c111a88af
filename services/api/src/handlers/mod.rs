pub mod auth;
pub mod client_intake;
pub mod feature_option;
pub mod form;
pub mod message;
pub mod property;
pub mod track_view;
pub mod user;

use emlak_auth_types::identity::Identity;
use emlak_domain::role::Role;

use crate::error::ApiError;

/// Authorization guard for admin-only operations, invoked per handler after
/// identity extraction.
pub fn require_admin(identity: &Identity) -> Result<(), ApiError> {
    if identity.role != Role::Admin {
        return Err(ApiError::Forbidden);
    }
    Ok(())
}
