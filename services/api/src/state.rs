use sea_orm::DatabaseConnection;

use emlak_auth_types::identity::JwtSecret;

use crate::infra::db::{
    DbClientIntakeRepository, DbFeatureOptionRepository, DbMessageRepository, DbPropertyRepository,
    DbTrackViewRepository, DbUserRepository,
};
use crate::infra::mail::SmtpMailer;
use crate::infra::storage::S3ImageStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: S3ImageStore,
    pub mailer: SmtpMailer,
    pub jwt_secret: String,
    pub cookie_domain: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn property_repo(&self) -> DbPropertyRepository {
        DbPropertyRepository {
            db: self.db.clone(),
        }
    }

    pub fn feature_option_repo(&self) -> DbFeatureOptionRepository {
        DbFeatureOptionRepository {
            db: self.db.clone(),
        }
    }

    pub fn message_repo(&self) -> DbMessageRepository {
        DbMessageRepository {
            db: self.db.clone(),
        }
    }

    pub fn client_intake_repo(&self) -> DbClientIntakeRepository {
        DbClientIntakeRepository {
            db: self.db.clone(),
        }
    }

    pub fn track_view_repo(&self) -> DbTrackViewRepository {
        DbTrackViewRepository {
            db: self.db.clone(),
        }
    }
}

impl JwtSecret for AppState {
    fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}
