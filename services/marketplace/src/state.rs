use sea_orm::DatabaseConnection;

use coleta_auth_types::identity::TokenSecret;

use crate::infra::db::{
    DbCollectionRequestRepository, DbCollectorRepository, DbCooperativeRepository,
    DbProducerRepository,
};
use crate::infra::geocoder::HttpGeocoder;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub geocoder: HttpGeocoder,
}

impl AppState {
    pub fn producer_repo(&self) -> DbProducerRepository {
        DbProducerRepository {
            db: self.db.clone(),
        }
    }

    pub fn collector_repo(&self) -> DbCollectorRepository {
        DbCollectorRepository {
            db: self.db.clone(),
        }
    }

    pub fn cooperative_repo(&self) -> DbCooperativeRepository {
        DbCooperativeRepository {
            db: self.db.clone(),
        }
    }

    pub fn request_repo(&self) -> DbCollectionRequestRepository {
        DbCollectionRequestRepository {
            db: self.db.clone(),
        }
    }
}

impl TokenSecret for AppState {
    fn token_secret(&self) -> &str {
        &self.jwt_secret
    }
}
