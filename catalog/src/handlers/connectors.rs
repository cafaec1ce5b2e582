use actix_web::{web, HttpResponse, Result};
use tracing::{error, info};

use casehub_database::models::space::DEFAULT_SPACE;

use crate::errors::ServiceError;
use crate::services::ConnectorCatalog;

/// List connectors visible in a space
pub async fn list_space_connectors(
    catalog: web::Data<ConnectorCatalog>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let space = path.into_inner();
    list(&catalog, &space).await
}

/// List connectors in the default space
pub async fn list_default_connectors(
    catalog: web::Data<ConnectorCatalog>,
) -> Result<HttpResponse> {
    list(&catalog, DEFAULT_SPACE).await
}

async fn list(catalog: &ConnectorCatalog, space: &str) -> Result<HttpResponse> {
    match catalog.list_connectors(space).await {
        Ok(connectors) => {
            info!("📇 Listed {} connector(s) for space {}", connectors.len(), space);
            Ok(HttpResponse::Ok().json(connectors))
        }
        Err(e) => {
            error!("Failed to list connectors for space {}: {}", space, e);
            Err(ServiceError::from(e).into())
        }
    }
}
