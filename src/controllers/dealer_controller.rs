use tracing::info;

use crate::dto::dealer_dto::{
    DealerUsernamesRequest, DealerUsernamesResponse, ProvisionRequest, ProvisionResponse,
};
use crate::dto::ApiResponse;
use crate::services::dealer_username_service::generate_dealer_usernames;
use crate::services::provisioning_service::provision_dealer_inventory;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::validate_batch_size;

pub struct DealerController {
    max_batch_size: usize,
}

impl DealerController {
    pub fn new(max_batch_size: usize) -> Self {
        Self { max_batch_size }
    }

    pub fn generate_usernames(
        &self,
        request: DealerUsernamesRequest,
    ) -> AppResult<ApiResponse<DealerUsernamesResponse>> {
        validate_batch_size(request.records.len(), self.max_batch_size)
            .map_err(|e| validation_error("records", e))?;

        let usernames = generate_dealer_usernames(&request.records)?;

        Ok(ApiResponse::success_with_message(
            DealerUsernamesResponse { usernames },
            format!("{} usernames generados", request.records.len()),
        ))
    }

    pub fn provision(
        &self,
        request: ProvisionRequest,
    ) -> AppResult<ApiResponse<ProvisionResponse>> {
        validate_batch_size(request.dealers.len(), self.max_batch_size)
            .map_err(|e| validation_error("dealers", e))?;
        validate_batch_size(request.vehicles.len(), self.max_batch_size)
            .map_err(|e| validation_error("vehicles", e))?;

        info!(
            "🏪 Alta solicitada: {} concesionarios, {} vehículos",
            request.dealers.len(),
            request.vehicles.len()
        );
        let inventory = provision_dealer_inventory(&request.dealers, &request.vehicles)?;

        Ok(ApiResponse::success_with_message(
            ProvisionResponse::from(inventory),
            "Alta completada exitosamente".to_string(),
        ))
    }
}
