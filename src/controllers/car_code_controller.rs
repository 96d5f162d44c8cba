use tracing::info;

use crate::dto::car_code_dto::{CarCodeBatchRequest, CarCodeBatchResponse, CarCodeResponse};
use crate::dto::ApiResponse;
use crate::models::car::VehicleAttributes;
use crate::services::car_code_service::{car_code_for, generate_car_codes};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::validate_batch_size;

pub struct CarCodeController {
    max_batch_size: usize,
}

impl CarCodeController {
    pub fn new(max_batch_size: usize) -> Self {
        Self { max_batch_size }
    }

    pub fn generate(&self, attributes: VehicleAttributes) -> ApiResponse<CarCodeResponse> {
        let code = car_code_for(&attributes);
        info!("🔑 Código de coche generado: {}", code);
        ApiResponse::success(CarCodeResponse::from(code))
    }

    pub fn generate_batch(
        &self,
        request: CarCodeBatchRequest,
    ) -> AppResult<ApiResponse<CarCodeBatchResponse>> {
        validate_batch_size(request.vehicles.len(), self.max_batch_size)
            .map_err(|e| validation_error("vehicles", e))?;

        let car_codes = generate_car_codes(&request.vehicles);
        info!("🔑 Lote de {} códigos de coche generado", car_codes.len());

        Ok(ApiResponse::success_with_message(
            CarCodeBatchResponse { car_codes },
            format!("{} códigos generados", request.vehicles.len()),
        ))
    }
}
