use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use crate::controllers::car_code_controller::CarCodeController;
use crate::dto::car_code_dto::{CarCodeBatchRequest, CarCodeBatchResponse, CarCodeResponse};
use crate::dto::ApiResponse;
use crate::models::car::VehicleAttributes;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppResult};

pub fn create_car_code_router() -> Router<AppState> {
    Router::new()
        .route("/", post(generate_car_code))
        .route("/batch", post(generate_car_code_batch))
}

async fn generate_car_code(
    State(state): State<AppState>,
    payload: Result<Json<VehicleAttributes>, JsonRejection>,
) -> AppResult<Json<ApiResponse<CarCodeResponse>>> {
    let Json(attributes) = payload.map_err(|e| bad_request_error(&e.body_text()))?;
    let controller = CarCodeController::new(state.config.max_batch_size);
    Ok(Json(controller.generate(attributes)))
}

async fn generate_car_code_batch(
    State(state): State<AppState>,
    payload: Result<Json<CarCodeBatchRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<CarCodeBatchResponse>>> {
    let Json(request) = payload.map_err(|e| bad_request_error(&e.body_text()))?;
    let controller = CarCodeController::new(state.config.max_batch_size);
    let response = controller.generate_batch(request)?;
    Ok(Json(response))
}
