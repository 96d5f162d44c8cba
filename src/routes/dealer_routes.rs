use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use crate::controllers::dealer_controller::DealerController;
use crate::dto::dealer_dto::{
    DealerUsernamesRequest, DealerUsernamesResponse, ProvisionRequest, ProvisionResponse,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppResult};

pub fn create_dealer_router() -> Router<AppState> {
    Router::new()
        .route("/usernames", post(generate_usernames))
        .route("/provision", post(provision))
}

async fn generate_usernames(
    State(state): State<AppState>,
    payload: Result<Json<DealerUsernamesRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<DealerUsernamesResponse>>> {
    let Json(request) = payload.map_err(|e| bad_request_error(&e.body_text()))?;
    let controller = DealerController::new(state.config.max_batch_size);
    let response = controller.generate_usernames(request)?;
    Ok(Json(response))
}

async fn provision(
    State(state): State<AppState>,
    payload: Result<Json<ProvisionRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<ProvisionResponse>>> {
    let Json(request) = payload.map_err(|e| bad_request_error(&e.body_text()))?;
    let controller = DealerController::new(state.config.max_batch_size);
    let response = controller.provision(request)?;
    Ok(Json(response))
}
