use serde::{Deserialize, Serialize};

use crate::models::car::{CarCode, VehicleAttributes};

// Request para un lote de códigos de coche
#[derive(Debug, Deserialize)]
pub struct CarCodeBatchRequest {
    pub vehicles: Vec<VehicleAttributes>,
}

// Response de un código de coche
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarCodeResponse {
    pub car_code: String,
    pub short_tag: String,
    pub hash_fragment: String,
}

impl From<CarCode> for CarCodeResponse {
    fn from(code: CarCode) -> Self {
        Self {
            short_tag: code.short_tag().to_string(),
            hash_fragment: code.hash_fragment().to_string(),
            car_code: code.into_string(),
        }
    }
}

// Response de un lote, en el orden de la petición
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarCodeBatchResponse {
    pub car_codes: Vec<CarCode>,
}
