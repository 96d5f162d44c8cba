use serde::{Deserialize, Serialize};

use crate::models::dealer::{
    DealerRecord, DealerUsername, DealerVehicle, ProvisionedInventory,
};
use crate::models::car::CarCode;

// Request para generar usernames de concesionario
#[derive(Debug, Deserialize)]
pub struct DealerUsernamesRequest {
    pub records: Vec<DealerRecord>,
}

// Response con un username por registro, en el mismo orden
#[derive(Debug, Serialize)]
pub struct DealerUsernamesResponse {
    pub usernames: Vec<DealerUsername>,
}

// Request para el alta conjunta de concesionarios y vehículos
#[derive(Debug, Deserialize)]
pub struct ProvisionRequest {
    pub dealers: Vec<DealerRecord>,
    #[serde(default)]
    pub vehicles: Vec<DealerVehicle>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedDealerResponse {
    pub name: String,
    pub brand_id: String,
    pub username: DealerUsername,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedVehicleResponse {
    pub dealer_username: DealerUsername,
    pub car_code: CarCode,
}

#[derive(Debug, Serialize)]
pub struct ProvisionResponse {
    pub dealers: Vec<ProvisionedDealerResponse>,
    pub vehicles: Vec<ProvisionedVehicleResponse>,
}

impl From<ProvisionedInventory> for ProvisionResponse {
    fn from(inventory: ProvisionedInventory) -> Self {
        Self {
            dealers: inventory
                .dealers
                .into_iter()
                .map(|d| ProvisionedDealerResponse {
                    name: d.record.name,
                    brand_id: d.record.brand_id,
                    username: d.username,
                })
                .collect(),
            vehicles: inventory
                .vehicles
                .into_iter()
                .map(|v| ProvisionedVehicleResponse {
                    dealer_username: v.dealer_username,
                    car_code: v.car_code,
                })
                .collect(),
        }
    }
}
