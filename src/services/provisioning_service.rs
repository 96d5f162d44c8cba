//! Alta conjunta de concesionarios y vehículos
//!
//! Primero se generan los usernames del lote de concesionarios; después cada
//! vehículo recibe su código usando el username de su concesionario.

use tracing::info;

use crate::models::dealer::{
    DealerRecord, DealerVehicle, ProvisionedDealer, ProvisionedInventory, ProvisionedVehicle,
};
use crate::services::car_code_service::car_code_for;
use crate::services::dealer_username_service::generate_dealer_usernames;
use crate::utils::errors::IdGenerationError;

/// Genera usernames para `dealers` y códigos para `vehicles`.
/// Un `dealer_index` fuera de rango se reporta con el índice del vehículo.
pub fn provision_dealer_inventory(
    dealers: &[DealerRecord],
    vehicles: &[DealerVehicle],
) -> Result<ProvisionedInventory, IdGenerationError> {
    let usernames = generate_dealer_usernames(dealers)?;

    let vehicles = vehicles
        .iter()
        .enumerate()
        .map(|(index, vehicle)| -> Result<ProvisionedVehicle, IdGenerationError> {
            let username = usernames.get(vehicle.dealer_index).ok_or(
                IdGenerationError::UnknownDealer {
                    vehicle_index: index,
                    dealer_index: vehicle.dealer_index,
                    dealer_count: usernames.len(),
                },
            )?;
            Ok(ProvisionedVehicle {
                dealer_username: username.clone(),
                car_code: car_code_for(&vehicle.with_dealer_username(username)),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let dealers = dealers
        .iter()
        .cloned()
        .zip(usernames)
        .map(|(record, username)| ProvisionedDealer { record, username })
        .collect::<Vec<_>>();

    info!(
        "🚗 Alta completada: {} concesionarios, {} vehículos",
        dealers.len(),
        vehicles.len()
    );
    Ok(ProvisionedInventory { dealers, vehicles })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::InvalidRecordReason;

    fn vehicle(dealer_index: usize, model: &str) -> DealerVehicle {
        DealerVehicle {
            dealer_index,
            model: Some(model.to_string()),
            variant: "1.0 Turbo Gdi Mt Sx Dual Tone".to_string(),
            price_inr: "974000".to_string(),
            fuel_type: "Petrol".to_string(),
            body_type: "SUV".to_string(),
            colour: "Yellow".to_string(),
        }
    }

    #[test]
    fn test_vehicle_codes_use_generated_usernames() {
        let dealers = vec![
            DealerRecord::new("Kavitha R", "Hyundai"),
            DealerRecord::new("Kavitha S", "HYU"),
        ];
        let inventory =
            provision_dealer_inventory(&dealers, &[vehicle(0, "Venue"), vehicle(1, "Venue")]).unwrap();

        assert_eq!(inventory.dealers.len(), 2);
        assert_eq!(inventory.dealers[0].record, dealers[0]);
        assert_eq!(inventory.dealers[0].username.to_string(), "D_KAVITHAHYU001");
        assert_eq!(inventory.dealers[1].username.to_string(), "D_KAVITHAHYU002");

        assert_eq!(inventory.vehicles[0].dealer_username.to_string(), "D_KAVITHAHYU001");
        assert_eq!(inventory.vehicles[0].car_code.as_str(), "VEND0C813");
        assert_eq!(inventory.vehicles[1].car_code.as_str(), "VEN494B7E");
    }

    #[test]
    fn test_unknown_dealer_index() {
        let dealers = vec![DealerRecord::new("Arun Tat", "TATA")];
        let err = provision_dealer_inventory(&dealers, &[vehicle(0, "Nexon"), vehicle(3, "Punch")])
            .unwrap_err();
        assert_eq!(
            err,
            IdGenerationError::UnknownDealer {
                vehicle_index: 1,
                dealer_index: 3,
                dealer_count: 1,
            }
        );
    }

    #[test]
    fn test_invalid_dealer_fails_before_vehicles() {
        let dealers = vec![DealerRecord::new("", "TATA")];
        let err = provision_dealer_inventory(&dealers, &[]).unwrap_err();
        assert_eq!(
            err,
            IdGenerationError::InvalidRecord {
                index: 0,
                reason: InvalidRecordReason::EmptyName,
            }
        );
    }

    #[test]
    fn test_bad_dealer_and_unknown_dealer_are_distinguishable() {
        let bad_dealer = provision_dealer_inventory(&[DealerRecord::new("", "TATA")], &[]).unwrap_err();
        let unknown_dealer =
            provision_dealer_inventory(&[DealerRecord::new("Arun Tat", "TATA")], &[vehicle(5, "Nexon")])
                .unwrap_err();

        assert_eq!(bad_dealer.index(), unknown_dealer.index());
        assert_eq!(bad_dealer.code(), "INVALID_RECORD");
        assert_eq!(unknown_dealer.code(), "UNKNOWN_DEALER");
        assert_eq!(bad_dealer.details()["record"], "dealer");
        assert_eq!(unknown_dealer.details()["record"], "vehicle");
    }
}
