//! Generación de códigos de coche
//!
//! El código es la etiqueta corta del modelo seguida de los 6 primeros
//! caracteres hexadecimales del MD5 de la cadena base, en mayúsculas.

use tracing::debug;

use crate::models::car::{CarCode, VehicleAttributes, HASH_FRAGMENT_LEN};

pub const SHORT_TAG_LEN: usize = 3;

/// Etiqueta usada cuando el modelo falta o tiene menos de 3 caracteres
pub const FALLBACK_SHORT_TAG: &str = "XXX";

/// Genera el código de coche a partir de los siete atributos
pub fn generate_car_code(
    model: &str,
    variant: &str,
    price_inr: &str,
    fuel_type: &str,
    body_type: &str,
    colour: &str,
    dealer_username: &str,
) -> CarCode {
    car_code_for(&VehicleAttributes::new(
        model,
        variant,
        price_inr,
        fuel_type,
        body_type,
        colour,
        dealer_username,
    ))
}

/// Genera el código de coche de un conjunto de atributos
pub fn car_code_for(attributes: &VehicleAttributes) -> CarCode {
    let base = attributes.base_string();
    let code = CarCode::from_parts(&short_tag(attributes.model.as_deref()), &hash_fragment(&base));
    debug!("🔑 Código {} generado para '{}'", code, base);
    code
}

/// Genera los códigos de un lote, en el mismo orden que la entrada
pub fn generate_car_codes(vehicles: &[VehicleAttributes]) -> Vec<CarCode> {
    vehicles.iter().map(car_code_for).collect()
}

/// Primeros 3 caracteres del modelo en mayúsculas, o `XXX`
pub fn short_tag(model: Option<&str>) -> String {
    match model {
        Some(model) if model.chars().count() >= SHORT_TAG_LEN => model
            .chars()
            .take(SHORT_TAG_LEN)
            .collect::<String>()
            .to_uppercase(),
        _ => FALLBACK_SHORT_TAG.to_string(),
    }
}

/// Primeros 6 caracteres del MD5 (UTF-8) de la cadena base, en mayúsculas
pub fn hash_fragment(base: &str) -> String {
    let digest = format!("{:x}", md5::compute(base.as_bytes()));
    digest[..HASH_FRAGMENT_LEN].to_ascii_uppercase()
}
