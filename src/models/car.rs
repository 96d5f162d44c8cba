//! Modelo de código de coche
//!
//! `VehicleAttributes` agrupa los siete atributos que forman la cadena base
//! y `CarCode` es el código derivado de ellos.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separador literal entre atributos de la cadena base
pub const BASE_SEPARATOR: &str = "_";

/// Longitud del fragmento hexadecimal al final del código
pub const HASH_FRAGMENT_LEN: usize = 6;

/// Atributos de un vehículo, en el orden fijo de la cadena base
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleAttributes {
    #[serde(default)]
    pub model: Option<String>,
    pub variant: String,
    pub price_inr: String,
    pub fuel_type: String,
    pub body_type: String,
    pub colour: String,
    pub dealer_username: String,
}

impl VehicleAttributes {
    pub fn new(
        model: &str,
        variant: &str,
        price_inr: &str,
        fuel_type: &str,
        body_type: &str,
        colour: &str,
        dealer_username: &str,
    ) -> Self {
        Self {
            model: Some(model.to_string()),
            variant: variant.to_string(),
            price_inr: price_inr.to_string(),
            fuel_type: fuel_type.to_string(),
            body_type: body_type.to_string(),
            colour: colour.to_string(),
            dealer_username: dealer_username.to_string(),
        }
    }

    /// Modelo como `&str`; un modelo ausente aporta la cadena vacía
    pub fn model_str(&self) -> &str {
        self.model.as_deref().unwrap_or("")
    }

    /// Cadena base: los siete atributos unidos por `_`
    pub fn base_string(&self) -> String {
        [
            self.model_str(),
            self.variant.as_str(),
            self.price_inr.as_str(),
            self.fuel_type.as_str(),
            self.body_type.as_str(),
            self.colour.as_str(),
            self.dealer_username.as_str(),
        ]
        .join(BASE_SEPARATOR)
    }
}

/// Código de coche: etiqueta corta de 3 caracteres + fragmento hexadecimal de 6
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CarCode(String);

impl CarCode {
    pub(crate) fn from_parts(short_tag: &str, hash_fragment: &str) -> Self {
        let mut code = String::with_capacity(short_tag.len() + hash_fragment.len());
        code.push_str(short_tag);
        code.push_str(hash_fragment);
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Etiqueta corta derivada del modelo (todo menos los 6 últimos caracteres)
    pub fn short_tag(&self) -> &str {
        &self.0[..self.0.len() - HASH_FRAGMENT_LEN]
    }

    /// Fragmento hexadecimal en mayúsculas
    pub fn hash_fragment(&self) -> &str {
        &self.0[self.0.len() - HASH_FRAGMENT_LEN..]
    }
}

impl fmt::Display for CarCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CarCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_string_order() {
        let attrs = VehicleAttributes::new("Venue", "Sx", "974000", "Petrol", "SUV", "Yellow", "D_A001");
        assert_eq!(attrs.base_string(), "Venue_Sx_974000_Petrol_SUV_Yellow_D_A001");
    }

    #[test]
    fn test_base_string_missing_model() {
        let attrs = VehicleAttributes {
            model: None,
            ..VehicleAttributes::new("", "a", "b", "c", "d", "e", "f")
        };
        assert_eq!(attrs.base_string(), "_a_b_c_d_e_f");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let attrs: VehicleAttributes = serde_json::from_value(serde_json::json!({
            "variant": "LX",
            "priceInr": "500000",
            "fuelType": "CNG",
            "bodyType": "Hatchback",
            "colour": "White",
            "dealerUsername": "D_RAVIMAR001"
        }))
        .unwrap();
        assert_eq!(attrs.model, None);
        assert_eq!(attrs.price_inr, "500000");
        assert_eq!(attrs.dealer_username, "D_RAVIMAR001");
    }

    #[test]
    fn test_car_code_parts() {
        let code = CarCode::from_parts("VEN", "D0C813");
        assert_eq!(code.as_str(), "VEND0C813");
        assert_eq!(code.short_tag(), "VEN");
        assert_eq!(code.hash_fragment(), "D0C813");
        assert_eq!(code.to_string(), "VEND0C813");
    }
}
