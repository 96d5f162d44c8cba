//! Generación de nombres de usuario de concesionario
//!
//! `D_` + primer token del nombre + 3 primeros caracteres de la marca,
//! seguido de una secuencia de 3 dígitos por nombre base dentro del lote.

use tracing::{debug, info};

use crate::models::dealer::{DealerRecord, DealerUsername, UsernameCounter};
use crate::utils::errors::{IdGenerationError, InvalidRecordReason};

pub const USERNAME_PREFIX: &str = "D_";
pub const BRAND_PREFIX_LEN: usize = 3;

/// Mayor secuencia representable con 3 dígitos
pub const MAX_SEQUENCE: u32 = 999;

/// Genera los nombres de usuario de un lote, en el orden de entrada.
///
/// El contador se crea en cada llamada: dos llamadas con la misma entrada
/// devuelven lo mismo. Falla con el índice del primer registro inválido.
pub fn generate_dealer_usernames(
    records: &[DealerRecord],
) -> Result<Vec<DealerUsername>, IdGenerationError> {
    let mut counter = UsernameCounter::new();
    let mut usernames = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let base = base_username(index, record)?;

        let count = counter.count(&base);
        if count >= MAX_SEQUENCE {
            return Err(IdGenerationError::SequenceExhausted {
                index,
                base_username: base,
            });
        }

        let sequence = counter.increment(&base);
        debug_assert_eq!(sequence, count + 1);
        usernames.push(DealerUsername::new(base, sequence));
    }

    info!(
        "👤 {} usernames generados ({} bases distintas)",
        usernames.len(),
        counter.distinct_bases()
    );
    Ok(usernames)
}

/// Nombre base del registro `index`, sin sufijo numérico
pub fn base_username(index: usize, record: &DealerRecord) -> Result<String, IdGenerationError> {
    let name_token = record
        .name
        .split_whitespace()
        .next()
        .ok_or(IdGenerationError::InvalidRecord {
            index,
            reason: InvalidRecordReason::EmptyName,
        })?
        .to_uppercase();

    let brand_len = record.brand_id.chars().count();
    if brand_len < BRAND_PREFIX_LEN {
        return Err(IdGenerationError::InvalidRecord {
            index,
            reason: InvalidRecordReason::BrandIdTooShort { len: brand_len },
        });
    }
    let brand_prefix = record
        .brand_id
        .chars()
        .take(BRAND_PREFIX_LEN)
        .collect::<String>()
        .to_uppercase();

    let base = format!("{}{}{}", USERNAME_PREFIX, name_token, brand_prefix);
    debug!("[{}] base username: {}", index, base);
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(usernames: &[DealerUsername]) -> Vec<String> {
        usernames.iter().map(ToString::to_string).collect()
    }

    fn sample() -> Vec<DealerRecord> {
        vec![
            DealerRecord::new("Arun Tat", "TATA"),
            DealerRecord::new("Arun Tat", "TATA"),
            DealerRecord::new("Balaji Kum", "BMW"),
        ]
    }

    #[test]
    fn test_reference_batch() {
        let usernames = generate_dealer_usernames(&sample()).unwrap();
        assert_eq!(
            render(&usernames),
            vec!["D_ARUNTAT001", "D_ARUNTAT002", "D_BALAJIBMW001"]
        );
        assert_eq!(usernames[1].base_username(), "D_ARUNTAT");
        assert_eq!(usernames[1].sequence(), 2);
    }

    #[test]
    fn test_no_state_between_calls() {
        let first = generate_dealer_usernames(&sample()).unwrap();
        let second = generate_dealer_usernames(&sample()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sequences_are_independent_per_base() {
        let records = vec![
            DealerRecord::new("kavitha r", "hyundai"),
            DealerRecord::new("Arun Tat", "TATA"),
            DealerRecord::new("Kavitha S", "Hyu"),
            DealerRecord::new("arun", "tata motors"),
            DealerRecord::new("Kavitha", "HYUNDAI"),
        ];
        let usernames = generate_dealer_usernames(&records).unwrap();
        assert_eq!(
            render(&usernames),
            vec![
                "D_KAVITHAHYU001",
                "D_ARUNTAT001",
                "D_KAVITHAHYU002",
                "D_ARUNTAT002",
                "D_KAVITHAHYU003",
            ]
        );
    }

    #[test]
    fn test_name_token_uses_any_whitespace() {
        let records = vec![
            DealerRecord::new("  Ravi\tMarwah", "MARUTI"),
            DealerRecord::new("Ravi", "Mar"),
        ];
        let usernames = generate_dealer_usernames(&records).unwrap();
        assert_eq!(render(&usernames), vec!["D_RAVIMAR001", "D_RAVIMAR002"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_dealer_usernames(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_empty_name_is_rejected_with_index() {
        let mut records = sample();
        records.push(DealerRecord::new("   ", "TATA"));
        let err = generate_dealer_usernames(&records).unwrap_err();
        assert_eq!(
            err,
            IdGenerationError::InvalidRecord {
                index: 3,
                reason: InvalidRecordReason::EmptyName,
            }
        );
    }

    #[test]
    fn test_short_brand_is_rejected_with_index() {
        let records = vec![DealerRecord::new("Arun Tat", "TATA"), DealerRecord::new("Meera", "KI")];
        let err = generate_dealer_usernames(&records).unwrap_err();
        assert_eq!(
            err,
            IdGenerationError::InvalidRecord {
                index: 1,
                reason: InvalidRecordReason::BrandIdTooShort { len: 2 },
            }
        );
    }

    #[test]
    fn test_brand_prefix_counts_characters() {
        let base = base_username(0, &DealerRecord::new("Zoë", "škoda")).unwrap();
        assert_eq!(base, "D_ZOËŠKO");
    }

    #[test]
    fn test_sequence_exhaustion() {
        let mut records = vec![DealerRecord::new("Arun Tat", "TATA"); 999];
        let usernames = generate_dealer_usernames(&records).unwrap();
        assert_eq!(usernames.last().unwrap().to_string(), "D_ARUNTAT999");

        records.push(DealerRecord::new("Arun", "Tata"));
        let err = generate_dealer_usernames(&records).unwrap_err();
        assert_eq!(
            err,
            IdGenerationError::SequenceExhausted {
                index: 999,
                base_username: "D_ARUNTAT".to_string(),
            }
        );
    }
}
