// src/shared/numero.rs

//! Valores monetários são `BigDecimal` no banco (NUMERIC) mas o front-end
//! espera números JSON, não strings. Use com `#[serde(serialize_with = ...)]`.

use bigdecimal::{BigDecimal, ToPrimitive};
use serde::Serializer;

pub fn serializar<S>(valor: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match valor.to_f64() {
        Some(n) if n.is_finite() => serializer.serialize_f64(n),
        // Fora da faixa de f64: mantém a representação exata como string
        _ => serializer.collect_str(valor),
    }
}
