// src/caixa/caixa_structs.rs

use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::shared::numero;

/// Total acumulado dos pagamentos recebidos desde o último "zerar".
/// Existe no máximo um caixa (linha com id = 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Caixa {
    #[serde(serialize_with = "numero::serializar")]
    pub total: BigDecimal,
}

impl Default for Caixa {
    fn default() -> Self {
        Caixa { total: BigDecimal::from(0) }
    }
}
