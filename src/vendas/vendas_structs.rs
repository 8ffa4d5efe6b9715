// src/vendas/vendas_structs.rs

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::shared::numero;

/// Situação de pagamento de uma venda.
///
/// Serializa com as strings já gravadas no banco ("pendente"/"pago") e aceita
/// também "pending"/"paid" na entrada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusVenda {
    #[default]
    #[serde(rename = "pendente", alias = "pending")]
    Pendente,
    #[serde(rename = "pago", alias = "paid")]
    Pago,
}

impl StatusVenda {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusVenda::Pendente => "pendente",
            StatusVenda::Pago => "pago",
        }
    }
}

impl fmt::Display for StatusVenda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusVenda {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pendente" | "pending" => Ok(StatusVenda::Pendente),
            "pago" | "paid" => Ok(StatusVenda::Pago),
            outro => Err(format!("status de venda desconhecido: {}", outro)),
        }
    }
}

/// Estrutura que representa uma venda registrada.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Venda {
    pub id: i32,
    pub cliente: String,
    pub perfume: String,
    /// Valor no momento da venda; nunca muda depois do cadastro.
    #[serde(serialize_with = "numero::serializar")]
    pub valor_original: BigDecimal,
    /// Valor ainda em aberto; diminui a cada abatimento.
    #[serde(serialize_with = "numero::serializar")]
    pub valor: BigDecimal,
    pub status: StatusVenda,
    pub data: DateTime<Utc>,
}

/// Linha da tabela 'vendas' como vem do banco (status ainda como texto).
#[derive(FromRow)]
pub struct VendaRow {
    pub id: i32,
    pub cliente: String,
    pub perfume: String,
    pub valor_original: BigDecimal,
    pub valor: BigDecimal,
    pub status: String,
    pub data: DateTime<Utc>,
}

impl TryFrom<VendaRow> for Venda {
    type Error = String;

    fn try_from(row: VendaRow) -> Result<Self, Self::Error> {
        Ok(Venda {
            id: row.id,
            cliente: row.cliente,
            perfume: row.perfume,
            valor_original: row.valor_original,
            valor: row.valor,
            status: row.status.parse()?,
            data: row.data,
        })
    }
}

/// Corpo da requisição POST /vendas.
///
/// Se só um dos valores vier, o outro assume o mesmo valor.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NovaVendaRequest {
    pub cliente: String,
    pub perfume: String,
    pub valor_original: Option<BigDecimal>,
    pub valor: Option<BigDecimal>,
    pub status: Option<StatusVenda>,
}

/// Venda pronta para ser gravada, com os padrões aplicados.
#[derive(Debug, Clone)]
pub struct NovaVenda {
    pub cliente: String,
    pub perfume: String,
    pub valor_original: BigDecimal,
    pub valor: BigDecimal,
    pub status: StatusVenda,
}

/// Corpo da requisição PATCH /vendas/{id}.
///
/// Só estes campos são lidos; qualquer outra chave (inclusive `valorOriginal`)
/// é ignorada.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtualizacaoVendaRequest {
    pub valor: Option<BigDecimal>,
    pub status: Option<StatusVenda>,
    pub valor_pago: Option<BigDecimal>,
}

/// Campos da venda que um PATCH pode alterar. `None` = não mexer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CamposVenda {
    pub valor: Option<BigDecimal>,
    pub status: Option<StatusVenda>,
}

/// Resposta de DELETE /vendas/limpar-pagos.
#[derive(Serialize)]
pub struct LimpezaResponse {
    pub removidas: u64,
}
