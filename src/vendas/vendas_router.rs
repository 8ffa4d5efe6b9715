// src/vendas/vendas_router.rs

use actix_web::{delete, get, patch, post, web, HttpResponse};

// Importa o AppState do módulo raiz (lib.rs)
use crate::AppState;
use crate::erro::ApiError;
use crate::shared::shared_structs::GenericResponse;

use super::vendas_service;
use super::vendas_structs::{AtualizacaoVendaRequest, LimpezaResponse, NovaVendaRequest};

/// Rota para buscar todas as vendas, na ordem de cadastro.
#[get("/vendas")]
pub async fn buscar_vendas(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let vendas = data.repositorio.listar_vendas().await?;
    Ok(HttpResponse::Ok().json(vendas))
}

/// Rota para registrar uma nova venda.
///
/// Aplica os padrões (status "pendente", data atual) e devolve a venda criada
/// com o ID gerado.
#[post("/vendas")]
pub async fn registrar_venda(
    data: web::Data<AppState>,
    item: web::Json<NovaVendaRequest>,
) -> Result<HttpResponse, ApiError> {
    let nova = vendas_service::preparar_nova_venda(item.into_inner())?;
    let venda = data.repositorio.cadastrar_venda(nova).await?;

    tracing::info!(venda_id = venda.id, cliente = %venda.cliente, "venda registrada");
    Ok(HttpResponse::Created().json(venda))
}

/// Rota para atualizar uma venda (abatimento ou pagamento total).
///
/// Só `valor` e `status` são alterados; `valorPago` é somado ao caixa.
#[patch("/vendas/{id}")]
pub async fn atualizar_venda(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<AtualizacaoVendaRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let venda = vendas_service::registrar_abatimento(data.repositorio.as_ref(), id, item.into_inner()).await?;
    Ok(HttpResponse::Ok().json(venda))
}

/// Rota para limpar o histórico: remove as vendas já pagas.
/// Não altera o total do caixa.
#[delete("/vendas/limpar-pagos")]
pub async fn limpar_pagos(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let removidas = data.repositorio.limpar_pagos().await?;

    tracing::info!(removidas, "histórico de vendas pagas limpo");
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso_com(
        "Vendas pagas removidas do histórico!",
        LimpezaResponse { removidas },
    )))
}
