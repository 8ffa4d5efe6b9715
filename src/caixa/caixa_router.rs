// src/caixa/caixa_router.rs

use actix_web::{get, post, web, HttpResponse};

use crate::AppState;
use crate::erro::ApiError;
use crate::shared::shared_structs::GenericResponse;

/// Rota para consultar o caixa. Cria o caixa com total 0 se ainda não existir.
#[get("/caixa")]
pub async fn ver_caixa(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let caixa = data.repositorio.obter_caixa().await?;
    Ok(HttpResponse::Ok().json(caixa))
}

/// Rota para zerar o caixa.
#[post("/caixa/zerar")]
pub async fn zerar_caixa(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let caixa = data.repositorio.zerar_caixa().await?;

    tracing::info!("caixa zerado");
    Ok(HttpResponse::Ok().json(GenericResponse::sucesso_com("Caixa zerado no banco!", caixa)))
}
