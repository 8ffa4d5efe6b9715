// src/lib.rs

use std::sync::Arc;

use actix_web::{error::InternalError, web, HttpResponse};

// Módulo de configuração (variáveis de ambiente)
pub mod config;
// Módulo de erros da API e do armazenamento
pub mod erro;
// Módulo de acesso ao banco (PostgreSQL ou memória)
pub mod repositorio;
// Módulo shared
pub mod shared;
// Módulo de vendas
pub mod vendas;
// Módulo do caixa
pub mod caixa;

use repositorio::Repositorio;
use shared::shared_structs::GenericResponse;

// Estado compartilhado entre as rotas: o repositório de vendas e caixa.
pub struct AppState {
    pub repositorio: Arc<dyn Repositorio>,
}

impl AppState {
    pub fn new(repositorio: Arc<dyn Repositorio>) -> Self {
        Self { repositorio }
    }
}

/// Registra as rotas e os extratores configurados.
///
/// Corpo JSON malformado responde 400; ID que não é número responde 404.
pub fn configurar(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let resposta = HttpResponse::BadRequest().json(GenericResponse::erro(format!("Corpo inválido: {}", err)));
        InternalError::from_response(err, resposta).into()
    });
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        let resposta = HttpResponse::NotFound().json(GenericResponse::erro("Venda não encontrada"));
        InternalError::from_response(err, resposta).into()
    });

    cfg.app_data(json_config)
        .app_data(path_config)
        // Módulo de Vendas
        .service(vendas::vendas_router::buscar_vendas)
        .service(vendas::vendas_router::registrar_venda)
        .service(vendas::vendas_router::limpar_pagos)
        .service(vendas::vendas_router::atualizar_venda)
        // Módulo do Caixa
        .service(caixa::caixa_router::ver_caixa)
        .service(caixa::caixa_router::zerar_caixa);
}
