// src/erro.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::shared::shared_structs::GenericResponse;

/// Falhas do armazenamento (banco ou memória).
#[derive(Debug, Error)]
pub enum RepositorioError {
    #[error("erro no banco de dados: {0}")]
    Banco(#[from] sqlx::Error),

    #[error("erro ao aplicar migrações: {0}")]
    Migracao(#[from] sqlx::migrate::MigrateError),

    /// Linha gravada que não corresponde ao modelo (ex.: status desconhecido).
    #[error("dados inválidos no armazenamento: {0}")]
    DadosInvalidos(String),

    #[error("armazenamento indisponível")]
    Indisponivel,
}

/// Erros devolvidos pelas rotas, convertidos em resposta JSON.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Venda com ID {0} não encontrada.")]
    VendaNaoEncontrada(i32),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Repositorio(#[from] RepositorioError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::VendaNaoEncontrada(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Repositorio(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Repositorio(e) => {
                // O detalhe fica no log; o cliente recebe só a mensagem genérica
                tracing::error!(error = %e, "falha no armazenamento");
                "Erro interno no servidor".to_string()
            }
            outro => outro.to_string(),
        };
        HttpResponse::build(self.status_code()).json(GenericResponse::erro(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_http_por_variante() {
        assert_eq!(ApiError::VendaNaoEncontrada(3).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::BadRequest("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::from(RepositorioError::Indisponivel).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn mensagem_de_nao_encontrada() {
        assert_eq!(ApiError::VendaNaoEncontrada(42).to_string(), "Venda com ID 42 não encontrada.");
    }
}
