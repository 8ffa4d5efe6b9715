// src/shared/shared_structs.rs

use serde::Serialize;

/// Estrutura genérica para padronizar as respostas da API.
/// 'T' é o tipo do corpo da resposta, que pode ser opcional.
#[derive(Serialize)]
pub struct GenericResponse<T> {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")] // Não serializa 'body' se for None
    pub body: Option<T>,
}

impl GenericResponse<()> {
    /// Resposta de erro sem corpo.
    pub fn erro(message: impl Into<String>) -> Self {
        GenericResponse {
            status: "error".to_string(),
            message: message.into(),
            body: None,
        }
    }
}

impl<T> GenericResponse<T> {
    /// Resposta de confirmação com corpo.
    pub fn sucesso_com(message: impl Into<String>, body: T) -> Self {
        GenericResponse {
            status: "success".to_string(),
            message: message.into(),
            body: Some(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erro_nao_serializa_body() {
        let json = serde_json::to_value(GenericResponse::erro("falhou")).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "error", "message": "falhou" }));
    }

    #[test]
    fn sucesso_com_body() {
        let json = serde_json::to_value(GenericResponse::sucesso_com("ok", 3)).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["body"], 3);
    }
}
