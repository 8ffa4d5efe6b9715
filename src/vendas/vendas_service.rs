// src/vendas/vendas_service.rs

use bigdecimal::BigDecimal;

use crate::erro::ApiError;
use crate::repositorio::Repositorio;

use super::vendas_structs::{AtualizacaoVendaRequest, CamposVenda, NovaVenda, NovaVendaRequest, StatusVenda, Venda};

fn nao_negativo(campo: &str, valor: &BigDecimal) -> Result<(), ApiError> {
    if *valor < BigDecimal::from(0) {
        return Err(ApiError::BadRequest(format!("O campo '{}' não pode ser negativo.", campo)));
    }
    Ok(())
}

/// Aplica os padrões do cadastro: status "pendente" e, se só um dos valores
/// vier, o outro recebe o mesmo.
pub fn preparar_nova_venda(pedido: NovaVendaRequest) -> Result<NovaVenda, ApiError> {
    let (valor_original, valor) = match (pedido.valor_original, pedido.valor) {
        (Some(original), Some(valor)) => (original, valor),
        (Some(original), None) => (original.clone(), original),
        (None, Some(valor)) => (valor.clone(), valor),
        (None, None) => {
            return Err(ApiError::BadRequest(
                "Informe 'valorOriginal' ou 'valor' para registrar a venda.".to_string(),
            ))
        }
    };
    nao_negativo("valorOriginal", &valor_original)?;
    nao_negativo("valor", &valor)?;

    Ok(NovaVenda {
        cliente: pedido.cliente,
        perfume: pedido.perfume,
        valor_original,
        valor,
        status: pedido.status.unwrap_or(StatusVenda::Pendente),
    })
}

/// Abatimento ou pagamento total de uma venda.
///
/// Passos:
/// 1. Separa os campos permitidos (`valor`, `status`); o resto do corpo já
///    foi descartado na desserialização.
/// 2. Um `valorPago` positivo vira incremento do caixa; zero não incrementa.
/// 3. Venda e caixa são gravados juntos pelo repositório.
/// 4. Id inexistente vira `VendaNaoEncontrada` e o caixa fica intacto.
pub async fn registrar_abatimento(
    repositorio: &dyn Repositorio,
    id: i32,
    pedido: AtualizacaoVendaRequest,
) -> Result<Venda, ApiError> {
    if let Some(valor) = &pedido.valor {
        nao_negativo("valor", valor)?;
    }
    if let Some(pago) = &pedido.valor_pago {
        nao_negativo("valorPago", pago)?;
    }

    let campos = CamposVenda {
        valor: pedido.valor,
        status: pedido.status,
    };
    let pagamento = pedido.valor_pago.filter(|p| *p > BigDecimal::from(0));

    match repositorio.atualizar_venda(id, &campos, pagamento.as_ref()).await? {
        Some(venda) => {
            if let Some(p) = &pagamento {
                tracing::info!(venda_id = id, valor_pago = %p, "pagamento registrado no caixa");
            }
            Ok(venda)
        }
        None => {
            tracing::warn!(venda_id = id, "tentativa de atualizar venda inexistente");
            Err(ApiError::VendaNaoEncontrada(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositorio::MemoriaRepositorio;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn pedido_ana() -> NovaVendaRequest {
        NovaVendaRequest {
            cliente: "Ana".to_string(),
            perfume: "X".to_string(),
            valor_original: Some(dec("100")),
            valor: Some(dec("100")),
            status: None,
        }
    }

    async fn repo_com_ana() -> (MemoriaRepositorio, Venda) {
        let repo = MemoriaRepositorio::new();
        let nova = preparar_nova_venda(pedido_ana()).unwrap();
        let venda = repo.cadastrar_venda(nova).await.unwrap();
        (repo, venda)
    }

    #[test]
    fn nova_venda_comeca_pendente() {
        let nova = preparar_nova_venda(pedido_ana()).unwrap();
        assert_eq!(nova.status, StatusVenda::Pendente);
        assert_eq!(nova.valor, nova.valor_original);
    }

    #[test]
    fn nova_venda_copia_valor_ausente() {
        let mut pedido = pedido_ana();
        pedido.valor = None;
        let nova = preparar_nova_venda(pedido).unwrap();
        assert_eq!(nova.valor, dec("100"));

        let mut pedido = pedido_ana();
        pedido.valor_original = None;
        pedido.valor = Some(dec("35.5"));
        let nova = preparar_nova_venda(pedido).unwrap();
        assert_eq!(nova.valor_original, dec("35.5"));
    }

    #[test]
    fn nova_venda_sem_valores_e_rejeitada() {
        let mut pedido = pedido_ana();
        pedido.valor = None;
        pedido.valor_original = None;
        assert!(matches!(preparar_nova_venda(pedido), Err(ApiError::BadRequest(_))));
    }

    #[actix_web::test]
    async fn abatimento_atualiza_valor_e_soma_no_caixa() {
        let (repo, venda) = repo_com_ana().await;
        let pedido = AtualizacaoVendaRequest {
            valor: Some(dec("50")),
            status: None,
            valor_pago: Some(dec("50")),
        };

        let atualizada = registrar_abatimento(&repo, venda.id, pedido).await.unwrap();

        assert_eq!(atualizada.valor, dec("50"));
        assert_eq!(atualizada.valor_original, dec("100"));
        assert_eq!(atualizada.status, StatusVenda::Pendente);
        assert_eq!(repo.obter_caixa().await.unwrap().total, dec("50"));
    }

    #[actix_web::test]
    async fn so_status_nao_mexe_no_valor() {
        let (repo, venda) = repo_com_ana().await;
        let pedido = AtualizacaoVendaRequest {
            status: Some(StatusVenda::Pago),
            ..Default::default()
        };

        let atualizada = registrar_abatimento(&repo, venda.id, pedido).await.unwrap();

        assert_eq!(atualizada.status, StatusVenda::Pago);
        assert_eq!(atualizada.valor, dec("100"));
        assert_eq!(repo.obter_caixa().await.unwrap().total, dec("0"));
    }

    #[actix_web::test]
    async fn so_valor_nao_mexe_no_status() {
        let (repo, venda) = repo_com_ana().await;
        let pedido = AtualizacaoVendaRequest {
            valor: Some(dec("20")),
            ..Default::default()
        };

        let atualizada = registrar_abatimento(&repo, venda.id, pedido).await.unwrap();

        assert_eq!(atualizada.valor, dec("20"));
        assert_eq!(atualizada.status, StatusVenda::Pendente);
    }

    #[actix_web::test]
    async fn pagamentos_acumulam_no_caixa() {
        let (repo, venda) = repo_com_ana().await;
        for pago in ["10", "20.50", "0.25"] {
            let pedido = AtualizacaoVendaRequest {
                valor_pago: Some(dec(pago)),
                ..Default::default()
            };
            registrar_abatimento(&repo, venda.id, pedido).await.unwrap();
        }

        assert_eq!(repo.obter_caixa().await.unwrap().total, dec("30.75"));
    }

    #[actix_web::test]
    async fn pagamento_zero_nao_incrementa() {
        let (repo, venda) = repo_com_ana().await;
        repo.zerar_caixa().await.unwrap();
        let pedido = AtualizacaoVendaRequest {
            valor_pago: Some(dec("0")),
            ..Default::default()
        };

        registrar_abatimento(&repo, venda.id, pedido).await.unwrap();

        assert_eq!(repo.obter_caixa().await.unwrap().total, dec("0"));
    }

    #[actix_web::test]
    async fn pagamento_negativo_e_rejeitado() {
        let (repo, venda) = repo_com_ana().await;
        let pedido = AtualizacaoVendaRequest {
            valor_pago: Some(dec("-5")),
            ..Default::default()
        };

        let erro = registrar_abatimento(&repo, venda.id, pedido).await.unwrap_err();

        assert!(matches!(erro, ApiError::BadRequest(_)));
        assert_eq!(repo.obter_caixa().await.unwrap().total, dec("0"));
    }

    #[actix_web::test]
    async fn venda_inexistente_vira_nao_encontrada() {
        let repo = MemoriaRepositorio::new();
        let pedido = AtualizacaoVendaRequest {
            valor_pago: Some(dec("10")),
            ..Default::default()
        };

        let erro = registrar_abatimento(&repo, 404, pedido).await.unwrap_err();

        assert!(matches!(erro, ApiError::VendaNaoEncontrada(404)));
        assert_eq!(repo.obter_caixa().await.unwrap().total, dec("0"));
    }
}
