// src/repositorio/memoria.rs

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;

use super::{Repositorio, Result};
use crate::caixa::caixa_structs::Caixa;
use crate::erro::RepositorioError;
use crate::vendas::vendas_structs::{CamposVenda, NovaVenda, StatusVenda, Venda};

#[derive(Default)]
struct Estado {
    vendas: Vec<Venda>,
    ultimo_id: i32,
    // None até a primeira leitura/escrita, como a linha ausente no banco
    caixa: Option<Caixa>,
}

/// Repositório em memória. Um único lock protege vendas e caixa, então o
/// abatimento e o incremento do caixa acontecem juntos.
#[derive(Default)]
pub struct MemoriaRepositorio {
    estado: Mutex<Estado>,
}

impl MemoriaRepositorio {
    pub fn new() -> Self {
        Self::default()
    }

    fn estado(&self) -> Result<MutexGuard<'_, Estado>> {
        self.estado.lock().map_err(|_| RepositorioError::Indisponivel)
    }
}

#[async_trait]
impl Repositorio for MemoriaRepositorio {
    async fn listar_vendas(&self) -> Result<Vec<Venda>> {
        Ok(self.estado()?.vendas.clone())
    }

    async fn cadastrar_venda(&self, venda: NovaVenda) -> Result<Venda> {
        let mut estado = self.estado()?;
        estado.ultimo_id += 1;
        let venda = Venda {
            id: estado.ultimo_id,
            cliente: venda.cliente,
            perfume: venda.perfume,
            valor_original: venda.valor_original,
            valor: venda.valor,
            status: venda.status,
            data: Utc::now(),
        };
        estado.vendas.push(venda.clone());
        Ok(venda)
    }

    async fn atualizar_venda(
        &self,
        id: i32,
        campos: &CamposVenda,
        pagamento: Option<&BigDecimal>,
    ) -> Result<Option<Venda>> {
        let mut estado = self.estado()?;

        let venda = match estado.vendas.iter_mut().find(|v| v.id == id) {
            Some(v) => v,
            None => return Ok(None),
        };
        if let Some(valor) = &campos.valor {
            venda.valor = valor.clone();
        }
        if let Some(status) = campos.status {
            venda.status = status;
        }
        let atualizada = venda.clone();

        if let Some(pagamento) = pagamento {
            let caixa = estado.caixa.get_or_insert_with(Caixa::default);
            caixa.total += pagamento.clone();
        }

        Ok(Some(atualizada))
    }

    async fn limpar_pagos(&self) -> Result<u64> {
        let mut estado = self.estado()?;
        let antes = estado.vendas.len();
        estado.vendas.retain(|v| v.status != StatusVenda::Pago);
        Ok((antes - estado.vendas.len()) as u64)
    }

    async fn obter_caixa(&self) -> Result<Caixa> {
        let mut estado = self.estado()?;
        Ok(estado.caixa.get_or_insert_with(Caixa::default).clone())
    }

    async fn zerar_caixa(&self) -> Result<Caixa> {
        let mut estado = self.estado()?;
        let caixa = Caixa::default();
        estado.caixa = Some(caixa.clone());
        Ok(caixa)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nova(cliente: &str, status: StatusVenda) -> NovaVenda {
        NovaVenda {
            cliente: cliente.to_string(),
            perfume: "Lavanda".to_string(),
            valor_original: BigDecimal::from(80),
            valor: BigDecimal::from(80),
            status,
        }
    }

    #[actix_web::test]
    async fn ids_sao_sequenciais_e_listagem_segue_ordem_de_cadastro() {
        let repo = MemoriaRepositorio::new();
        let a = repo.cadastrar_venda(nova("Ana", StatusVenda::Pendente)).await.unwrap();
        let b = repo.cadastrar_venda(nova("Bia", StatusVenda::Pendente)).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        let nomes: Vec<_> = repo.listar_vendas().await.unwrap().into_iter().map(|v| v.cliente).collect();
        assert_eq!(nomes, vec!["Ana", "Bia"]);
    }

    #[actix_web::test]
    async fn venda_inexistente_nao_mexe_no_caixa() {
        let repo = MemoriaRepositorio::new();
        let campos = CamposVenda { valor: Some(BigDecimal::from(1)), status: None };

        let resultado = repo.atualizar_venda(99, &campos, Some(&BigDecimal::from(30))).await.unwrap();

        assert!(resultado.is_none());
        assert_eq!(repo.obter_caixa().await.unwrap(), Caixa::default());
    }

    #[actix_web::test]
    async fn limpar_pagos_remove_so_pagos() {
        let repo = MemoriaRepositorio::new();
        repo.cadastrar_venda(nova("Ana", StatusVenda::Pago)).await.unwrap();
        repo.cadastrar_venda(nova("Bia", StatusVenda::Pendente)).await.unwrap();
        repo.cadastrar_venda(nova("Caio", StatusVenda::Pago)).await.unwrap();

        assert_eq!(repo.limpar_pagos().await.unwrap(), 2);
        let restantes = repo.listar_vendas().await.unwrap();
        assert_eq!(restantes.len(), 1);
        assert_eq!(restantes[0].cliente, "Bia");
    }

    #[actix_web::test]
    async fn zerar_cria_caixa_com_zero() {
        let repo = MemoriaRepositorio::new();
        let caixa = repo.zerar_caixa().await.unwrap();
        assert_eq!(caixa.total, BigDecimal::from(0));
    }
}
