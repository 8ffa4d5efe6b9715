// src/repositorio/mod.rs

//! Acesso ao armazenamento de vendas e do caixa.
//!
//! `PostgresRepositorio` é a implementação de produção; `MemoriaRepositorio`
//! guarda tudo em memória (testes e execução sem banco).

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::caixa::caixa_structs::Caixa;
use crate::erro::RepositorioError;
use crate::vendas::vendas_structs::{CamposVenda, NovaVenda, Venda};

pub mod memoria;
pub mod postgres;

pub use memoria::MemoriaRepositorio;
pub use postgres::PostgresRepositorio;

pub type Result<T> = std::result::Result<T, RepositorioError>;

#[async_trait]
pub trait Repositorio: Send + Sync {
    /// Todas as vendas, na ordem de cadastro.
    async fn listar_vendas(&self) -> Result<Vec<Venda>>;

    /// Grava uma nova venda com data = agora.
    async fn cadastrar_venda(&self, venda: NovaVenda) -> Result<Venda>;

    /// Aplica só os campos presentes em `campos` e, se houver `pagamento`,
    /// soma o valor ao total do caixa (criando o caixa se preciso).
    ///
    /// As duas escritas são atômicas juntas: se a venda não existir
    /// (`Ok(None)`) ou algo falhar, o caixa não é alterado.
    async fn atualizar_venda(
        &self,
        id: i32,
        campos: &CamposVenda,
        pagamento: Option<&BigDecimal>,
    ) -> Result<Option<Venda>>;

    /// Remove as vendas com status "pago". Retorna quantas foram removidas.
    async fn limpar_pagos(&self) -> Result<u64>;

    /// Caixa atual, criado com total 0 se ainda não existir.
    async fn obter_caixa(&self) -> Result<Caixa>;

    /// Zera o total do caixa (criando-o se preciso).
    async fn zerar_caixa(&self) -> Result<Caixa>;
}
