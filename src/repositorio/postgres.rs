// src/repositorio/postgres.rs

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use sqlx::postgres::PgPoolOptions;
use sqlx::{query, query_as, query_scalar, Pool, Postgres};

use super::{Repositorio, Result};
use crate::caixa::caixa_structs::Caixa;
use crate::erro::RepositorioError;
use crate::vendas::vendas_structs::{CamposVenda, NovaVenda, StatusVenda, Venda, VendaRow};

const COLUNAS_VENDA: &str = "id, cliente, perfume, valor_original, valor, status, data";

/// Repositório sobre PostgreSQL.
///
/// O caixa é a linha `id = 1` da tabela 'caixa'; leituras e escritas usam
/// upsert para criá-la sob demanda.
#[derive(Clone)]
pub struct PostgresRepositorio {
    db_pool: Pool<Postgres>,
}

impl PostgresRepositorio {
    /// Cria o pool sem abrir conexão. Só falha se a URL for inválida; banco
    /// fora do ar aparece depois, na primeira consulta.
    pub fn conectar(database_url: &str, max_conexoes: u32) -> Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(max_conexoes)
            .connect_lazy(database_url)?;
        Ok(Self { db_pool })
    }

    pub fn from_pool(db_pool: Pool<Postgres>) -> Self {
        Self { db_pool }
    }

    /// Aplica as migrações embutidas em `migrations/`.
    pub async fn migrar(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.db_pool).await?;
        Ok(())
    }
}

fn para_venda(row: VendaRow) -> Result<Venda> {
    Venda::try_from(row).map_err(RepositorioError::DadosInvalidos)
}

#[async_trait]
impl Repositorio for PostgresRepositorio {
    async fn listar_vendas(&self) -> Result<Vec<Venda>> {
        let rows = query_as::<_, VendaRow>(&format!("SELECT {} FROM vendas ORDER BY id", COLUNAS_VENDA))
            .fetch_all(&self.db_pool)
            .await?;

        rows.into_iter().map(para_venda).collect()
    }

    async fn cadastrar_venda(&self, venda: NovaVenda) -> Result<Venda> {
        let row = query_as::<_, VendaRow>(&format!(
            "INSERT INTO vendas (cliente, perfume, valor_original, valor, status) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            COLUNAS_VENDA
        ))
        .bind(&venda.cliente)
        .bind(&venda.perfume)
        .bind(&venda.valor_original)
        .bind(&venda.valor)
        .bind(venda.status.as_str())
        .fetch_one(&self.db_pool)
        .await?;

        para_venda(row)
    }

    async fn atualizar_venda(
        &self,
        id: i32,
        campos: &CamposVenda,
        pagamento: Option<&BigDecimal>,
    ) -> Result<Option<Venda>> {
        // Venda e caixa na mesma transação: ou as duas escritas valem, ou nenhuma
        let mut transaction = self.db_pool.begin().await?;

        // COALESCE mantém o valor atual quando o campo não veio no PATCH
        let row = query_as::<_, VendaRow>(&format!(
            "UPDATE vendas SET valor = COALESCE($1, valor), status = COALESCE($2, status) \
             WHERE id = $3 RETURNING {}",
            COLUNAS_VENDA
        ))
        .bind(&campos.valor)
        .bind(campos.status.map(|s| s.as_str()))
        .bind(id)
        .fetch_optional(&mut *transaction)
        .await?;

        let row = match row {
            Some(row) => row,
            None => {
                transaction.rollback().await?;
                return Ok(None);
            }
        };

        if let Some(pagamento) = pagamento {
            // Soma atômica no banco, nunca ler-somar-gravar na aplicação
            query(
                "INSERT INTO caixa (id, total) VALUES (1, $1) \
                 ON CONFLICT (id) DO UPDATE SET total = caixa.total + EXCLUDED.total",
            )
            .bind(pagamento)
            .execute(&mut *transaction)
            .await?;
        }

        transaction.commit().await?;
        para_venda(row).map(Some)
    }

    async fn limpar_pagos(&self) -> Result<u64> {
        let result = query("DELETE FROM vendas WHERE status = $1")
            .bind(StatusVenda::Pago.as_str())
            .execute(&self.db_pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn obter_caixa(&self) -> Result<Caixa> {
        // O DO UPDATE sem efeito garante que o RETURNING devolva a linha existente
        let total = query_scalar::<_, BigDecimal>(
            "INSERT INTO caixa (id, total) VALUES (1, 0) \
             ON CONFLICT (id) DO UPDATE SET total = caixa.total RETURNING total",
        )
        .fetch_one(&self.db_pool)
        .await?;

        Ok(Caixa { total })
    }

    async fn zerar_caixa(&self) -> Result<Caixa> {
        let total = query_scalar::<_, BigDecimal>(
            "INSERT INTO caixa (id, total) VALUES (1, 0) \
             ON CONFLICT (id) DO UPDATE SET total = 0 RETURNING total",
        )
        .fetch_one(&self.db_pool)
        .await?;

        Ok(Caixa { total })
    }
}
