// src/config.rs

//! Configuração lida das variáveis de ambiente (e do `.env`, se existir).

use thiserror::Error;

/// Onde as vendas e o caixa são guardados.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Armazenamento {
    Postgres { database_url: String },
    Memoria,
}

/// Configuração do servidor.
///
/// Variáveis lidas:
/// - `DATABASE_URL` — conexão PostgreSQL (obrigatória com armazenamento postgres)
/// - `PORT` — porta (padrão `10000`)
/// - `HOST` — endereço de bind (padrão `"0.0.0.0"`)
/// - `DB_MAX_CONEXOES` — tamanho do pool (padrão `5`)
/// - `ARMAZENAMENTO` — `postgres` (padrão) ou `memoria`
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub max_conexoes: u32,
    pub armazenamento: Armazenamento,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("variável de ambiente {0} não definida")]
    Ausente(&'static str),

    #[error("valor inválido para {nome}: {valor:?}")]
    Invalida { nome: &'static str, valor: String },
}

pub const PORTA_PADRAO: u16 = 10000;

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|nome| std::env::var(nome).ok())
    }

    /// Mesma leitura de `from_env`, com a fonte das variáveis injetada.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(valor) => {
                let lida: Option<u16> = valor.trim().parse().ok();
                lida.ok_or(ConfigError::Invalida { nome: "PORT", valor })?
            }
            None => PORTA_PADRAO,
        };

        let max_conexoes = match lookup("DB_MAX_CONEXOES") {
            Some(valor) => {
                let lido: Option<u32> = valor.trim().parse().ok();
                match lido {
                    Some(n) if n > 0 => n,
                    _ => return Err(ConfigError::Invalida { nome: "DB_MAX_CONEXOES", valor }),
                }
            }
            None => 5,
        };

        let armazenamento = match lookup("ARMAZENAMENTO").as_deref().map(str::trim) {
            None | Some("postgres") => Armazenamento::Postgres {
                database_url: lookup("DATABASE_URL").ok_or(ConfigError::Ausente("DATABASE_URL"))?,
            },
            Some("memoria") => Armazenamento::Memoria,
            Some(outro) => {
                return Err(ConfigError::Invalida {
                    nome: "ARMAZENAMENTO",
                    valor: outro.to_string(),
                })
            }
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            max_conexoes,
            armazenamento,
        })
    }
}
