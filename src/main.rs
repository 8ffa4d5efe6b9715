// src/main.rs

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use caixa_vendas::config::{Armazenamento, Config};
use caixa_vendas::repositorio::{MemoriaRepositorio, PostgresRepositorio, Repositorio};
use caixa_vendas::AppState;

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> io::Result<()> {
    // Carrega as variáveis do .env, se o arquivo existir
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!(error = %e, "configuração inválida");
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let repositorio: Arc<dyn Repositorio> = match &config.armazenamento {
        Armazenamento::Postgres { database_url } => {
            let repo = PostgresRepositorio::conectar(database_url, config.max_conexoes).map_err(|e| {
                tracing::error!(error = %e, "URL do banco inválida");
                io::Error::new(io::ErrorKind::InvalidInput, e)
            })?;

            // Banco fora do ar não derruba o servidor: as rotas falham até ele voltar
            match repo.migrar().await {
                Ok(()) => tracing::info!("conectado ao PostgreSQL, migrações aplicadas"),
                Err(e) => tracing::error!(error = %e, "erro ao conectar ao PostgreSQL"),
            }
            Arc::new(repo)
        }
        Armazenamento::Memoria => {
            tracing::warn!("usando armazenamento em memória; os dados somem ao reiniciar");
            Arc::new(MemoriaRepositorio::new())
        }
    };

    let app_state = web::Data::new(AppState::new(repositorio));

    tracing::info!(host = %config.host, port = config.port, "servidor iniciando");

    // Configura e inicia o servidor HTTP.
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            // Aceita requisições de qualquer origem
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(caixa_vendas::configurar)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
