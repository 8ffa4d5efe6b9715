// src/shared/mod.rs

// Envelope padrão das respostas da API
pub mod shared_structs;
// Serialização de valores monetários como número JSON
pub mod numero;
