// src/caixa/mod.rs

// Declara o submódulo com a struct do caixa
pub mod caixa_structs;
// Declara o submódulo com as rotas do caixa
pub mod caixa_router;
