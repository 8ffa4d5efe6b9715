// src/vendas/mod.rs

// Declara o submódulo com as structs de vendas (Venda, StatusVenda, payloads)
pub mod vendas_structs;
// Declara o submódulo com a regra de abatimento (venda + caixa)
pub mod vendas_service;
// Declara o submódulo que contém as funções de rota de vendas
pub mod vendas_router;
