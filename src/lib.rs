//! Consulta se um CPF já está cadastrado em algum usuário do user pool do
//! Cognito. Feito para rodar como Lambda atrás de um API Gateway, mas o mesmo
//! roteador pode ser servido localmente.

pub mod api;
pub mod configuracao;
pub mod diretorio;
pub mod logs;
