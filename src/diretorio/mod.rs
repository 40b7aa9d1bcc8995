//! Funções relacionadas ao diretório de usuários (user pool do Cognito) onde
//! os CPFs dos usuários já cadastrados ficam guardados.

pub mod cognito;
pub mod consulta;
pub mod error;
pub mod memoria;
pub mod tipos;

pub use cognito::DiretorioCognito;
pub use consulta::{consultar_cpf, cpf_cadastrado, listar_todos};
pub use error::{ErroDiretorio, Result};
pub use memoria::DiretorioMemoria;
pub use tipos::{ATRIBUTO_CPF, Pagina, UsuarioDiretorio};

use async_trait::async_trait;

/// Um diretório de usuários que pode ser listado página por página.
///
/// A implementação nunca deve alterar o diretório, a consulta só lê.
#[async_trait]
pub trait Diretorio: Send + Sync {
    /// Busca uma página de usuários. `cursor` é `None` na primeira chamada e,
    /// nas seguintes, o [`Pagina::proximo`] retornado pela anterior.
    async fn listar_usuarios(&self, cursor: Option<&str>) -> Result<Pagina>;
}
