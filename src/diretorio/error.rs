//! Tipos de erro do módulo de contato com o diretório de usuários.
use thiserror::Error;

/// Representa um erro ao tentar listar os usuários do diretório.
#[derive(Debug, Error)]
pub enum ErroDiretorio {
    /// Um problema com a chamada ao Cognito. Pode ser um problema de rede, de
    /// credenciais ou o próprio serviço recusando a listagem. Para saber,
    /// acesse o [`aws_sdk_cognitoidentityprovider::Error`].
    #[error("Houve um problema com o Cognito")]
    ErroCognito(#[from] aws_sdk_cognitoidentityprovider::Error),

    /// Falha de um diretório que não é o Cognito, usada pelo
    /// [`DiretorioMemoria`](crate::diretorio::DiretorioMemoria).
    #[error("Falha no diretório: {0}")]
    Falha(String),
}

/// Variação do [std::result::Result] para o [ErroDiretorio].
pub type Result<T> = std::result::Result<T, ErroDiretorio>;
