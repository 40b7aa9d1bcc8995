use crate::diretorio::{Diretorio, Result, UsuarioDiretorio};
use tracing::info;

/// Lista todos os usuários do diretório, seguindo os cursores de paginação
/// até uma página sem cursor. Os usuários são retornados na ordem em que
/// chegaram.
///
/// Não há limite de páginas: o número de chamadas cresce com o tamanho do
/// user pool.
///
/// # Errors
///
/// Retorna o erro da primeira página que falhar; as páginas anteriores são
/// descartadas.
pub async fn listar_todos(
    diretorio: &dyn Diretorio,
) -> Result<Vec<UsuarioDiretorio>> {
    let mut usuarios = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let pagina = diretorio.listar_usuarios(cursor.as_deref()).await?;

        info!(
            quantidade = pagina.usuarios.len(),
            proximo = ?pagina.proximo,
            "Página de usuários recebida",
        );

        usuarios.extend(pagina.usuarios);

        // O Cognito pode devolver um cursor vazio no lugar de nenhum
        match pagina.proximo.filter(|c| !c.is_empty()) {
            Some(proximo) => cursor = Some(proximo),
            None => break,
        }
    }

    Ok(usuarios)
}

/// Diz se algum dos usuários tem o atributo `custom:Cpf` igual ao CPF dado.
/// A comparação é exata: pontuação e zeros à esquerda precisam bater.
///
/// # Examples
///
/// ```
/// # use consulta_cpf::diretorio::{UsuarioDiretorio, cpf_cadastrado};
/// let usuarios = vec![
///     UsuarioDiretorio::default(),
///     UsuarioDiretorio::com_cpf("12345678900"),
/// ];
///
/// assert!(cpf_cadastrado(&usuarios, "12345678900"));
/// assert!(!cpf_cadastrado(&usuarios, "00000000000"));
///
/// // Sem normalização
/// assert!(!cpf_cadastrado(&usuarios, "123.456.789-00"));
/// assert!(!cpf_cadastrado(&[], "12345678900"));
/// ```
pub fn cpf_cadastrado(usuarios: &[UsuarioDiretorio], cpf: &str) -> bool {
    usuarios.iter().any(|u| u.cpf() == Some(cpf))
}

/// Consulta se o CPF está cadastrado em algum usuário do diretório.
///
/// # Errors
///
/// Retorna erro caso alguma das páginas não possa ser listada.
pub async fn consultar_cpf(diretorio: &dyn Diretorio, cpf: &str) -> Result<bool> {
    let usuarios = listar_todos(diretorio).await?;
    Ok(cpf_cadastrado(&usuarios, cpf))
}
