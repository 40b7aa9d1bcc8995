use std::collections::HashMap;

/// Nome do atributo customizado onde o CPF fica guardado no user pool.
pub const ATRIBUTO_CPF: &str = "custom:Cpf";

/// Um usuário retornado pelo diretório. Só os atributos importam para a
/// consulta, o username é guardado para os logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsuarioDiretorio {
    pub username: Option<String>,
    pub atributos: HashMap<String, String>,
}

impl UsuarioDiretorio {
    /// Cria um usuário com o atributo `custom:Cpf` preenchido.
    ///
    /// # Examples
    ///
    /// ```
    /// # use consulta_cpf::diretorio::UsuarioDiretorio;
    /// let usuario = UsuarioDiretorio::com_cpf("12345678900");
    /// assert_eq!(usuario.cpf(), Some("12345678900"));
    /// assert_eq!(UsuarioDiretorio::default().cpf(), None);
    /// ```
    pub fn com_cpf(cpf: &str) -> Self {
        Self {
            username: None,
            atributos: HashMap::from([(
                ATRIBUTO_CPF.to_string(),
                cpf.to_string(),
            )]),
        }
    }

    pub fn cpf(&self) -> Option<&str> {
        self.atributos.get(ATRIBUTO_CPF).map(String::as_str)
    }
}

/// Uma página da listagem de usuários. Se `proximo` for `None`, não há mais
/// páginas.
#[derive(Debug, Clone, Default)]
pub struct Pagina {
    pub usuarios: Vec<UsuarioDiretorio>,
    pub proximo: Option<String>,
}
