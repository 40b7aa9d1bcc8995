use crate::diretorio::{Diretorio, Pagina, Result, UsuarioDiretorio};
use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::Client;
use aws_sdk_cognitoidentityprovider::types::UserType;

/// Diretório apoiado num user pool do Cognito.
///
/// Deve ser criado uma única vez na inicialização do processo e compartilhado
/// entre as invocações; o [`Client`] já é seguro para uso concorrente.
#[derive(Debug, Clone)]
pub struct DiretorioCognito {
    cliente: Client,
    user_pool_id: String,
}

impl DiretorioCognito {
    pub fn new(cliente: Client, user_pool_id: impl Into<String>) -> Self {
        Self {
            cliente,
            user_pool_id: user_pool_id.into(),
        }
    }

    /// Cria o cliente a partir da configuração padrão da AWS (região e
    /// credenciais vindas do ambiente da Lambda ou do perfil local).
    pub async fn do_ambiente(user_pool_id: impl Into<String>) -> Self {
        let sdk = aws_config::load_from_env().await;
        Self::new(Client::new(&sdk), user_pool_id)
    }
}

fn converter_usuario(usuario: &UserType) -> UsuarioDiretorio {
    UsuarioDiretorio {
        username: usuario.username().map(str::to_string),
        atributos: usuario
            .attributes()
            .iter()
            .filter_map(|attr| {
                attr.value()
                    .map(|valor| (attr.name().to_string(), valor.to_string()))
            })
            .collect(),
    }
}

#[async_trait]
impl Diretorio for DiretorioCognito {
    async fn listar_usuarios(&self, cursor: Option<&str>) -> Result<Pagina> {
        let saida = self
            .cliente
            .list_users()
            .user_pool_id(&self.user_pool_id)
            .set_pagination_token(cursor.map(str::to_string))
            .send()
            .await
            .map_err(aws_sdk_cognitoidentityprovider::Error::from)?;

        Ok(Pagina {
            usuarios: saida.users().iter().map(converter_usuario).collect(),
            proximo: saida.pagination_token().map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_cognitoidentityprovider::types::AttributeType;

    #[test]
    fn converte_atributos_do_cognito() {
        let usuario = UserType::builder()
            .username("maria")
            .attributes(
                AttributeType::builder()
                    .name("custom:Cpf")
                    .value("123.456.789-00")
                    .build()
                    .unwrap(),
            )
            .attributes(AttributeType::builder().name("email").build().unwrap())
            .build();

        let convertido = converter_usuario(&usuario);

        assert_eq!(convertido.username.as_deref(), Some("maria"));
        assert_eq!(convertido.cpf(), Some("123.456.789-00"));
        // Atributos sem valor são ignorados
        assert!(!convertido.atributos.contains_key("email"));
    }
}
