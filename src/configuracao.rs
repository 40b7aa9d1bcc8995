use config::{Config, ConfigError, Environment, File, Source};
use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

fn endereco_padrao() -> String {
    "127.0.0.1:3000".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct Configuracao {
    /// Identificador do user pool do Cognito consultado. Vem da variável de
    /// ambiente `USER_POOL_ID`.
    pub user_pool_id: String,

    /// Endereço usado pelo subcomando `servir`. Não é usado na Lambda.
    #[serde(default = "endereco_padrao")]
    pub endereco: String,
}

#[derive(Debug, Error)]
pub enum ConfiguracaoErro {
    #[error("USER_POOL_ID está vazio")]
    PoolVazio,
    #[error(transparent)]
    ErroNaConfig(#[from] ConfigError),
}

impl Configuracao {
    /// Lê a configuração do arquivo `config.yaml` no diretório de
    /// configuração do usuário (se existir) e das variáveis de ambiente, que
    /// têm precedência.
    ///
    /// # Errors
    ///
    /// Falha caso `USER_POOL_ID` não esteja definido ou esteja em branco. Sem
    /// ele a função não tem o que consultar, então isso deve impedir o início
    /// do processo.
    pub fn importar() -> Result<Self, ConfiguracaoErro> {
        // Na Lambda não existe HOME, então o arquivo é opcional.
        let arquivo = ProjectDirs::from("br", "consulta", "consulta-cpf").map(
            |dirs| {
                File::from(dirs.config_dir().join("config.yaml"))
                    .required(false)
            },
        );

        Self::montar(arquivo, Environment::default())
    }

    /// Junta o arquivo (se houver) e o ambiente, nessa ordem, para que o
    /// ambiente sobrescreva o arquivo.
    fn montar<S>(
        arquivo: Option<S>,
        ambiente: Environment,
    ) -> Result<Self, ConfiguracaoErro>
    where
        S: Source + Send + Sync + 'static,
    {
        let mut builder = Config::builder();
        if let Some(arquivo) = arquivo {
            builder = builder.add_source(arquivo);
        }

        let cfg: Self = builder.add_source(ambiente).build()?.try_deserialize()?;

        cfg.validar()
    }

    fn validar(self) -> Result<Self, ConfiguracaoErro> {
        if self.user_pool_id.trim().is_empty() {
            return Err(ConfiguracaoErro::PoolVazio);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{FileFormat, FileSourceString, Map};

    type Yaml = File<FileSourceString, FileFormat>;

    fn yaml(conteudo: &str) -> Option<Yaml> {
        Some(File::from_str(conteudo, FileFormat::Yaml))
    }

    fn ambiente(variaveis: &[(&str, &str)]) -> Environment {
        let variaveis: Map<String, String> = variaveis
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().source(Some(variaveis))
    }

    #[test]
    fn pool_no_arquivo() {
        let cfg =
            Configuracao::montar(yaml("user_pool_id: us-east-1_abc"), ambiente(&[]))
                .unwrap();
        assert_eq!(cfg.user_pool_id, "us-east-1_abc");
        assert_eq!(cfg.endereco, "127.0.0.1:3000");
    }

    #[test]
    fn pool_no_ambiente() {
        let cfg = Configuracao::montar(
            None::<Yaml>,
            ambiente(&[("USER_POOL_ID", "us-east-1_xyz")]),
        )
        .unwrap();
        assert_eq!(cfg.user_pool_id, "us-east-1_xyz");
    }

    #[test]
    fn ambiente_sobrescreve_arquivo() {
        let cfg = Configuracao::montar(
            yaml("user_pool_id: us-east-1_arquivo\nendereco: 0.0.0.0:8080"),
            ambiente(&[("USER_POOL_ID", "us-east-1_ambiente")]),
        )
        .unwrap();
        assert_eq!(cfg.user_pool_id, "us-east-1_ambiente");
        // O que não está no ambiente continua vindo do arquivo
        assert_eq!(cfg.endereco, "0.0.0.0:8080");
    }

    #[test]
    fn pool_ausente_e_fatal() {
        assert!(matches!(
            Configuracao::montar(yaml("endereco: 0.0.0.0:8080"), ambiente(&[])),
            Err(ConfiguracaoErro::ErroNaConfig(_)),
        ));
        assert!(matches!(
            Configuracao::montar(None::<Yaml>, ambiente(&[("OUTRA", "x")])),
            Err(ConfiguracaoErro::ErroNaConfig(_)),
        ));
    }

    #[test]
    fn pool_em_branco_e_fatal() {
        assert!(matches!(
            Configuracao::montar(None::<Yaml>, ambiente(&[("USER_POOL_ID", "  ")])),
            Err(ConfiguracaoErro::PoolVazio),
        ));
    }

    // Único teste que mexe no ambiente do processo.
    #[test]
    fn importar_le_o_ambiente_do_processo() {
        // SAFETY: nenhum outro teste lê ou escreve USER_POOL_ID no ambiente
        // do processo.
        unsafe { std::env::set_var("USER_POOL_ID", "us-east-1_processo") };
        let cfg = Configuracao::importar();
        unsafe { std::env::remove_var("USER_POOL_ID") };

        assert_eq!(cfg.unwrap().user_pool_id, "us-east-1_processo");
        assert!(matches!(
            Configuracao::importar(),
            Err(ConfiguracaoErro::ErroNaConfig(_)),
        ));
    }
}
