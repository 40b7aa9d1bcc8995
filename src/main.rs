use clap::{Parser, Subcommand};
use consulta_cpf::api::{self, Estado};
use consulta_cpf::configuracao::Configuracao;
use consulta_cpf::diretorio::{self, DiretorioCognito};
use consulta_cpf::logs::{self, Destino};
use lambda_http::Error;
use std::sync::Arc;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    comando: Option<Comandos>,
}

#[derive(Subcommand)]
enum Comandos {
    /// Roda dentro do runtime da Lambda (padrão)
    Lambda,
    /// Serve a mesma API por HTTP, para desenvolvimento
    Servir {
        #[arg(long)]
        endereco: Option<String>,
    },
    /// Consulta um CPF uma única vez e imprime o resultado
    Consultar { cpf: String },
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    let comando = cli.comando.unwrap_or(Comandos::Lambda);

    logs::iniciar(match comando {
        Comandos::Lambda => Destino::Lambda,
        _ => Destino::Terminal,
    });

    let cfg = Configuracao::importar()?;

    let cognito = DiretorioCognito::do_ambiente(cfg.user_pool_id.as_str()).await;
    let estado: Estado = Arc::new(cognito);

    match comando {
        Comandos::Lambda => {
            lambda_http::run(api::router(estado)).await?;
        },
        Comandos::Servir { endereco } => {
            let endereco = endereco.unwrap_or(cfg.endereco);
            api::main(&endereco, estado).await?;
        },
        Comandos::Consultar { cpf } => {
            let r = diretorio::consultar_cpf(estado.as_ref(), &cpf).await?;
            println!("{r:?}");
        },
    }

    Ok(())
}
