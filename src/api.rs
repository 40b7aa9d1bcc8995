use crate::diretorio::{self, Diretorio};
use axum::Router;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Json, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Estado compartilhado entre as invocações. Criado uma vez na inicialização e
/// nunca alterado.
pub type Estado = Arc<dyn Diretorio>;

#[derive(Debug, Deserialize)]
struct CorpoRequisicao {
    cpf: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

/// Resposta pronta para virar JSON, com o código HTTP.
pub type Resposta = (StatusCode, ResponseBody);

fn resposta(codigo: StatusCode, message: &str, status: Option<bool>) -> Resposta {
    (
        codigo,
        ResponseBody {
            message: message.to_string(),
            status,
        },
    )
}

/// Extrai o CPF do corpo. JSON inválido, `null`, campo ausente e CPF em branco
/// são tratados da mesma forma.
fn extrair_cpf(corpo: &[u8]) -> Option<String> {
    serde_json::from_slice::<Option<CorpoRequisicao>>(corpo)
        .ok()
        .flatten()
        .map(|c| c.cpf)
        .filter(|cpf| !cpf.trim().is_empty())
}

async fn processar(
    diretorio: &dyn Diretorio,
    corpo: &[u8],
) -> diretorio::Result<Resposta> {
    if corpo.is_empty() {
        warn!("body vazio");
        return Ok(resposta(StatusCode::BAD_REQUEST, "body empty", None));
    }

    let Some(cpf) = extrair_cpf(corpo) else {
        warn!("CPF vazio");
        return Ok(resposta(StatusCode::BAD_REQUEST, "Cpf empty", None));
    };

    info!(%cpf, "CPF recebido");

    let existe = diretorio::consultar_cpf(diretorio, &cpf).await?;

    info!(existe, "CPF consultado");

    Ok(resposta(StatusCode::OK, "success", Some(existe)))
}

/// Trata uma requisição a partir do corpo bruto. Qualquer erro do diretório
/// vira um 500 genérico; o erro real só vai para o log.
pub async fn tratar(diretorio: &dyn Diretorio, corpo: &[u8]) -> Resposta {
    info!(corpo = %String::from_utf8_lossy(corpo), "Request recebido");

    match processar(diretorio, corpo).await {
        Ok(r) => r,
        Err(err) => {
            error!(erro = ?err, "Erro ao processar a requisição");
            resposta(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                None,
            )
        },
    }
}

async fn consultar(
    State(diretorio): State<Estado>,
    corpo: Bytes,
) -> (StatusCode, Json<ResponseBody>) {
    let (codigo, corpo) = tratar(diretorio.as_ref(), &corpo).await;
    (codigo, Json(corpo))
}

/// Monta o roteador. O método e o caminho não importam: toda requisição cai
/// na consulta.
///
/// O limite de tamanho do body do axum fica desligado; quem limita é o API
/// Gateway, e toda resposta precisa sair no formato JSON acima.
pub fn router(diretorio: Estado) -> Router {
    Router::new()
        .fallback(consultar)
        .layer(DefaultBodyLimit::disable())
        .with_state(diretorio)
}

/// Serve o roteador localmente, fora da Lambda.
pub async fn main(address: &str, diretorio: Estado) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!(%address, "Servindo localmente");
    axum::serve(listener, router(diretorio)).await
}
