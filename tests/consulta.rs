use axum::body::Body;
use axum::http::{Request, StatusCode};
use consulta_cpf::api;
use consulta_cpf::diretorio::{DiretorioMemoria, UsuarioDiretorio};
use std::sync::Arc;
use tower::ServiceExt;

async fn consultar(
    diretorio: Arc<DiretorioMemoria>,
    corpo: &'static str,
) -> (StatusCode, serde_json::Value) {
    let response = api::router(diretorio)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::from(corpo))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let corpo = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&corpo).unwrap())
}

#[tokio::test]
async fn tabela_de_respostas() {
    let diretorio = Arc::new(DiretorioMemoria::new(vec![
        vec![UsuarioDiretorio::default(), UsuarioDiretorio::com_cpf("1")],
        vec![UsuarioDiretorio::com_cpf("123.456.789-00")],
    ]));

    let casos = [
        ("", 400, serde_json::json!({"message": "body empty"})),
        ("{}", 400, serde_json::json!({"message": "Cpf empty"})),
        (
            r#"{"cpf":"123.456.789-00"}"#,
            200,
            serde_json::json!({"message": "success", "status": true}),
        ),
        (
            r#"{"cpf":"12345678900"}"#,
            200,
            serde_json::json!({"message": "success", "status": false}),
        ),
    ];

    for (corpo, status, esperado) in casos {
        let (s, json) = consultar(diretorio.clone(), corpo).await;
        assert_eq!(s.as_u16(), status, "{corpo}");
        assert_eq!(json, esperado, "{corpo}");
    }

    // Só as duas consultas válidas chegam ao diretório, duas páginas cada
    assert_eq!(diretorio.chamadas().len(), 4);
}

#[tokio::test]
async fn falha_do_diretorio() {
    let diretorio =
        Arc::new(DiretorioMemoria::new(vec![vec![], vec![]]).falhando_na(1));

    let (status, json) = consultar(diretorio, r#"{"cpf":"1"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({"message": "Internal server error"}));
}
