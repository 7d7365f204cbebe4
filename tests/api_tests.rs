// tests/api_tests.rs
//
// Testes das rotas HTTP com o Gemini simulado via httpmock

use std::sync::Arc;

use autou_backend::{build_router, config::Settings, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";
const BOUNDARY: &str = "----autou-test-boundary";

fn test_settings(server: &MockServer) -> Settings {
    let mut settings = Settings::default();
    settings.gemini.api_key = "test-key".to_string();
    settings.gemini.base_url = server.base_url();
    settings.gemini.timeout_seconds = 5;
    settings
}

fn app_with_settings(settings: Settings) -> axum::Router {
    let state = AppState::from_settings(settings).expect("estado de teste");
    build_router(Arc::new(state))
}

fn create_test_app(server: &MockServer) -> axum::Router {
    app_with_settings(test_settings(server))
}

/// PDF mínimo com uma linha de texto (Courier) por página
fn build_pdf(pages: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![100.into(), 600.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"parts": [{"text": text}], "role": "model"},
            "finishReason": "STOP"
        }]
    })
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn multipart_request(filename: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/analyze-file")
        .header("content-type", format!("multipart/form-data; boundary={}", BOUNDARY))
        .body(Body::from(body))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_root_status() {
    let server = MockServer::start_async().await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({"status": "API Online 🚀"}));
}

#[tokio::test]
async fn test_health_reports_model() {
    let server = MockServer::start_async().await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model"], "models/gemini-2.5-flash");
    assert_eq!(body["api_key_configured"], true);
}

#[tokio::test]
async fn test_analyze_returns_model_json_unchanged() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GENERATE_PATH)
                .body_contains("Erro no sistema de faturamento");
            then.status(200).json_body(gemini_reply(
                r#"{"category":"Produtivo","response":"Vamos analisar o erro e retornamos em breve."}"#,
            ));
        })
        .await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(json_request(
            "/analyze",
            json!({"content": "Erro no sistema de faturamento"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({"category": "Produtivo", "response": "Vamos analisar o erro e retornamos em breve."})
    );
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_root_post_strips_markdown_fences() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200).json_body(gemini_reply(
                "```json\n{\"category\":\"Produtivo\",\"response\":\"Obrigado\"}\n```",
            ));
        })
        .await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(json_request("/", json!({"content": "Solicito orçamento"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({"category": "Produtivo", "response": "Obrigado"})
    );
}

#[tokio::test]
async fn test_analyze_malformed_reply_returns_indefinido() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200).json_body(gemini_reply("Desculpe, não entendi."));
        })
        .await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(json_request("/analyze", json!({"content": "Feliz Natal"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({
            "category": "Indefinido",
            "response": "Não foi possível processar a resposta da IA. Tente novamente."
        })
    );
}

#[tokio::test]
async fn test_analyze_upstream_failure_is_500_with_detail() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(429).json_body(json!({
                "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
            }));
        })
        .await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(json_request("/analyze", json!({"content": "Bom dia"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("Quota exceeded"));
}

#[tokio::test]
async fn test_analyze_missing_content_is_422() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200).json_body(gemini_reply("{}"));
        })
        .await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(json_request("/analyze", json!({"texto": "Bom dia"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(read_json(response).await["detail"].is_string());
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_analyze_file_unsupported_format_skips_model() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200).json_body(gemini_reply("{}"));
        })
        .await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(multipart_request("notes.docx", b"qualquer coisa"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({"category": "Erro", "response": "Formato não suportado. Use PDF ou TXT."})
    );
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_analyze_file_txt_embeds_content_in_prompt() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GENERATE_PATH)
                .body_contains("Bom dia")
                .body_contains("Conteúdo do arquivo:");
            then.status(200).json_body(gemini_reply(
                r#"{"category":"Improdutivo","response":"Bom dia! Obrigado pela mensagem."}"#,
            ));
        })
        .await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(multipart_request("memo.txt", "Bom dia".as_bytes()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({"category": "Improdutivo", "response": "Bom dia! Obrigado pela mensagem."})
    );
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_analyze_file_upstream_failure_is_error_record() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(503).body("indisponível");
        })
        .await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(multipart_request("memo.txt", b"Preciso de suporte"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["category"], "Erro");
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("Falha ao ler arquivo: "));
}

#[tokio::test]
async fn test_analyze_file_invalid_pdf_is_error_record() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200).json_body(gemini_reply("{}"));
        })
        .await;
    let app = create_test_app(&server);

    let response = app
        .oneshot(multipart_request("contrato.pdf", b"%PDF-quebrado"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["category"], "Erro");
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("Falha ao ler arquivo: "));
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_analyze_file_pdf_pages_reach_prompt_in_order() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GENERATE_PATH)
                .body_contains(r"Hello page one\nSecond page\n");
            then.status(200).json_body(gemini_reply(
                r#"{"category":"Produtivo","response":"Recebemos o documento."}"#,
            ));
        })
        .await;
    let app = create_test_app(&server);

    let pdf = build_pdf(&["Hello page one", "Second page"]);
    let response = app
        .oneshot(multipart_request("contrato.pdf", &pdf))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        read_json(response).await,
        json!({"category": "Produtivo", "response": "Recebemos o documento."})
    );
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn test_analyze_file_over_upload_limit_is_413() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(GENERATE_PATH);
            then.status(200).json_body(gemini_reply("{}"));
        })
        .await;
    let mut settings = test_settings(&server);
    settings.server.max_upload_bytes = 1000;
    let app = app_with_settings(settings);

    let response = app
        .oneshot(multipart_request("grande.txt", "a".repeat(5000).as_bytes()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(read_json(response).await["detail"].is_string());
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_analyze_file_without_file_field_is_422() {
    let server = MockServer::start_async().await;
    let app = create_test_app(&server);

    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"outro\"\r\n\r\nvalor\r\n--{b}--\r\n",
        b = BOUNDARY
    );
    let request = Request::builder()
        .method("POST")
        .uri("/analyze-file")
        .header("content-type", format!("multipart/form-data; boundary={}", BOUNDARY))
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
