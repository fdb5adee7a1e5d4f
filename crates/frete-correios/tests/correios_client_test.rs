//! Contract tests for CorreiosClient against a wiremock calculator.
//!
//! | Reply | Expected |
//! |-------|----------|
//! | `Erro` 0 with price | `BoxPrice` |
//! | `Erro` 7 | `TemporarilyUnavailable` |
//! | other `Erro` | `Rejected` |
//! | bad XML, 4xx | `InvalidResponse` |
//! | 5xx, timeout, closed port | `TemporarilyUnavailable` |

use std::time::Duration;

use frete_core::{Carton, Decimal, PostalCode, QuoteOptions, Service, ServiceCode};
use frete_correios::{
    CorreiosClient, CorreiosConfig, PriceError, PriceOracle, PriceRequest, CALCULATOR_PATH,
    GENERIC_REJECTION,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CorreiosClient {
    CorreiosClient::new(CorreiosConfig::local_mock(&server.uri()).unwrap()).unwrap()
}

fn carton_request(weight_kg: f64, edge_cm: f64) -> PriceRequest {
    PriceRequest::for_carton(
        &PostalCode::new("01310-100").unwrap(),
        &PostalCode::new("20040-002").unwrap(),
        &ServiceCode::from(Service::Pac),
        &QuoteOptions::default(),
        &Carton::new(weight_kg, edge_cm),
    )
}

fn xml_reply(valor: &str, erro: &str, msg: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="ISO-8859-1" ?>
<Servicos>
  <cServico>
    <Codigo>41106</Codigo>
    <Valor>{valor}</Valor>
    <PrazoEntrega>7</PrazoEntrega>
    <Erro>{erro}</Erro>
    <MsgErro>{msg}</MsgErro>
  </cServico>
</Servicos>"#
    )
}

async fn mount_reply(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path(CALCULATOR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

// ── Success ──────────────────────────────────────────────────────────

#[tokio::test]
async fn price_sends_carton_as_query_and_parses_reply() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CALCULATOR_PATH))
        .and(query_param("sCepOrigem", "01310100"))
        .and(query_param("sCepDestino", "20040002"))
        .and(query_param("nVlPeso", "30"))
        .and(query_param("nVlAltura", "66"))
        .and(query_param("nVlLargura", "66"))
        .and(query_param("nVlComprimento", "66"))
        .and(query_param("nCdServico", "41106"))
        .and(query_param("nCdFormato", "1"))
        .and(query_param("StrRetorno", "xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(xml_reply("87,30", "0", "")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let price = client.price(&carton_request(30.0, 66.0)).await.unwrap();
    assert_eq!(price.value, Decimal::new(8730, 2));
    assert_eq!(price.delivery_days, Some(7));
}

#[tokio::test]
async fn thousands_separator_is_understood() {
    let server = MockServer::start().await;
    mount_reply(&server, xml_reply("1.234,56", "0", "")).await;

    let price = client_for(&server).price(&carton_request(5.0, 20.0)).await.unwrap();
    assert_eq!(price.value, Decimal::new(123_456, 2));
}

#[tokio::test]
async fn request_url_points_at_configured_calculator() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    let url = client.request_url(&carton_request(5.0, 20.0));

    assert!(url.as_str().starts_with(&format!("{}{CALCULATOR_PATH}?", server.uri())));
    assert!(url.as_str().contains("nVlPeso=5&"));
}

#[tokio::test]
async fn price_url_fetches_prebuilt_url() {
    let server = MockServer::start().await;
    mount_reply(&server, xml_reply("19,90", "0", "")).await;

    let client = client_for(&server);
    let url = client.request_url(&carton_request(1.0, 16.0));
    let price = client.price_url(&url).await.unwrap();
    assert_eq!(price.value, Decimal::new(1990, 2));
}

// ── Carrier errors ───────────────────────────────────────────────────

#[tokio::test]
async fn error_code_seven_is_temporarily_unavailable() {
    let server = MockServer::start().await;
    mount_reply(&server, xml_reply("0,00", "7", "Sistema temporariamente fora do ar.")).await;

    let err = client_for(&server).price(&carton_request(5.0, 20.0)).await.unwrap_err();
    assert!(err.is_retryable());
    assert!(err.to_string().contains("Sistema temporariamente fora do ar."));
}

#[tokio::test]
async fn rejection_keeps_carrier_message() {
    let server = MockServer::start().await;
    mount_reply(&server, xml_reply("0,00", "-3", "CEP de destino invalido.")).await;

    let err = client_for(&server).price(&carton_request(5.0, 20.0)).await.unwrap_err();
    assert_eq!(
        err,
        PriceError::Rejected {
            code: "-3".into(),
            message: "CEP de destino invalido.".into(),
        }
    );
}

#[tokio::test]
async fn rejection_without_message_gets_generic_text() {
    let server = MockServer::start().await;
    mount_reply(&server, xml_reply("0,00", "-888", "")).await;

    let err = client_for(&server).price(&carton_request(5.0, 20.0)).await.unwrap_err();
    assert!(matches!(err, PriceError::Rejected { ref message, .. } if message == GENERIC_REJECTION));
}

#[tokio::test]
async fn latin1_rejection_message_is_decoded() {
    let server = MockServer::start().await;
    let mut body = xml_reply("0,00", "-3", "CEP de destino inv").into_bytes();
    let tail = body.split_off(body.len() - "</MsgErro>\n  </cServico>\n</Servicos>".len());
    body.extend_from_slice(b"\xE1lido.");
    body.extend_from_slice(&tail);

    Mock::given(method("GET"))
        .and(path(CALCULATOR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/xml"))
        .mount(&server)
        .await;

    let err = client_for(&server).price(&carton_request(5.0, 20.0)).await.unwrap_err();
    assert_eq!(
        err,
        PriceError::Rejected {
            code: "-3".into(),
            message: "CEP de destino inválido.".into()
        }
    );
}

// ── Transport and protocol failures ──────────────────────────────────

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    mount_reply(&server, "this is not xml <<<".to_string()).await;

    let err = client_for(&server).price(&carton_request(5.0, 20.0)).await.unwrap_err();
    assert!(matches!(err, PriceError::InvalidResponse { .. }), "got {err:?}");
}

#[tokio::test]
async fn server_error_is_temporarily_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALCULATOR_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).price(&carton_request(5.0, 20.0)).await.unwrap_err();
    assert!(matches!(err, PriceError::TemporarilyUnavailable { .. }), "got {err:?}");
}

#[tokio::test]
async fn client_error_status_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALCULATOR_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).price(&carton_request(5.0, 20.0)).await.unwrap_err();
    assert!(matches!(err, PriceError::InvalidResponse { .. }), "got {err:?}");
}

#[tokio::test]
async fn slow_calculator_times_out_as_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(CALCULATOR_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(xml_reply("10,00", "0", ""))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = CorreiosConfig {
        timeout_secs: 1,
        ..CorreiosConfig::local_mock(&server.uri()).unwrap()
    };
    let client = CorreiosClient::new(config).unwrap();
    let err = client.price(&carton_request(5.0, 20.0)).await.unwrap_err();
    assert!(matches!(err, PriceError::TemporarilyUnavailable { .. }), "got {err:?}");
}

#[tokio::test]
async fn unreachable_calculator_is_unavailable() {
    let client = CorreiosClient::new(CorreiosConfig::local_mock("http://127.0.0.1:1").unwrap()).unwrap();
    let err = client.price(&carton_request(5.0, 20.0)).await.unwrap_err();
    assert!(err.is_retryable(), "got {err:?}");
}
