//! Calculator XML replies.
//!
//! ```xml
//! <?xml version="1.0" encoding="ISO-8859-1" ?>
//! <Servicos>
//!   <cServico>
//!     <Codigo>41106</Codigo>
//!     <Valor>1.234,56</Valor>
//!     <PrazoEntrega>6</PrazoEntrega>
//!     <Erro>0</Erro>
//!     <MsgErro></MsgErro>
//!   </cServico>
//! </Servicos>
//! ```
//!
//! Replies are decoded per the declared `encoding` (UTF-8 when absent)
//! before parsing, regardless of the HTTP `Content-Type` charset.
//!
//! `Erro` 0 is success, 7 means the service is temporarily down, and any
//! other code is a carrier rejection. Fields not listed above are ignored.

use frete_core::parse_brl;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PriceError;

/// Carrier error code for "service temporarily unavailable".
const ERROR_TEMPORARILY_UNAVAILABLE: i32 = 7;

/// Message used when the carrier rejects a request without saying why.
pub const GENERIC_REJECTION: &str = "freight could not be calculated for this carton";

/// Message used for error code 7 without a carrier message.
const GENERIC_UNAVAILABLE: &str = "service temporarily unavailable, try again later";

/// Price of one carton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxPrice {
    pub value: Decimal,
    /// Delivery time in working days, when the carrier reported one.
    pub delivery_days: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ServicesEnvelope {
    #[serde(rename = "cServico", default)]
    services: Vec<ServiceRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ServiceRecord {
    #[serde(default)]
    codigo: Option<String>,
    #[serde(default)]
    valor: Option<String>,
    #[serde(default)]
    prazo_entrega: Option<String>,
    #[serde(default)]
    erro: Option<String>,
    #[serde(default)]
    msg_erro: Option<String>,
}

fn non_empty(field: Option<String>) -> Option<String> {
    field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Character set named in the XML declaration of `body`, if any.
fn declared_encoding(body: &[u8]) -> Option<&'static encoding_rs::Encoding> {
    let end = body.windows(2).position(|w| w == b"?>")?;
    let decl = std::str::from_utf8(&body[..end]).ok()?;
    if !decl.trim_start().starts_with("<?xml") {
        return None;
    }
    let rest = &decl[decl.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let label = rest[1..].split(quote).next()?;
    encoding_rs::Encoding::for_label(label.as_bytes())
}

/// Interpret a raw calculator reply, decoding it per its XML declaration.
///
/// # Errors
///
/// Same as [`parse_price_response`].
pub fn parse_price_response_bytes(body: &[u8]) -> Result<BoxPrice, PriceError> {
    let encoding = declared_encoding(body).unwrap_or(encoding_rs::UTF_8);
    let (text, _, had_errors) = encoding.decode(body);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "calculator reply has undecodable bytes");
    }
    parse_price_response(&text)
}

/// Interpret a calculator reply.
///
/// # Errors
///
/// - [`PriceError::InvalidResponse`] for unparsable XML or a missing
///   service record, error code, or price
/// - [`PriceError::TemporarilyUnavailable`] for error code 7
/// - [`PriceError::Rejected`] for any other non-zero error code
pub fn parse_price_response(body: &str) -> Result<BoxPrice, PriceError> {
    let envelope: ServicesEnvelope =
        quick_xml::de::from_str(body).map_err(|e| PriceError::InvalidResponse {
            reason: format!("unparsable XML: {e}"),
        })?;

    let record = envelope
        .services
        .into_iter()
        .next()
        .ok_or_else(|| PriceError::InvalidResponse {
            reason: "reply has no cServico record".into(),
        })?;

    let code = non_empty(record.erro).ok_or_else(|| PriceError::InvalidResponse {
        reason: "service record has no Erro field".into(),
    })?;
    let message = non_empty(record.msg_erro);

    match code.parse::<i32>() {
        Ok(0) => {}
        Ok(ERROR_TEMPORARILY_UNAVAILABLE) => {
            return Err(PriceError::TemporarilyUnavailable {
                reason: message.unwrap_or_else(|| GENERIC_UNAVAILABLE.into()),
            })
        }
        _ => {
            return Err(PriceError::Rejected {
                code,
                message: message.unwrap_or_else(|| GENERIC_REJECTION.into()),
            })
        }
    }

    let raw_value = non_empty(record.valor).ok_or_else(|| PriceError::InvalidResponse {
        reason: format!(
            "service {} reported success without a price",
            record.codigo.as_deref().unwrap_or("?")
        ),
    })?;
    let value = parse_brl(&raw_value).map_err(|e| PriceError::InvalidResponse {
        reason: e.to_string(),
    })?;
    let delivery_days = non_empty(record.prazo_entrega).and_then(|d| d.parse().ok());

    Ok(BoxPrice {
        value,
        delivery_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(valor: &str, erro: &str, msg: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="ISO-8859-1" ?>
<Servicos><cServico><Codigo>41106</Codigo><Valor>{valor}</Valor><PrazoEntrega>6</PrazoEntrega><ValorMaoPropria>0,00</ValorMaoPropria><ValorAvisoRecebimento>0,00</ValorAvisoRecebimento><ValorValorDeclarado>0,00</ValorValorDeclarado><EntregaDomiciliar>S</EntregaDomiciliar><EntregaSabado>N</EntregaSabado><Erro>{erro}</Erro><MsgErro>{msg}</MsgErro></cServico></Servicos>"#
        )
    }

    #[test]
    fn success_parses_brazilian_price() {
        let price = parse_price_response(&reply("1.234,56", "0", "")).unwrap();
        assert_eq!(price.value, Decimal::new(123_456, 2));
        assert_eq!(price.delivery_days, Some(6));
    }

    #[test]
    fn code_seven_is_temporarily_unavailable() {
        let err = parse_price_response(&reply("0,00", "7", "Servico indisponivel")).unwrap_err();
        assert_eq!(
            err,
            PriceError::TemporarilyUnavailable {
                reason: "Servico indisponivel".into()
            }
        );
        assert!(err.is_retryable());
    }

    #[test]
    fn code_seven_without_message_uses_fallback() {
        let err = parse_price_response(&reply("0,00", "7", "")).unwrap_err();
        assert!(matches!(err, PriceError::TemporarilyUnavailable { reason } if reason == GENERIC_UNAVAILABLE));
    }

    #[test]
    fn other_codes_are_rejections_with_verbatim_message() {
        let err = parse_price_response(&reply("0,00", "-3", "CEP de destino invalido.")).unwrap_err();
        assert_eq!(
            err,
            PriceError::Rejected {
                code: "-3".into(),
                message: "CEP de destino invalido.".into()
            }
        );
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let err = parse_price_response(&reply("0,00", "-888", "")).unwrap_err();
        assert!(matches!(err, PriceError::Rejected { message, .. } if message == GENERIC_REJECTION));
    }

    #[test]
    fn cdata_message_is_unwrapped() {
        let err = parse_price_response(&reply("0,00", "-4", "<![CDATA[Peso excedido.]]>")).unwrap_err();
        assert!(matches!(err, PriceError::Rejected { message, .. } if message == "Peso excedido."));
    }

    #[test]
    fn latin1_reply_is_decoded_per_declaration() {
        let mut body = reply("0,00", "-3", "CEP de destino inv").into_bytes();
        let tail = body.split_off(body.len() - "</MsgErro></cServico></Servicos>".len());
        body.extend_from_slice(b"\xE1lido.");
        body.extend_from_slice(&tail);
        assert!(std::str::from_utf8(&body).is_err());

        let err = parse_price_response_bytes(&body).unwrap_err();
        assert_eq!(
            err,
            PriceError::Rejected {
                code: "-3".into(),
                message: "CEP de destino inválido.".into()
            }
        );
    }

    #[test]
    fn undeclared_encoding_is_utf8() {
        let body = "<Servicos><cServico><Erro>-3</Erro><MsgErro>Serviço inválido</MsgErro></cServico></Servicos>";
        let err = parse_price_response_bytes(body.as_bytes()).unwrap_err();
        assert!(matches!(err, PriceError::Rejected { message, .. } if message == "Serviço inválido"));
    }

    #[test]
    fn declared_encoding_reads_single_quotes() {
        let enc = declared_encoding(b"<?xml version='1.0' encoding='iso-8859-1'?><a/>").unwrap();
        assert_eq!(enc, encoding_rs::WINDOWS_1252);
        assert!(declared_encoding(b"<Servicos/>").is_none());
    }

    #[test]
    fn garbage_is_invalid_response() {
        let err = parse_price_response("<html><body>502 Bad Gateway").unwrap_err();
        assert!(matches!(err, PriceError::InvalidResponse { .. }));
        assert!(!err.is_retryable());
    }

    #[test]
    fn missing_record_is_invalid_response() {
        let err = parse_price_response("<Servicos></Servicos>").unwrap_err();
        assert!(matches!(err, PriceError::InvalidResponse { .. }));
    }

    #[test]
    fn missing_error_code_is_invalid_response() {
        let err = parse_price_response(
            "<Servicos><cServico><Valor>10,00</Valor></cServico></Servicos>",
        )
        .unwrap_err();
        assert!(matches!(err, PriceError::InvalidResponse { .. }));
    }

    #[test]
    fn success_without_price_is_invalid_response() {
        let err = parse_price_response(
            "<Servicos><cServico><Erro>0</Erro><Valor></Valor></cServico></Servicos>",
        )
        .unwrap_err();
        assert!(matches!(err, PriceError::InvalidResponse { .. }));
    }

    #[test]
    fn unparsable_price_is_invalid_response() {
        let err = parse_price_response(&reply("dez reais", "0", "")).unwrap_err();
        assert!(matches!(err, PriceError::InvalidResponse { .. }));
    }
}
