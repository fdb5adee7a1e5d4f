//! Per-carton price requests and their calculator URLs.
//!
//! ## Query parameters, in order
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | `nCdEmpresa` | contract company code (may be empty) |
//! | `sDsSenha` | contract password (may be empty) |
//! | `sCepOrigem` / `sCepDestino` | 8-digit postal codes |
//! | `nVlPeso` | weight, kg |
//! | `nCdFormato` | `1` (box) |
//! | `nVlComprimento` / `nVlAltura` / `nVlLargura` | length / height / width, cm |
//! | `sCdMaoPropria` | hand delivery, `s`/`n` |
//! | `nVlValorDeclarado` | declared value |
//! | `sCdAvisoRecebimento` | receipt notice, `s`/`n` |
//! | `nCdServico` | service code |
//! | `nVlDiametro` | `0` |
//! | `StrRetorno` | `xml` |
//! | `nIndicaCalculo` | `3` (price and delivery time) |

use frete_core::{yes_no, Carton, PostalCode, QuoteOptions, ServiceCode};
use rust_decimal::Decimal;
use serde::Serialize;
use url::Url;

/// Package format code for a box.
const FORMAT_BOX: &str = "1";
/// Ask for both price and delivery time.
const CALCULATION_PRICE_AND_DEADLINE: &str = "3";

/// Decimal places kept for weights (grams) and dimensions.
const QUERY_DECIMAL_PLACES: u32 = 3;

/// Plain decimal for a query parameter: at most three places, no trailing
/// zeros, no binary noise (`0.1 + 0.2` → `"0.3"`, `60.0` → `"60"`).
fn decimal_param(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(d) => d.round_dp(QUERY_DECIMAL_PLACES).normalize().to_string(),
        None => value.to_string(),
    }
}

/// Contract credentials sent with every request.
#[derive(Clone, Copy)]
pub struct Credentials<'a> {
    pub company_code: &'a str,
    pub password: &'a str,
}

impl Credentials<'static> {
    /// No contract: counter prices.
    pub const NONE: Credentials<'static> = Credentials {
        company_code: "",
        password: "",
    };
}

/// Everything the calculator needs to price one carton.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRequest {
    pub origin: PostalCode,
    pub destination: PostalCode,
    pub service: ServiceCode,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub width_cm: f64,
    pub length_cm: f64,
    pub options: QuoteOptions,
}

impl PriceRequest {
    /// Request for a cubic carton: height, width, and length all equal
    /// the carton edge.
    pub fn for_carton(
        origin: &PostalCode,
        destination: &PostalCode,
        service: &ServiceCode,
        options: &QuoteOptions,
        carton: &Carton,
    ) -> Self {
        Self {
            origin: origin.clone(),
            destination: destination.clone(),
            service: service.clone(),
            weight_kg: carton.weight_kg,
            height_cm: carton.edge_cm,
            width_cm: carton.edge_cm,
            length_cm: carton.edge_cm,
            options: options.clone(),
        }
    }
}

/// Build the full calculator URL for `request`. Any query string already
/// on `calculator_url` is replaced.
pub fn build_request_url(calculator_url: &Url, credentials: Credentials<'_>, request: &PriceRequest) -> Url {
    let mut url = calculator_url.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("nCdEmpresa", credentials.company_code)
        .append_pair("sDsSenha", credentials.password)
        .append_pair("sCepOrigem", request.origin.as_str())
        .append_pair("sCepDestino", request.destination.as_str())
        .append_pair("nVlPeso", &decimal_param(request.weight_kg))
        .append_pair("nCdFormato", FORMAT_BOX)
        .append_pair("nVlComprimento", &decimal_param(request.length_cm))
        .append_pair("nVlAltura", &decimal_param(request.height_cm))
        .append_pair("nVlLargura", &decimal_param(request.width_cm))
        .append_pair("sCdMaoPropria", yes_no(request.options.hand_delivery()))
        .append_pair(
            "nVlValorDeclarado",
            &request.options.declared_value().to_string(),
        )
        .append_pair("sCdAvisoRecebimento", yes_no(request.options.receipt_notice()))
        .append_pair("nCdServico", request.service.as_str())
        .append_pair("nVlDiametro", "0")
        .append_pair("StrRetorno", "xml")
        .append_pair("nIndicaCalculo", CALCULATION_PRICE_AND_DEADLINE);
    url
}
