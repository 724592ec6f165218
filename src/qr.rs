//! Display URL for the selected payment method: either a remote
//! chart-service QR image or a pre-generated local asset.

use serde::{Deserialize, Serialize};

use crate::directory::PaymentMethod;

const PAYPAL_EMAIL_SUFFIX: &str = "@gmail.com";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCorrection {
    L,
    M,
    Q,
    H,
}

impl ErrorCorrection {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCorrection::L => "L",
            ErrorCorrection::M => "M",
            ErrorCorrection::Q => "Q",
            ErrorCorrection::H => "H",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QrStrategy {
    /// Image rendered on demand by a chart endpoint
    RemoteChart {
        endpoint: String,
        size: u32,
        error_correction: ErrorCorrection,
        margin: u32,
    },
    /// One image per method under `base_path`
    StaticAsset { base_path: String },
}

impl Default for QrStrategy {
    fn default() -> Self {
        QrStrategy::RemoteChart {
            endpoint: "https://chart.googleapis.com/chart".to_string(),
            size: 200,
            error_correction: ErrorCorrection::M,
            margin: 0,
        }
    }
}

/// What the QR code should encode for a method's plaintext
pub fn qr_payload(method: &str, text: &str) -> String {
    match method {
        "paypal" => {
            let handle = text.strip_suffix(PAYPAL_EMAIL_SUFFIX).unwrap_or(text);
            format!("https://www.paypal.com/paypalme/{handle}")
        }
        "momo" => format!("momo://app?action=transfer&phone={text}"),
        _ => text.to_string(),
    }
}

/// Builds the image URL for `method`. `None` means there is no image to show.
pub fn display_url(strategy: &QrStrategy, method: &str, text: &str) -> Option<String> {
    match strategy {
        QrStrategy::RemoteChart { endpoint, size, error_correction, margin } => {
            let payload = urlencoding::encode(&qr_payload(method, text)).into_owned();
            Some(format!(
                "{endpoint}?cht=qr&chs={size}x{size}&chld={}%7C{margin}&choe=UTF-8&chl={payload}",
                error_correction.as_str()
            ))
        }
        QrStrategy::StaticAsset { base_path } => {
            let method: PaymentMethod = method.parse().ok()?;
            Some(format!("{}/{}.png", base_path.trim_end_matches('/'), method.as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_payload(url: &str) -> &str {
        url.split_once("&chl=").map(|(_, p)| p).unwrap_or_default()
    }

    #[test]
    fn paypal_payload_drops_mail_suffix() {
        assert_eq!(
            qr_payload("paypal", "example@gmail.com"),
            "https://www.paypal.com/paypalme/example"
        );
        // Other domains are kept as they are
        assert_eq!(
            qr_payload("paypal", "me@example.org"),
            "https://www.paypal.com/paypalme/me@example.org"
        );
    }

    #[test]
    fn momo_payload_is_a_deep_link() {
        assert_eq!(
            qr_payload("momo", "0987654321"),
            "momo://app?action=transfer&phone=0987654321"
        );
    }

    #[test]
    fn other_payloads_are_unchanged() {
        assert_eq!(qr_payload("github", "https://github.com/sponsors/x"), "https://github.com/sponsors/x");
        assert_eq!(qr_payload("vietcombank", "1234 VCB"), "1234 VCB");
    }

    #[test]
    fn remote_url_percent_encodes_payload() {
        let strategy = QrStrategy::default();
        for (method, text) in [
            ("paypal", "me@example.org"),
            ("momo", "0987654321"),
            ("vietcombank", "1234567890 Vietcombank Nguyen Van A"),
            ("github", "https://github.com/sponsors/justttq"),
        ] {
            let url = display_url(&strategy, method, text).unwrap();
            assert!(url.starts_with("https://chart.googleapis.com/chart?cht=qr&chs=200x200&chld=M%7C0"));
            let payload = query_payload(&url);
            assert!(!payload.is_empty());
            for c in ['@', ' ', '/', ':', '&', '?'] {
                assert!(!payload.contains(c), "{method}: raw {c:?} in {payload}");
            }
        }
    }

    #[test]
    fn remote_url_decodes_back_to_payload() {
        let url = display_url(&QrStrategy::default(), "momo", "0987654321").unwrap();
        let decoded = urlencoding::decode(query_payload(&url)).unwrap();
        assert_eq!(decoded, "momo://app?action=transfer&phone=0987654321");
    }

    #[test]
    fn static_assets_per_method() {
        let strategy = QrStrategy::StaticAsset { base_path: "static/images/qr/".into() };
        assert_eq!(
            display_url(&strategy, "vietcombank", "ignored").as_deref(),
            Some("static/images/qr/vietcombank.png")
        );
        assert_eq!(display_url(&strategy, "twitter", "x"), None);
    }
}
