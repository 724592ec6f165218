//! Payment directory: per-method contact and account strings.
//!
//! Entries are stored Base64 encoded. This only keeps the strings out of
//! plain sight in the page source; anybody holding the string can decode it,
//! so it must not be treated as confidential storage.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD as BASE64};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

/// Text shown in place of an entry that fails to decode
pub const DECODE_FALLBACK: &str = "Unable to decrypt information";

/// Accepts entries with or without trailing `=` padding
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

const EMBEDDED_TABLE: &str = include_str!("../static/payment_info.json");

/// Payment methods offered by the dialog, in presentation order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Paypal,
    Momo,
    Vietcombank,
    Github,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Paypal,
        PaymentMethod::Momo,
        PaymentMethod::Vietcombank,
        PaymentMethod::Github,
    ];

    /// Directory key and `data-method` attribute value
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Momo => "momo",
            PaymentMethod::Vietcombank => "vietcombank",
            PaymentMethod::Github => "github",
        }
    }

    /// Name shown under the tile icon
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Momo => "MoMo",
            PaymentMethod::Vietcombank => "Vietcombank",
            PaymentMethod::Github => "GitHub",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| DirectoryError::NotFound(s.to_string()))
    }
}

/// Heading shown above the account text for a method id
pub fn title_for(method: &str) -> &'static str {
    match method {
        "paypal" => "PayPal Email",
        "momo" => "MoMo Number",
        "vietcombank" => "Bank Account",
        "github" => "GitHub Sponsor",
        _ => "Payment Information",
    }
}

/// Reverses the Base64 obfuscation of a directory entry.
pub fn decode(obfuscated: &str) -> Result<String, DirectoryError> {
    let bytes = LENIENT_BASE64
        .decode(obfuscated.trim())
        .map_err(|e| DirectoryError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DirectoryError::Decode(e.to_string()))
}

/// Produces the stored form of a plaintext entry. Not encryption.
pub fn obfuscate(plain: &str) -> String {
    BASE64.encode(plain.as_bytes())
}

/// Immutable id → obfuscated string table
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentDirectory {
    entries: BTreeMap<String, String>,
}

impl PaymentDirectory {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        serde_json::from_str(json).map_err(|e| DirectoryError::Table(e.to_string()))
    }

    /// The table bundled with the page
    pub fn embedded() -> Result<Self, DirectoryError> {
        Self::from_json(EMBEDDED_TABLE)
    }

    pub fn contains(&self, method: &str) -> bool {
        self.entries.contains_key(method)
    }

    pub fn try_resolve(&self, method: &str) -> Result<String, DirectoryError> {
        let obfuscated = self
            .entries
            .get(method)
            .ok_or_else(|| DirectoryError::NotFound(method.to_string()))?;
        decode(obfuscated)
    }

    /// Plaintext for `method`. Unknown ids give `None`; entries that fail to
    /// decode give [`DECODE_FALLBACK`]. Both cases are logged.
    pub fn resolve(&self, method: &str) -> Option<String> {
        match self.try_resolve(method) {
            Ok(text) => Some(text),
            Err(e @ DirectoryError::Decode(_)) => {
                log::error!("{method}: {e}");
                Some(DECODE_FALLBACK.to_string())
            }
            Err(e) => {
                log::error!("{e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> PaymentDirectory {
        PaymentDirectory::embedded().expect("embedded table parses")
    }

    #[test]
    fn embedded_table_has_every_dialog_method() {
        let dir = directory();
        for method in PaymentMethod::ALL {
            assert!(dir.contains(method.as_str()), "missing {method}");
        }
        assert!(dir.contains("twitter"));
        assert!(dir.contains("email"));
    }

    #[test]
    fn resolves_known_entries() {
        let dir = directory();
        assert_eq!(dir.resolve("paypal").as_deref(), Some("example@gmail.com"));
        assert_eq!(dir.resolve("momo").as_deref(), Some("0987654321"));
        assert_eq!(
            dir.resolve("github").as_deref(),
            Some("https://github.com/sponsors/justttq")
        );
    }

    #[test]
    fn decode_reverses_obfuscate_for_directory_strings() {
        let samples = [
            "example@gmail.com",
            "0987654321",
            "1234567890 Vietcombank Nguyen Van A",
            "https://github.com/sponsors/justttq",
            "Nguyễn Văn A",
        ];
        for s in samples {
            assert_eq!(decode(&obfuscate(s)).as_deref(), Ok(s));
        }
    }

    #[test]
    fn decodes_unpadded_entries() {
        assert_eq!(decode("YQ").as_deref(), Ok("a"));
        assert_eq!(decode("MDk4NzY1NDMyMQ").as_deref(), Ok("0987654321"));
        assert_eq!(decode("MDk4NzY1NDMyMQ==").as_deref(), Ok("0987654321"));
    }

    #[test]
    fn unknown_method_resolves_to_none() {
        let dir = directory();
        assert_eq!(dir.resolve("unknown-method"), None);
        assert_eq!(
            dir.try_resolve("unknown-method"),
            Err(DirectoryError::NotFound("unknown-method".into()))
        );
    }

    #[test]
    fn malformed_entry_falls_back() {
        let mut entries = BTreeMap::new();
        entries.insert("paypal".to_string(), "not*base64!".to_string());
        let dir = PaymentDirectory::new(entries);
        assert!(matches!(dir.try_resolve("paypal"), Err(DirectoryError::Decode(_))));
        assert_eq!(dir.resolve("paypal").as_deref(), Some(DECODE_FALLBACK));
    }

    #[test]
    fn non_utf8_payload_falls_back() {
        let mut entries = BTreeMap::new();
        entries.insert("momo".to_string(), BASE64.encode([0xffu8, 0xfe, 0xfd]));
        let dir = PaymentDirectory::new(entries);
        assert_eq!(dir.resolve("momo").as_deref(), Some(DECODE_FALLBACK));
    }

    #[test]
    fn broken_table_is_an_error() {
        assert!(matches!(
            PaymentDirectory::from_json("[1, 2"),
            Err(DirectoryError::Table(_))
        ));
    }

    #[test]
    fn titles() {
        assert_eq!(title_for("paypal"), "PayPal Email");
        assert_eq!(title_for("momo"), "MoMo Number");
        assert_eq!(title_for("vietcombank"), "Bank Account");
        assert_eq!(title_for("github"), "GitHub Sponsor");
        assert_eq!(title_for("twitter"), "Payment Information");
    }

    #[test]
    fn method_ids_parse() {
        assert_eq!("vietcombank".parse::<PaymentMethod>(), Ok(PaymentMethod::Vietcombank));
        assert!("twitter".parse::<PaymentMethod>().is_err());
    }
}
