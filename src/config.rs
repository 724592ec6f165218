use serde::{Deserialize, Serialize};

use crate::directory::PaymentMethod;
use crate::qr::QrStrategy;

/// Ids of the host page elements the dialog attaches to
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostIds {
    pub trigger: String,
    pub mount: String,
    pub github_link: String,
    pub twitter_link: String,
    pub email_link: String,
}

impl Default for HostIds {
    fn default() -> Self {
        Self {
            trigger: "donateBtn".to_string(),
            mount: "donate-root".to_string(),
            github_link: "githubLink".to_string(),
            twitter_link: "twitterLink".to_string(),
            email_link: "emailLink".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonateConfig {
    /// Tiles in presentation order; the first one is selected on open
    pub methods: Vec<PaymentMethod>,
    pub qr: QrStrategy,
    /// Delay before a closed dialog drops its selection (matches the CSS fade)
    pub reset_delay_ms: u32,
    /// How long the copy button shows its confirmation label
    pub copied_feedback_ms: u32,
    pub debug_logs: bool,
    pub host: HostIds,
}

impl Default for DonateConfig {
    fn default() -> Self {
        Self {
            methods: PaymentMethod::ALL.to_vec(),
            qr: QrStrategy::default(),
            reset_delay_ms: 300,
            copied_feedback_ms: 2000,
            debug_logs: false,
            host: HostIds::default(),
        }
    }
}

impl DonateConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug_logs {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_page_layout() {
        let c = DonateConfig::default();
        assert_eq!(c.methods.first(), Some(&PaymentMethod::Paypal));
        assert_eq!(c.reset_delay_ms, 300);
        assert_eq!(c.copied_feedback_ms, 2000);
        assert_eq!(c.host.trigger, "donateBtn");
        assert!(!c.debug_logs);
        assert_eq!(c.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = DonateConfig::from_json(
            r#"{ "methods": ["github", "momo"], "qr": { "kind": "static_asset", "base_path": "/qr" }, "debug_logs": true }"#,
        )
        .unwrap();
        assert_eq!(c.methods, vec![PaymentMethod::Github, PaymentMethod::Momo]);
        assert_eq!(c.qr, QrStrategy::StaticAsset { base_path: "/qr".into() });
        assert_eq!(c.copied_feedback_ms, 2000);
        assert_eq!(c.host, HostIds::default());
        assert_eq!(c.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert!(DonateConfig::from_json(r#"{ "methods": ["bitcoin"] }"#).is_err());
    }
}
