//! Donation dialog widget: payment-method tiles, a QR code and copyable
//! account text for the selected method.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod dialog;
pub mod directory;
pub mod error;
pub mod host;
pub mod logger;
pub mod qr;
pub mod social;

use std::rc::Rc;

use app::{App, AppProps};
use config::DonateConfig;
use directory::PaymentDirectory;
use host::{HostPage, SocialLinks};

/// Optional `<script type="application/json">` holding a `DonateConfig`
const CONFIG_ELEMENT_ID: &str = "donateConfig";

fn load_config() -> DonateConfig {
    let Some(json) = host::config_json(CONFIG_ELEMENT_ID) else {
        return DonateConfig::default();
    };
    DonateConfig::from_json(&json).unwrap_or_else(|e| {
        log::warn!("Ignoring #{CONFIG_ELEMENT_ID}: {e}");
        DonateConfig::default()
    })
}

fn load_directory() -> PaymentDirectory {
    PaymentDirectory::embedded().unwrap_or_else(|e| {
        log::error!("{e}");
        PaymentDirectory::default()
    })
}

/// Wires the dialog into the current page.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(e) = logger::init(log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("Logger already set: {e}").into());
    }

    let config = load_config();
    log::set_max_level(config.log_level());
    let directory = load_directory();

    match SocialLinks::capture(&config.host) {
        Ok(links) => social::setup_social_links(&links, &directory),
        Err(e) => log::error!("Error setting up social links: {e}"),
    }

    let host = match HostPage::capture(&config.host) {
        Ok(host) => host,
        Err(e) => {
            log::error!("Donation dialog not mounted: {e}");
            return;
        }
    };

    let props = AppProps {
        directory: Rc::new(directory),
        config: Rc::new(config),
        trigger: host.trigger,
    };
    yew::Renderer::<App>::with_root_and_props(host.mount, props).render();
}
