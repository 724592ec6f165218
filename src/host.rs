//! Elements of the host page, looked up once at start-up.

use web_sys::{Document, Element};

use crate::config::HostIds;
use crate::error::HostError;

fn document() -> Result<Document, HostError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(HostError::NoDocument)
}

fn required(document: &Document, id: &str) -> Result<Element, HostError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| HostError::MissingElement(id.to_string()))
}

fn optional(document: &Document, id: &str) -> Option<Element> {
    let element = document.get_element_by_id(id);
    if element.is_none() {
        log::debug!("Optional element #{id} not on this page");
    }
    element
}

/// What the dialog cannot work without
pub struct HostPage {
    /// Control that opens the dialog
    pub trigger: Element,
    /// Element the dialog is rendered into
    pub mount: Element,
}

impl HostPage {
    pub fn capture(ids: &HostIds) -> Result<Self, HostError> {
        let document = document()?;
        Ok(Self {
            trigger: required(&document, &ids.trigger)?,
            mount: required(&document, &ids.mount)?,
        })
    }
}

pub struct SocialLinks {
    pub github: Option<Element>,
    pub twitter: Option<Element>,
    pub email: Option<Element>,
}

impl SocialLinks {
    pub fn capture(ids: &HostIds) -> Result<Self, HostError> {
        let document = document()?;
        Ok(Self {
            github: optional(&document, &ids.github_link),
            twitter: optional(&document, &ids.twitter_link),
            email: optional(&document, &ids.email_link),
        })
    }
}

/// Inline JSON configuration, if the page carries one
pub fn config_json(id: &str) -> Option<String> {
    document().ok()?.get_element_by_id(id)?.text_content()
}
