//! Profile and contact links in the page footer, filled from the directory.

use web_sys::Element;

use crate::directory::PaymentDirectory;
use crate::host::SocialLinks;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialLink {
    Github,
    Twitter,
    Email,
}

impl SocialLink {
    pub fn key(self) -> &'static str {
        match self {
            SocialLink::Github => "github",
            SocialLink::Twitter => "twitter",
            SocialLink::Email => "email",
        }
    }

    pub fn href(self, text: &str) -> String {
        match self {
            SocialLink::Email => format!("mailto:{text}"),
            SocialLink::Github | SocialLink::Twitter => text.to_string(),
        }
    }

    /// Profile links open in a new tab
    pub fn opens_new_tab(self) -> bool {
        !matches!(self, SocialLink::Email)
    }
}

/// Attributes to set on `link`'s element, or `None` when the directory has
/// nothing usable for it
pub fn link_attributes(link: SocialLink, directory: &PaymentDirectory) -> Option<Vec<(&'static str, String)>> {
    if !directory.contains(link.key()) {
        return None;
    }
    let text = directory.resolve(link.key())?;
    let mut attributes = vec![("href", link.href(&text))];
    if link.opens_new_tab() {
        attributes.push(("target", "_blank".to_string()));
        attributes.push(("rel", "noopener noreferrer".to_string()));
    }
    Some(attributes)
}

fn apply(element: &Element, link: SocialLink, directory: &PaymentDirectory) {
    let Some(attributes) = link_attributes(link, directory) else { return };
    for (name, value) in attributes {
        if let Err(e) = element.set_attribute(name, &value) {
            log::error!("Error setting up {} link: {e:?}", link.key());
            return;
        }
    }
}

pub fn setup_social_links(links: &SocialLinks, directory: &PaymentDirectory) {
    let slots = [
        (links.github.as_ref(), SocialLink::Github),
        (links.twitter.as_ref(), SocialLink::Twitter),
        (links.email.as_ref(), SocialLink::Email),
    ];
    for (element, link) in slots {
        if let Some(element) = element {
            apply(element, link, directory);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs() {
        let dir = PaymentDirectory::embedded().unwrap();
        let email = dir.resolve(SocialLink::Email.key()).unwrap();
        assert_eq!(SocialLink::Email.href(&email), "mailto:justttq@gmail.com");
        let twitter = dir.resolve(SocialLink::Twitter.key()).unwrap();
        assert_eq!(SocialLink::Twitter.href(&twitter), "https://twitter.com/justttq");
    }

    #[test]
    fn profile_links_open_in_new_tab() {
        let dir = PaymentDirectory::embedded().unwrap();
        let attrs = link_attributes(SocialLink::Github, &dir).unwrap();
        assert_eq!(
            attrs,
            vec![
                ("href", "https://github.com/sponsors/justttq".to_string()),
                ("target", "_blank".to_string()),
                ("rel", "noopener noreferrer".to_string()),
            ]
        );
    }

    #[test]
    fn email_link_only_sets_href() {
        let dir = PaymentDirectory::embedded().unwrap();
        assert_eq!(
            link_attributes(SocialLink::Email, &dir),
            Some(vec![("href", "mailto:justttq@gmail.com".to_string())])
        );
    }

    #[test]
    fn missing_entry_sets_nothing() {
        let dir = PaymentDirectory::default();
        for link in [SocialLink::Github, SocialLink::Twitter, SocialLink::Email] {
            assert_eq!(link_attributes(link, &dir), None);
        }
    }

    #[test]
    fn only_profiles_open_new_tab() {
        assert!(SocialLink::Github.opens_new_tab());
        assert!(SocialLink::Twitter.opens_new_tab());
        assert!(!SocialLink::Email.opens_new_tab());
    }
}
