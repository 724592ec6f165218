//! Interaction state of the donation dialog, kept apart from the DOM so the
//! component only renders what this model says.

use std::rc::Rc;

use crate::config::DonateConfig;
use crate::directory::{title_for, PaymentDirectory, PaymentMethod, DECODE_FALLBACK};
use crate::error::{ClipboardError, DirectoryError};
use crate::qr::{display_url, QrStrategy};

/// Identifies one scheduled deferred effect. Only the latest ticket of each
/// kind is honoured when its timer fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    pub method: PaymentMethod,
    pub title: &'static str,
    pub info: String,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DialogState<'a> {
    Closed,
    OpenNoSelection,
    OpenWithSelection(&'a Selection),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyLabel {
    Idle,
    Copied,
}

impl CopyLabel {
    pub fn text(self) -> &'static str {
        match self {
            CopyLabel::Idle => "Copy Info",
            CopyLabel::Copied => "Copied!",
        }
    }
}

pub struct DonationDialog {
    directory: Rc<PaymentDirectory>,
    methods: Vec<PaymentMethod>,
    qr: QrStrategy,
    visible: bool,
    active: Option<PaymentMethod>,
    selection: Option<Selection>,
    panel_shown: bool,
    pending_reset: Option<Ticket>,
    copy_feedback: Option<Ticket>,
    next_ticket: u64,
}

/// Drops repeated methods, keeping first-seen order, so each tile is unique.
fn unique_methods(methods: &[PaymentMethod]) -> Vec<PaymentMethod> {
    let mut unique = Vec::with_capacity(methods.len());
    for &method in methods {
        if unique.contains(&method) {
            log::warn!("Payment method {method} listed more than once; ignoring the repeat");
        } else {
            unique.push(method);
        }
    }
    unique
}

impl DonationDialog {
    pub fn new(directory: Rc<PaymentDirectory>, config: &DonateConfig) -> Self {
        Self {
            directory,
            methods: unique_methods(&config.methods),
            qr: config.qr.clone(),
            visible: false,
            active: None,
            selection: None,
            panel_shown: false,
            pending_reset: None,
            copy_feedback: None,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> DialogState<'_> {
        match (self.visible, &self.selection) {
            (false, _) => DialogState::Closed,
            (true, None) => DialogState::OpenNoSelection,
            (true, Some(s)) => DialogState::OpenWithSelection(s),
        }
    }

    pub fn methods(&self) -> &[PaymentMethod] {
        &self.methods
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_active(&self, method: PaymentMethod) -> bool {
        self.active == Some(method)
    }

    pub fn active(&self) -> Option<PaymentMethod> {
        self.active
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn panel_shown(&self) -> bool {
        self.panel_shown
    }

    pub fn copy_label(&self) -> CopyLabel {
        if self.copy_feedback.is_some() {
            CopyLabel::Copied
        } else {
            CopyLabel::Idle
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    /// Shows the dialog and selects the first configured method.
    pub fn open(&mut self) {
        self.visible = true;
        // a reset still in flight from an earlier close must not wipe this session
        self.pending_reset = None;
        match self.methods.first().copied() {
            Some(first) => self.select_method(first),
            None => log::warn!("Donation dialog opened with no payment methods configured"),
        }
    }

    /// Activates `method`'s tile and shows its details. Lookup failures are
    /// logged; the dialog keeps whatever it was showing before.
    pub fn select_method(&mut self, method: PaymentMethod) {
        self.active = Some(method);

        let id = method.as_str();
        let info = match self.directory.try_resolve(id) {
            Ok(text) => text,
            Err(e @ DirectoryError::NotFound(_)) => {
                log::error!("{e}");
                return;
            }
            Err(e) => {
                log::error!("Error showing payment details: {e}");
                DECODE_FALLBACK.to_string()
            }
        };

        let image_url = display_url(&self.qr, id, &info);
        log::debug!("Selected {id}, image: {image_url:?}");
        self.selection = Some(Selection { method, title: title_for(id), info, image_url });
        self.panel_shown = true;
    }

    /// Hides the dialog. Selection is kept until [`finish_close`] runs with
    /// the returned ticket so the fade-out does not flash an empty dialog.
    ///
    /// [`finish_close`]: DonationDialog::finish_close
    pub fn close(&mut self) -> Ticket {
        self.visible = false;
        let ticket = self.issue_ticket();
        self.pending_reset = Some(ticket);
        ticket
    }

    /// Applies the deferred reset. Returns false for stale tickets.
    pub fn finish_close(&mut self, ticket: Ticket) -> bool {
        if self.visible || self.pending_reset != Some(ticket) {
            log::debug!("Skipping stale reset {ticket:?}");
            return false;
        }
        self.pending_reset = None;
        self.active = None;
        self.selection = None;
        self.panel_shown = false;
        true
    }

    /// Text the copy button should place on the clipboard.
    pub fn copy_payload(&self) -> Option<&str> {
        self.selection.as_ref().map(|s| s.info.as_str())
    }

    pub fn copy_succeeded(&mut self) -> Ticket {
        let ticket = self.issue_ticket();
        self.copy_feedback = Some(ticket);
        ticket
    }

    pub fn copy_failed(&self, err: &ClipboardError) {
        log::error!("{err}");
    }

    /// Restores the copy label. Returns false for stale tickets.
    pub fn restore_copy_label(&mut self, ticket: Ticket) -> bool {
        if self.copy_feedback != Some(ticket) {
            return false;
        }
        self.copy_feedback = None;
        true
    }
}
