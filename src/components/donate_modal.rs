use std::rc::Rc;

use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::clipboard;
use crate::components::PaymentTile;
use crate::config::DonateConfig;
use crate::dialog::{CopyLabel, DonationDialog, Ticket};
use crate::directory::{PaymentDirectory, PaymentMethod};
use crate::error::ClipboardError;

#[derive(Properties, PartialEq)]
pub struct DonateModalProps {
    pub directory: Rc<PaymentDirectory>,
    pub config: Rc<DonateConfig>,
    /// Host page control that opens the dialog
    pub trigger: Element,
}

pub enum DonateModalMsg {
    Open,
    Close,
    Select(PaymentMethod),
    FinishClose(Ticket),
    Copy,
    Copied,
    CopyFailed(ClipboardError),
    RestoreCopyLabel(Ticket),
}

pub struct DonateModal {
    dialog: DonationDialog,
    backdrop_ref: NodeRef,
    _trigger_listener: EventListener,
}

fn listen_trigger(ctx: &Context<DonateModal>) -> EventListener {
    let link = ctx.link().clone();
    EventListener::new(&ctx.props().trigger, "click", move |e| {
        e.prevent_default();
        link.send_message(DonateModalMsg::Open);
    })
}

/// Delivers `msg` after `delay_ms`. Timers are never cancelled; the ticket in
/// the message decides whether it still applies.
fn schedule(ctx: &Context<DonateModal>, delay_ms: u32, msg: DonateModalMsg) {
    let link = ctx.link().clone();
    Timeout::new(delay_ms, move || link.send_message(msg)).forget();
}

impl Component for DonateModal {
    type Message = DonateModalMsg;
    type Properties = DonateModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            dialog: DonationDialog::new(props.directory.clone(), &props.config),
            backdrop_ref: NodeRef::default(),
            _trigger_listener: listen_trigger(ctx),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.trigger != old_props.trigger {
            self._trigger_listener = listen_trigger(ctx);
        }
        if props.directory != old_props.directory || props.config != old_props.config {
            self.dialog = DonationDialog::new(props.directory.clone(), &props.config);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DonateModalMsg::Open => {
                self.dialog.open();
                log::debug!("Donation dialog: {:?}", self.dialog.state());
                true
            }
            DonateModalMsg::Close => {
                let ticket = self.dialog.close();
                log::debug!("Donation dialog: {:?}", self.dialog.state());
                schedule(ctx, ctx.props().config.reset_delay_ms, DonateModalMsg::FinishClose(ticket));
                true
            }
            DonateModalMsg::Select(method) => {
                self.dialog.select_method(method);
                true
            }
            DonateModalMsg::FinishClose(ticket) => self.dialog.finish_close(ticket),
            DonateModalMsg::Copy => {
                if let Some(text) = self.dialog.copy_payload() {
                    let text = text.to_string();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match clipboard::write_text(&text).await {
                            Ok(()) => link.send_message(DonateModalMsg::Copied),
                            Err(e) => link.send_message(DonateModalMsg::CopyFailed(e)),
                        }
                    });
                }
                false
            }
            DonateModalMsg::Copied => {
                let ticket = self.dialog.copy_succeeded();
                schedule(ctx, ctx.props().config.copied_feedback_ms, DonateModalMsg::RestoreCopyLabel(ticket));
                true
            }
            DonateModalMsg::CopyFailed(e) => {
                self.dialog.copy_failed(&e);
                false
            }
            DonateModalMsg::RestoreCopyLabel(ticket) => self.dialog.restore_copy_label(ticket),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let dialog = &self.dialog;
        let link = ctx.link();

        // Only clicks on the backdrop itself close; clicks inside the content bubble up here too
        let on_backdrop = {
            let backdrop_ref = self.backdrop_ref.clone();
            link.batch_callback(move |e: MouseEvent| {
                let target = e.target_dyn_into::<Element>();
                (target.is_some() && target == backdrop_ref.cast::<Element>()).then_some(DonateModalMsg::Close)
            })
        };
        let on_close = link.callback(|_: MouseEvent| DonateModalMsg::Close);
        let on_select = link.callback(DonateModalMsg::Select);
        let on_copy = link.callback(|_: MouseEvent| DonateModalMsg::Copy);

        let selection = dialog.selection();
        let title = selection.map_or("Payment Information", |s| s.title);
        let info = selection.map(|s| s.info.clone()).unwrap_or_default();
        let image = match selection.and_then(|s| s.image_url.clone()) {
            Some(src) => html! { <img class="donate-qr-code" {src} alt="QR Code" /> },
            None => html! {},
        };
        let copy_label = dialog.copy_label();
        let copy_icon = match copy_label {
            CopyLabel::Idle => IconId::LucideCopy,
            CopyLabel::Copied => IconId::LucideCheck,
        };

        html! {
            <div class={classes!("donate-modal", dialog.is_visible().then_some("show"))} ref={self.backdrop_ref.clone()} onclick={on_backdrop}>
                <div class="donate-container">
                    <div class="donate-decoration donate-decoration-1"></div>
                    <div class="donate-decoration donate-decoration-2"></div>

                    <div class="donate-header">
                        <h2 class="donate-title">{"Support This Project"}</h2>
                        <button class="donate-close" type="button" title="Close" onclick={on_close}>
                            <Icon icon_id={IconId::LucideX} width={"20"} height={"20"} />
                        </button>
                    </div>

                    <div class="donate-content">
                        <p class="donate-description">
                            {"Thank you for considering a donation! Your support helps keep this tool free and allows for continued development and improvements."}
                        </p>

                        <div class="donate-methods">
                            { for dialog.methods().iter().map(|&method| html! {
                                <PaymentTile key={method.as_str()} {method} active={dialog.is_active(method)} on_select={on_select.clone()} />
                            }) }
                        </div>

                        <div class={classes!("donate-qr-container", dialog.panel_shown().then_some("show"))}>
                            {image}
                            <h3 class="donate-qr-title">{title}</h3>
                            <div class="donate-qr-info">{info}</div>
                            <button class="donate-copy-btn" type="button" onclick={on_copy}>
                                <Icon icon_id={copy_icon} width={"16"} height={"16"} />
                                {" "}{copy_label.text()}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        }
    }
}
