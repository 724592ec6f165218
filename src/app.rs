use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::components::DonateModal;
use crate::config::DonateConfig;
use crate::directory::PaymentDirectory;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub directory: Rc<PaymentDirectory>,
    pub config: Rc<DonateConfig>,
    pub trigger: Element,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <DonateModal
            directory={props.directory.clone()}
            config={props.config.clone()}
            trigger={props.trigger.clone()}
        />
    }
}
