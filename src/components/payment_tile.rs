use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::directory::PaymentMethod;

#[derive(Properties, PartialEq)]
pub struct PaymentTileProps {
    pub method: PaymentMethod,
    pub active: bool,
    pub on_select: Callback<PaymentMethod>,
}

fn icon_for(method: PaymentMethod) -> IconId {
    match method {
        PaymentMethod::Paypal => IconId::LucideCreditCard,
        PaymentMethod::Momo => IconId::LucideSmartphone,
        PaymentMethod::Vietcombank => IconId::LucideBuilding,
        PaymentMethod::Github => IconId::LucideGithub,
    }
}

#[function_component(PaymentTile)]
pub fn payment_tile(props: &PaymentTileProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        let method = props.method;
        Callback::from(move |_: MouseEvent| on_select.emit(method))
    };

    html! {
        <div class={classes!("donate-method", props.active.then_some("active"))} data-method={props.method.as_str()} {onclick}>
            <div class="donate-method-icon">
                <Icon icon_id={icon_for(props.method)} width={"28"} height={"28"} />
            </div>
            <div class="donate-method-name">{props.method.label()}</div>
        </div>
    }
}
