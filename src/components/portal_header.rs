use yew::prelude::*;

use super::Brand;
use crate::model::Accent;

#[derive(Properties, PartialEq)]
pub struct PortalHeaderProps {
    pub brand: AttrValue,
    pub portal: AttrValue,
    pub accent: Accent,
    pub on_logout: Callback<MouseEvent>,
}

/// Dashboard top bar. Bell and settings are decorative.
#[function_component(PortalHeader)]
pub fn portal_header(props: &PortalHeaderProps) -> Html {
    html! {
        <header class="portal-header">
          <div class="row">
            <Brand name={props.brand.clone()} />
            <span class={classes!("pill", props.accent.class())}>{ props.portal.clone() }</span>
          </div>
          <div class="row">
            <button class="icon-btn" title="Notifications">{ "🔔" }</button>
            <button class="icon-btn" title="Settings">{ "⚙" }</button>
            <button class="ghost" onclick={props.on_logout.clone()}>{ "Logout" }</button>
          </div>
        </header>
    }
}
