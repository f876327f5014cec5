mod portal_header;
mod stat_grid;
mod summary_panel;

pub use portal_header::PortalHeader;
pub use stat_grid::StatGrid;
pub use summary_panel::SummaryPanel;

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BrandProps {
    pub name: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Brand)]
pub fn brand(props: &BrandProps) -> Html {
    html! {
        <div class={classes!("brand", props.class.clone())}>
            <span class="brand-heart">{ "♥" }</span>
            <span class="brand-name">{ props.name.clone() }</span>
        </div>
    }
}
