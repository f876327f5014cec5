use yew::prelude::*;

use crate::model::StatCard;

#[derive(Properties, PartialEq)]
pub struct StatGridProps {
    pub stats: Vec<StatCard>,
}

#[function_component(StatGrid)]
pub fn stat_grid(props: &StatGridProps) -> Html {
    html! {
        <div class="stat-grid">
          { for props.stats.iter().map(|s| html! {
              <div class="card stat">
                <div>
                  <div class="small">{ s.label.clone() }</div>
                  <div class="stat-value">{ s.value.clone() }</div>
                </div>
                <span class={classes!("dot", s.accent.class())}></span>
              </div>
          }) }
        </div>
    }
}
