use yew::prelude::*;

use crate::model::SummaryRow;

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub title: AttrValue,
    pub rows: Vec<SummaryRow>,
    #[prop_or_default]
    pub footnote: Option<AttrValue>,
}

#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    html! {
        <div class="card summary">
          <h3>{ props.title.clone() }</h3>
          { for props.rows.iter().map(|r| html! {
              <div class="summary-row">
                <span>{ r.label.clone() }</span>
                <b>{ r.value.clone() }</b>
              </div>
          }) }
          if let Some(note) = props.footnote.clone() {
            <>
              <hr />
              <p class="small">{ note }</p>
            </>
          }
        </div>
    }
}
