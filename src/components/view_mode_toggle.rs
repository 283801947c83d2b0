use yew::prelude::*;

use crate::hooks::use_snapshots::ViewMode;

#[derive(Properties, PartialEq)]
pub struct ViewModeToggleProps {
    pub mode: ViewMode,
    pub on_change: Callback<ViewMode>,
}

/// Real-time / History switch.
#[function_component(ViewModeToggle)]
pub fn view_mode_toggle(props: &ViewModeToggleProps) -> Html {
    html! {
        <div class="view-mode-toggle">
            { for ViewMode::all().into_iter().map(|mode| {
                let class = classes!("toggle-button", (mode == props.mode).then_some("active"));
                let on_change = props.on_change.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_change.emit(mode));
                html! {
                    <button type="button" {class} {onclick}>{mode.label()}</button>
                }
            }) }
        </div>
    }
}
