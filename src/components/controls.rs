use yew::prelude::*;

/// Optional overlay controls; a `None` control is not rendered at all.
#[derive(Properties, PartialEq, Clone)]
pub struct LightboxControlsProps {
    #[prop_or_default]
    pub on_prev: Option<Callback<()>>,
    #[prop_or_default]
    pub on_next: Option<Callback<()>>,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

fn control(cb: &Option<Callback<()>>, class: &'static str, label: &'static str, glyph: &'static str) -> Html {
    match cb {
        Some(cb) => {
            let cb = cb.clone();
            let onclick = Callback::from(move |_: MouseEvent| cb.emit(()));
            html! { <button type="button" {class} aria-label={label} {onclick}>{ glyph }</button> }
        }
        None => html! {},
    }
}

#[function_component(LightboxControls)]
pub fn lightbox_controls(props: &LightboxControlsProps) -> Html {
    html! {
        <>
            { control(&props.on_close, "close", "Close", "×") }
            { control(&props.on_prev, "prev", "Previous image", "‹") }
            { control(&props.on_next, "next", "Next image", "›") }
        </>
    }
}
