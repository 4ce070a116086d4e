use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Element;
use yew::prelude::*;

use super::lightbox::Lightbox;
use crate::config::LightboxConfig;
use crate::dom::Page;
use crate::model::{LightboxAction, LightboxState};

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub page: Page,
    pub config: LightboxConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_reducer({
        let entries = props.page.entries.clone();
        let limits = props.config.zoom;
        move || LightboxState::new(entries, limits)
    });

    // Thumbnails live in the page markup, outside this component tree
    {
        let thumbnails = props.page.thumbnails.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let listeners: Vec<(Element, Closure<dyn FnMut(MouseEvent)>)> = thumbnails
                .iter()
                .enumerate()
                .filter_map(|(index, el)| {
                    let dispatcher = dispatcher.clone();
                    let cb = Closure::wrap(Box::new(move |e: MouseEvent| {
                        // keep the enclosing link from navigating away
                        e.prevent_default();
                        dispatcher.dispatch(LightboxAction::Open { index });
                    }) as Box<dyn FnMut(_)>);
                    el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
                        .ok()?;
                    Some((el.clone(), cb))
                })
                .collect();
            move || {
                for (el, cb) in &listeners {
                    let _ = el.remove_event_listener_with_callback(
                        "click",
                        cb.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    html! { <Lightbox state={state.clone()} controls={props.config.controls} /> }
}
