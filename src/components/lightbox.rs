use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, KeyboardEvent, PointerEvent, WheelEvent};
use yew::prelude::*;

use crate::config::ControlsConfig;
use crate::dom::{bounding_rect, capture_pointer, release_pointer};
use crate::model::{LightboxAction, LightboxState, key_action};
use crate::state::Direction;
use crate::util::clog;

use super::controls::LightboxControls;

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxProps {
    pub state: UseReducerHandle<LightboxState>,
    pub controls: ControlsConfig,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let state = props.state.clone();
    let overlay_ref = use_node_ref();
    let img_ref = use_node_ref();
    // Mirror of the open state for the native listeners below
    let open_flag = use_mut_ref(|| false);

    {
        let open_flag = open_flag.clone();
        let open = state.is_open();
        use_effect_with(open, move |_| {
            *open_flag.borrow_mut() = open;
            || ()
        });
    }

    // Wheel (non-passive, so scrolling can be suppressed) + keyboard
    {
        let overlay_ref = overlay_ref.clone();
        let img_ref = img_ref.clone();
        let open_flag = open_flag.clone();
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            let wheel_cb = {
                let img_ref = img_ref.clone();
                let open_flag = open_flag.clone();
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: WheelEvent| {
                    if !*open_flag.borrow() {
                        return;
                    }
                    e.prevent_default();
                    let Some(img) = img_ref.cast::<Element>() else {
                        return;
                    };
                    dispatcher.dispatch(LightboxAction::Wheel {
                        delta_y: e.delta_y(),
                        x: e.client_x() as f64,
                        y: e.client_y() as f64,
                        rect: bounding_rect(&img),
                    });
                }) as Box<dyn FnMut(_)>)
            };
            let keydown_cb = {
                let open_flag = open_flag.clone();
                let dispatcher = dispatcher.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if !*open_flag.borrow() {
                        return;
                    }
                    if let Some(action) = key_action(&e.key()) {
                        e.prevent_default();
                        dispatcher.dispatch(action);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let overlay = overlay_ref.cast::<Element>();
            if let Some(overlay) = &overlay {
                overlay
                    .add_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref())
                    .ok();
            }
            let window = web_sys::window();
            if let Some(window) = &window {
                window
                    .add_event_listener_with_callback("keydown", keydown_cb.as_ref().unchecked_ref())
                    .ok();
            }
            // Cleanup
            move || {
                if let Some(overlay) = &overlay {
                    let _ = overlay.remove_event_listener_with_callback(
                        "wheel",
                        wheel_cb.as_ref().unchecked_ref(),
                    );
                }
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        keydown_cb.as_ref().unchecked_ref(),
                    );
                }
                let _keep_alive = (&wheel_cb, &keydown_cb);
            }
        });
    }

    let Some(entry) = state.current().cloned() else {
        return html! {};
    };

    // Backdrop click closes; clicks on the image or controls have another target
    let on_backdrop = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                state.dispatch(LightboxAction::Close);
            }
        })
    };
    let on_image_click = {
        let state = state.clone();
        let img_ref = img_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(img) = img_ref.cast::<Element>() else {
                return;
            };
            state.dispatch(LightboxAction::ImageClick {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
                rect: bounding_rect(&img),
            });
        })
    };
    let on_pointer_down = {
        let state = state.clone();
        let img_ref = img_ref.clone();
        Callback::from(move |e: PointerEvent| {
            if !state.viewport.is_magnified() {
                return;
            }
            if let Some(img) = img_ref.cast::<Element>() {
                if let Err(err) = capture_pointer(&img, e.pointer_id()) {
                    clog(&err.to_string());
                }
            }
            state.dispatch(LightboxAction::PointerDown {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            });
        })
    };
    let on_pointer_move = {
        let state = state.clone();
        Callback::from(move |e: PointerEvent| {
            state.dispatch(LightboxAction::PointerMove {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            });
        })
    };
    let on_pointer_up = {
        let state = state.clone();
        let img_ref = img_ref.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(img) = img_ref.cast::<Element>() {
                if let Err(err) = release_pointer(&img, e.pointer_id()) {
                    clog(&err.to_string());
                }
            }
            state.dispatch(LightboxAction::PointerUp);
        })
    };
    let on_pointer_cancel = {
        let state = state.clone();
        Callback::from(move |_: PointerEvent| state.dispatch(LightboxAction::PointerCancel))
    };
    let on_drag_start = Callback::from(|e: DragEvent| e.prevent_default());
    let on_load = {
        let state = state.clone();
        Callback::from(move |_: Event| state.dispatch(LightboxAction::ImageLoaded))
    };

    let dispatch_cb = |action: LightboxAction| {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(action.clone()))
    };
    let controls = props.controls;
    let on_prev = controls
        .prev
        .then(|| dispatch_cb(LightboxAction::Show(Direction::Previous)));
    let on_next = controls
        .next
        .then(|| dispatch_cb(LightboxAction::Show(Direction::Next)));
    let on_close = controls.close.then(|| dispatch_cb(LightboxAction::Close));

    let overlay_class = classes!("lightbox", state.is_open().then_some("active"));
    let img_class = classes!(state.viewport.is_magnified().then_some("zoomed"));

    html! {
        <div id="lightbox" class={overlay_class} ref={overlay_ref} onclick={on_backdrop}>
            <img
                id="lightbox-img"
                ref={img_ref}
                class={img_class}
                src={entry.full_src.clone()}
                alt={entry.alt.clone().unwrap_or_default()}
                style={state.image_style()}
                draggable="false"
                onclick={on_image_click}
                onpointerdown={on_pointer_down}
                onpointermove={on_pointer_move}
                onpointerup={on_pointer_up}
                onpointercancel={on_pointer_cancel}
                ondragstart={on_drag_start}
                onload={on_load}
            />
            <LightboxControls {on_prev} {on_next} {on_close} />
        </div>
    }
}
