use yew::prelude::*;

use crate::state::toast::ToastState;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: ToastState,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let toast = &props.toast;

    html! {
        <div
            id="toast"
            class={classes!("toast", toast.severity.class(), toast.is_visible().then(|| "show"))}
            role="status"
            aria-live="polite"
        >
            <span id="toastMsg">
                <strong>{toast.severity.icon()}</strong>
                {" "}
                {toast.message.clone()}
            </span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub visible: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    html! {
        <button
            id="backToTop"
            class={classes!("back-to-top", props.visible.then(|| "visible"))}
            aria-label="Back to top"
            onclick={props.onclick.clone()}
        >
            {"↑"}
        </button>
    }
}
