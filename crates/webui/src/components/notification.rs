//! Toast notifications for mutation results.
//!
//! ```rust,ignore
//! let toasts = use_context::<ToastContext>().expect("inside <ToastProvider>");
//! toasts.success("Room created");
//! toasts.error("Delete failed: network error");
//! ```

use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Time in milliseconds before a toast auto-dismisses.
const AUTO_DISMISS_MS: u32 = 5000;

type ToastId = u32;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast-success",
            ToastLevel::Error => "toast-error",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    id: ToastId,
    pub level: ToastLevel,
    pub message: String,
}

/// Context handle for pushing toasts from anywhere under the provider.
#[derive(Clone)]
pub struct ToastContext {
    state: UseStateHandle<Vec<Toast>>,
    next_id: Rc<RefCell<ToastId>>,
}

impl PartialEq for ToastContext {
    fn eq(&self, other: &Self) -> bool {
        *self.state == *other.state
    }
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    fn push(&self, level: ToastLevel, message: String) {
        let id = {
            let mut next_id = self.next_id.borrow_mut();
            let id = *next_id;
            *next_id = next_id.wrapping_add(1);
            id
        };
        let mut toasts = (*self.state).clone();
        toasts.push(Toast { id, level, message });
        self.state.set(toasts);

        let state = self.state.clone();
        Timeout::new(AUTO_DISMISS_MS, move || {
            state.set(state.iter().filter(|t| t.id != id).cloned().collect());
        })
        .forget();
    }

    pub fn dismiss(&self, id: ToastId) {
        self.state
            .set(self.state.iter().filter(|t| t.id != id).cloned().collect());
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_state(Vec::<Toast>::new);
    let next_id = use_mut_ref(|| 0u32);

    let context = ToastContext { state, next_id };

    html! {
        <ContextProvider<ToastContext> context={context.clone()}>
            { props.children.clone() }
            <ToastHost {context} />
        </ContextProvider<ToastContext>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastHostProps {
    context: ToastContext,
}

#[function_component(ToastHost)]
fn toast_host(ToastHostProps { context }: &ToastHostProps) -> Html {
    if context.state.is_empty() {
        return html! {};
    }
    html! {
        <div class="toast-container">
            { for context.state.iter().map(|toast| {
                let id = toast.id;
                let context = context.clone();
                let onclick = Callback::from(move |_| context.dismiss(id));
                html! {
                    <div class={classes!("toast", toast.level.css_class())} key={toast.id}>
                        <span class="toast-message">{ &toast.message }</span>
                        <button class="toast-dismiss" {onclick} aria-label="Dismiss">
                            {"×"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
