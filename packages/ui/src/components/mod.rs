//! Small form and feedback components shared by every view.

use dioxus::prelude::*;

mod modal;
pub use modal::ModalOverlay;

mod toast;
pub use toast::{use_toast, ToastKind, ToastProvider, Toasts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Destructive,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Destructive => "btn btn-destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[props(default = String::new())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    let type_attr = r#type;
    rsx! {
        button {
            class: "{variant_class} {class}",
            r#type: "{type_attr}",
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
    #[props(default)] onblur: EventHandler<FocusEvent>,
) -> Element {
    let type_attr = r#type;
    rsx! {
        input {
            id: "{id}",
            class: "input {class}",
            r#type: "{type_attr}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled,
            oninput: move |evt| oninput.call(evt),
            onblur: move |evt| onblur.call(evt),
        }
    }
}

#[component]
pub fn Label(
    #[props(default = String::new())] html_for: String,
    children: Element,
) -> Element {
    rsx! {
        label {
            class: "label",
            r#for: "{html_for}",
            {children}
        }
    }
}

#[component]
pub fn Select(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = String::new())] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] onchange: EventHandler<FormEvent>,
    children: Element,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "select {class}",
            value: "{value}",
            disabled,
            onchange: move |evt| onchange.call(evt),
            {children}
        }
    }
}
