use dioxus::prelude::*;

/// Dimmed overlay that centers its child card. Clicking the backdrop closes;
/// clicks inside the card stay inside.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}
