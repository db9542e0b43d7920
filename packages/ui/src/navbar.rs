use dioxus::prelude::*;

use crate::COMANDAS_CSS;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: COMANDAS_CSS }
        nav {
            class: "navbar",
            {children}
        }
    }
}
