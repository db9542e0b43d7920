//! Landing page after login.

use dioxus::prelude::*;
use ui::use_auth;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let today = current_date();

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-toolbar",
                h1 { class: "view-title", "Home" }
            }
            div {
                class: "home-card",
                p { "Bem-vindo ao aplicativo Comandas!" }
                p { class: "view-muted", "Explore as funcionalidades e aproveite sua experiência." }
                p { class: "view-muted", "Data atual: {today}" }

                if let Some(info) = auth().usuario_info {
                    p { "Usuário: {info.usuario}" }
                    p { "Grupo: {info.grupo.label()}" }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_date() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:02}/{:02}/{}",
        date.get_date(),
        date.get_month() + 1,
        date.get_full_year()
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn current_date() -> String {
    "--/--/----".to_string()
}
