//! Login page view with usuario/senha form.

use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, Input, Label};
use ui::{use_auth, FieldErrors, Rule};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let toast = use_toast();
    let mut usuario = use_signal(String::new);
    let mut senha = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut loading = use_signal(|| false);

    // If already logged in, go straight to home
    if auth().is_authenticated() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }

        let mut checked = FieldErrors::default();
        checked.check("usuario", &usuario(), &[Rule::Required("Usuário é obrigatório")]);
        checked.check("senha", &senha(), &[Rule::Required("Senha é obrigatória")]);
        errors.set(checked.clone());
        if !checked.is_empty() {
            return;
        }

        spawn(async move {
            loading.set(true);
            match ui::auth::login(auth, &usuario(), &senha()).await {
                Ok(_) => {
                    toast.success("Login realizado com sucesso!");
                    nav.push(Route::Home {});
                }
                Err(message) => {
                    loading.set(false);
                    toast.error(message);
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-container",
            div {
                class: "login-card",
                h1 { class: "login-title", "Comandas" }
                p { class: "login-subtitle", "Acesse com seu usuário e senha" }

                form {
                    onsubmit: handle_login,

                    div {
                        class: "field",
                        Label { html_for: "login-usuario", "Usuário" }
                        Input {
                            id: "login-usuario",
                            r#type: "text",
                            placeholder: "usuário ou CPF",
                            value: usuario(),
                            oninput: move |evt: FormEvent| usuario.set(evt.value()),
                        }
                        if let Some(message) = errors().get("usuario") {
                            p { class: "field-error", "{message}" }
                        }
                    }

                    div {
                        class: "field",
                        Label { html_for: "login-senha", "Senha" }
                        Input {
                            id: "login-senha",
                            r#type: "password",
                            placeholder: "senha",
                            value: senha(),
                            oninput: move |evt: FormEvent| senha.set(evt.value()),
                        }
                        if let Some(message) = errors().get("senha") {
                            p { class: "field-error", "{message}" }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Entrando..." } else { "Entrar" }
                    }
                }
            }
        }
    }
}
