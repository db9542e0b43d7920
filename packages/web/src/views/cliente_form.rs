//! Cliente form: create, edit and read-only view over the same fields.

use api::Cliente;
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, Input, Label};
use ui::mask::digits;
use ui::{optional, FieldErrors, FormMode, Rule};

use crate::Route;

/// Route component for `/cliente` (new record).
#[component]
pub fn ClienteCreate() -> Element {
    rsx! {
        ClienteFormView { key: "novo", mode: FormMode::Create, id: None }
    }
}

/// Route component for `/cliente/:opr/:id` (edit or view).
#[component]
pub fn ClienteForm(opr: String, id: i64) -> Element {
    let mode = FormMode::from_route(Some(&opr), Some(id));
    rsx! {
        // Keyed so navigating between records remounts the form state.
        ClienteFormView { key: "{opr}-{id}", mode, id: Some(id) }
    }
}

#[component]
fn ClienteFormView(mode: FormMode, id: Option<i64>) -> Element {
    let nav = use_navigator();
    let toast = use_toast();
    let mut nome = use_signal(String::new);
    let mut cpf = use_signal(String::new);
    let mut telefone = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut saving = use_signal(|| false);
    let mut load_error = use_signal(|| Option::<String>::None);

    // Fetch the record when editing or viewing
    let _loader = use_resource(move || async move {
        let Some(id) = id else { return };
        match api::cliente::get_cliente_by_id(id).await {
            Ok(Some(cliente)) => {
                nome.set(cliente.nome);
                cpf.set(cliente.cpf);
                telefone.set(cliente.telefone.unwrap_or_default());
            }
            Ok(None) => {
                load_error.set(Some(format!("Cliente {id} não encontrado")));
            }
            Err(err) => {
                load_error.set(Some(format!(
                    "Erro ao carregar cliente: {}",
                    err.user_message()
                )));
            }
        }
    });

    let read_only = mode.is_read_only();
    let title = mode.title("Cliente", id);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() || load_error().is_some() {
            return;
        }

        let mut checked = FieldErrors::default();
        checked.check("nome", &nome(), &[Rule::Required("Nome é obrigatório")]);
        checked.check(
            "cpf",
            &cpf(),
            &[
                Rule::Required("CPF é obrigatório"),
                Rule::Digits(11, "CPF deve conter 11 dígitos"),
            ],
        );
        errors.set(checked.clone());
        if !checked.is_empty() {
            return;
        }

        spawn(async move {
            saving.set(true);
            let cliente = Cliente {
                id_cliente: id,
                nome: nome().trim().to_string(),
                cpf: cpf(),
                telefone: optional(telefone()),
            };
            let result = match id {
                Some(id) => api::cliente::update_cliente(id, &cliente).await,
                None => api::cliente::create_cliente(&cliente).await,
            };
            match result {
                Ok(saved_id) => {
                    toast.success(format!("Cliente salvo com sucesso. ID: {saved_id}"));
                    nav.push(Route::ClienteList {});
                }
                Err(err) => {
                    saving.set(false);
                    toast.error(format!("Erro ao salvar cliente: {}", err.user_message()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-toolbar",
                h1 { class: "view-title", "{title}" }
            }

            form {
                class: "form-card",
                onsubmit: handle_submit,

                if read_only {
                    p { class: "form-note", "Todos os campos estão em modo somente leitura." }
                }
                if let Some(message) = load_error() {
                    div { class: "error-box", "{message}" }
                }

                div {
                    class: "field",
                    Label { html_for: "cliente-nome", "Nome" }
                    Input {
                        id: "cliente-nome",
                        r#type: "text",
                        value: nome(),
                        disabled: read_only,
                        oninput: move |evt: FormEvent| nome.set(evt.value()),
                    }
                    if let Some(message) = errors().get("nome") {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "cliente-cpf", "CPF" }
                    Input {
                        id: "cliente-cpf",
                        r#type: "text",
                        placeholder: "somente números",
                        value: cpf(),
                        disabled: read_only,
                        oninput: move |evt: FormEvent| cpf.set(digits(&evt.value(), 11)),
                    }
                    if let Some(message) = errors().get("cpf") {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "cliente-telefone", "Telefone" }
                    Input {
                        id: "cliente-telefone",
                        r#type: "text",
                        placeholder: "somente números",
                        value: telefone(),
                        disabled: read_only,
                        oninput: move |evt: FormEvent| telefone.set(digits(&evt.value(), 11)),
                    }
                }

                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| { nav.push(Route::ClienteList {}); },
                        "Cancelar"
                    }
                    if !read_only {
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: saving() || load_error().is_some(),
                            if id.is_some() { "Atualizar" } else { "Cadastrar" }
                        }
                    }
                }
            }
        }
    }
}
