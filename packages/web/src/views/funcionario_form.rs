//! Funcionário form: create, edit and read-only view, plus the advisory
//! duplicate-CPF check fired when the CPF field loses focus.

use api::{Funcionario, Grupo};
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, Input, Label, ModalOverlay, Select};
use ui::mask::digits;
use ui::{optional, FieldErrors, FormMode, Rule};

use crate::Route;

/// Route component for `/funcionario` (new record).
#[component]
pub fn FuncionarioCreate() -> Element {
    rsx! {
        FuncionarioFormView { key: "novo", mode: FormMode::Create, id: None }
    }
}

/// Route component for `/funcionario/:opr/:id` (edit or view).
#[component]
pub fn FuncionarioForm(opr: String, id: i64) -> Element {
    let mode = FormMode::from_route(Some(&opr), Some(id));
    rsx! {
        // Keyed so navigating between records remounts the form state.
        FuncionarioFormView { key: "{opr}-{id}", mode, id: Some(id) }
    }
}

#[component]
fn FuncionarioFormView(mode: FormMode, id: Option<i64>) -> Element {
    let nav = use_navigator();
    let toast = use_toast();
    let mut nome = use_signal(String::new);
    let mut cpf = use_signal(String::new);
    let mut matricula = use_signal(String::new);
    let mut telefone = use_signal(String::new);
    let mut senha = use_signal(String::new);
    let mut grupo = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut saving = use_signal(|| false);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut cpf_conflict = use_signal(|| Option::<Funcionario>::None);

    // Fetch the record when editing or viewing
    let _loader = use_resource(move || async move {
        let Some(id) = id else { return };
        match api::funcionario::get_funcionario_by_id(id).await {
            Ok(Some(funcionario)) => {
                nome.set(funcionario.nome);
                cpf.set(funcionario.cpf);
                matricula.set(funcionario.matricula);
                telefone.set(funcionario.telefone.unwrap_or_default());
                senha.set(funcionario.senha.unwrap_or_default());
                grupo.set(u8::from(funcionario.grupo).to_string());
            }
            Ok(None) => {
                load_error.set(Some(format!("Funcionário {id} não encontrado")));
            }
            Err(err) => {
                load_error.set(Some(format!(
                    "Erro ao carregar funcionário: {}",
                    err.user_message()
                )));
            }
        }
    });

    let read_only = mode.is_read_only();
    let title = mode.title("Funcionário", id);

    // Advisory duplicate check: warn, never block
    let handle_cpf_blur = move |_| {
        if read_only {
            return;
        }
        let value = cpf();
        if value.len() < 11 {
            return;
        }
        spawn(async move {
            match api::funcionario::check_cpf_exists(&value).await {
                Ok(check) => {
                    if let Some(found) = check.conflict_for(id) {
                        cpf_conflict.set(Some(found.clone()));
                    }
                }
                Err(err) => {
                    tracing::error!("erro ao verificar CPF: {err}");
                    toast.error("Erro ao verificar CPF");
                }
            }
        });
    };

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
        checked.check(
            "matricula",
            &matricula(),
            &[Rule::Required("Matrícula é obrigatória")],
        );
        checked.check(
            "senha",
            &senha(),
            &[
                Rule::Required("Senha obrigatória"),
                Rule::MinLen(6, "Pelo menos 6 caracteres"),
            ],
        );
        checked.check("grupo", &grupo(), &[Rule::Required("Grupo é obrigatório")]);
        errors.set(checked.clone());
        if !checked.is_empty() {
            return;
        }

        let Some(grupo) = grupo()
            .parse::<u8>()
            .ok()
            .and_then(|value| Grupo::try_from(value).ok())
        else {
            return;
        };

        spawn(async move {
            saving.set(true);
            let funcionario = Funcionario {
                id_funcionario: id,
                nome: nome().trim().to_string(),
                cpf: cpf(),
                matricula: matricula().trim().to_string(),
                telefone: optional(telefone()),
                senha: Some(senha()),
                grupo,
            };
            let result = match id {
                Some(id) => api::funcionario::update_funcionario(id, &funcionario).await,
                None => api::funcionario::create_funcionario(&funcionario).await,
            };
            match result {
                Ok(saved_id) => {
                    toast.success(format!("Funcionário salvo com sucesso. ID: {saved_id}"));
                    nav.push(Route::FuncionarioList {});
                }
                Err(err) => {
                    saving.set(false);
                    toast.error(format!("Erro ao salvar funcionário: {}", err.user_message()));
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
                    Label { html_for: "funcionario-nome", "Nome" }
                    Input {
                        id: "funcionario-nome",
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
                    Label { html_for: "funcionario-cpf", "CPF" }
                    Input {
                        id: "funcionario-cpf",
                        r#type: "text",
                        placeholder: "somente números",
                        value: cpf(),
                        disabled: read_only,
                        oninput: move |evt: FormEvent| cpf.set(digits(&evt.value(), 11)),
                        onblur: handle_cpf_blur,
                    }
                    if let Some(message) = errors().get("cpf") {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "funcionario-matricula", "Matrícula" }
                    Input {
                        id: "funcionario-matricula",
                        r#type: "text",
                        value: matricula(),
                        disabled: read_only,
                        oninput: move |evt: FormEvent| matricula.set(evt.value()),
                    }
                    if let Some(message) = errors().get("matricula") {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "funcionario-telefone", "Telefone" }
                    Input {
                        id: "funcionario-telefone",
                        r#type: "text",
                        placeholder: "somente números",
                        value: telefone(),
                        disabled: read_only,
                        oninput: move |evt: FormEvent| telefone.set(digits(&evt.value(), 11)),
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "funcionario-senha", "Senha" }
                    Input {
                        id: "funcionario-senha",
                        r#type: "password",
                        placeholder: "pelo menos 6 caracteres",
                        value: senha(),
                        disabled: read_only,
                        oninput: move |evt: FormEvent| senha.set(evt.value()),
                    }
                    if let Some(message) = errors().get("senha") {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "field",
                    Label { html_for: "funcionario-grupo", "Grupo" }
                    Select {
                        id: "funcionario-grupo",
                        value: grupo(),
                        disabled: read_only,
                        onchange: move |evt: FormEvent| grupo.set(evt.value()),
                        option { value: "", "Selecione..." }
                        {Grupo::all().into_iter().map(|g| {
                            let value = u8::from(g).to_string();
                            rsx! {
                                option {
                                    value: "{value}",
                                    selected: grupo() == value,
                                    "{g.label()}"
                                }
                            }
                        })}
                    }
                    if let Some(message) = errors().get("grupo") {
                        p { class: "field-error", "{message}" }
                    }
                }

                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| { nav.push(Route::FuncionarioList {}); },
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

        // Duplicate-CPF modal
        if let Some(conflito) = cpf_conflict() {
            ModalOverlay {
                on_close: move |_| cpf_conflict.set(None),
                h2 { class: "modal-title", "CPF já cadastrado" }
                p {
                    class: "modal-text",
                    "Este CPF já está vinculado a outro funcionário: "
                    strong { "{conflito.nome}" }
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| cpf_conflict.set(None),
                        "Cancelar"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            if let Some(conflict_id) = cpf_conflict().and_then(|f| f.id_funcionario) {
                                nav.push(Route::FuncionarioForm { opr: "view".to_string(), id: conflict_id });
                            }
                            cpf_conflict.set(None);
                        },
                        "Visualizar"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            if let Some(conflict_id) = cpf_conflict().and_then(|f| f.id_funcionario) {
                                nav.push(Route::FuncionarioForm { opr: "edit".to_string(), id: conflict_id });
                            }
                            cpf_conflict.set(None);
                        },
                        "Editar"
                    }
                }
            }
        }
    }
}
