//! Funcionário listing with the per-row visualizar/editar/excluir actions.

use api::Funcionario;
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, ModalOverlay};
use ui::icons::{FaEye, FaPenToSquare, FaPlus, FaTrash};
use ui::mask::format_cpf;
use ui::Icon;

use crate::Route;

/// Funcionário list page component.
#[component]
pub fn FuncionarioList() -> Element {
    let nav = use_navigator();
    let toast = use_toast();
    let mut delete_target = use_signal(|| Option::<Funcionario>::None);
    let mut deleting = use_signal(|| false);
    let mut funcionarios = use_resource(|| async { api::funcionario::get_funcionarios().await });

    let handle_confirm_delete = move |_| {
        let Some(id) = delete_target().and_then(|funcionario| funcionario.id_funcionario) else {
            return;
        };
        if deleting() {
            return;
        }
        spawn(async move {
            deleting.set(true);
            match api::funcionario::delete_funcionario(id).await {
                Ok(()) => {
                    toast.success("Funcionário excluído com sucesso.");
                    delete_target.set(None);
                    funcionarios.restart();
                }
                Err(err) => {
                    toast.error(format!("Erro ao excluir funcionário: {}", err.user_message()));
                }
            }
            deleting.set(false);
        });
    };

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-toolbar",
                h1 { class: "view-title", "Funcionários" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| { nav.push(Route::FuncionarioCreate {}); },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Novo"
                }
            }

            match &*funcionarios.read_unchecked() {
                Some(Ok(list)) => rsx! {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Nome" }
                                th { "CPF" }
                                th { "Matrícula" }
                                th { "Ações" }
                            }
                        }
                        tbody {
                            {list.iter().map(|funcionario| {
                                let id = funcionario.id_funcionario.unwrap_or_default();
                                let record = funcionario.clone();
                                let cpf = format_cpf(&funcionario.cpf);
                                rsx! {
                                    tr {
                                        key: "{id}",
                                        td { "{id}" }
                                        td { "{funcionario.nome}" }
                                        td { "{cpf}" }
                                        td { "{funcionario.matricula}" }
                                        td {
                                            div {
                                                class: "row-actions",
                                                button {
                                                    class: "icon-btn",
                                                    title: "Visualizar",
                                                    onclick: move |_| { nav.push(Route::FuncionarioForm { opr: "view".to_string(), id }); },
                                                    Icon { icon: FaEye, width: 14, height: 14 }
                                                }
                                                button {
                                                    class: "icon-btn",
                                                    title: "Editar",
                                                    onclick: move |_| { nav.push(Route::FuncionarioForm { opr: "edit".to_string(), id }); },
                                                    Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                                }
                                                button {
                                                    class: "icon-btn icon-btn-danger",
                                                    title: "Excluir",
                                                    onclick: move |_| delete_target.set(Some(record.clone())),
                                                    Icon { icon: FaTrash, width: 14, height: 14 }
                                                }
                                            }
                                        }
                                    }
                                }
                            })}
                        }
                    }
                    if list.is_empty() {
                        p { class: "view-muted", "Nenhum funcionário cadastrado." }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "error-box", "Erro ao carregar funcionários: {err.user_message()}" }
                },
                None => rsx! {
                    p { class: "view-muted", "Carregando..." }
                },
            }
        }

        if let Some(funcionario) = delete_target() {
            ModalOverlay {
                on_close: move |_| delete_target.set(None),
                h2 { class: "modal-title", "Excluir Funcionário" }
                p {
                    class: "modal-text",
                    "Excluir o funcionário "
                    strong { "{funcionario.nome}" }
                    "?"
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| delete_target.set(None),
                        "Cancelar"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: deleting(),
                        onclick: handle_confirm_delete,
                        "Excluir"
                    }
                }
            }
        }
    }
}
