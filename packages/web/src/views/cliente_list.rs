//! Cliente listing with the per-row visualizar/editar/excluir actions.

use api::Cliente;
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, ModalOverlay};
use ui::icons::{FaEye, FaPenToSquare, FaPlus, FaTrash};
use ui::mask::{format_cpf, format_telefone};
use ui::Icon;

use crate::Route;

/// Cliente list page component.
#[component]
pub fn ClienteList() -> Element {
    let nav = use_navigator();
    let toast = use_toast();
    let mut delete_target = use_signal(|| Option::<Cliente>::None);
    let mut deleting = use_signal(|| false);
    let mut clientes = use_resource(|| async { api::cliente::get_clientes().await });

    let handle_confirm_delete = move |_| {
        let Some(id) = delete_target().and_then(|cliente| cliente.id_cliente) else {
            return;
        };
        if deleting() {
            return;
        }
        spawn(async move {
            deleting.set(true);
            match api::cliente::delete_cliente(id).await {
                Ok(()) => {
                    toast.success("Cliente excluído com sucesso.");
                    delete_target.set(None);
                    clientes.restart();
                }
                Err(err) => {
                    toast.error(format!("Erro ao excluir cliente: {}", err.user_message()));
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
                h1 { class: "view-title", "Clientes" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| { nav.push(Route::ClienteCreate {}); },
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    "Novo"
                }
            }

            match &*clientes.read_unchecked() {
                Some(Ok(list)) => rsx! {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Nome" }
                                th { "CPF" }
                                th { "Telefone" }
                                th { "Ações" }
                            }
                        }
                        tbody {
                            {list.iter().map(|cliente| {
                                let id = cliente.id_cliente.unwrap_or_default();
                                let record = cliente.clone();
                                let cpf = format_cpf(&cliente.cpf);
                                let telefone = cliente
                                    .telefone
                                    .as_deref()
                                    .map(format_telefone)
                                    .unwrap_or_else(|| "—".to_string());
                                rsx! {
                                    tr {
                                        key: "{id}",
                                        td { "{id}" }
                                        td { "{cliente.nome}" }
                                        td { "{cpf}" }
                                        td { "{telefone}" }
                                        td {
                                            div {
                                                class: "row-actions",
                                                button {
                                                    class: "icon-btn",
                                                    title: "Visualizar",
                                                    onclick: move |_| { nav.push(Route::ClienteForm { opr: "view".to_string(), id }); },
                                                    Icon { icon: FaEye, width: 14, height: 14 }
                                                }
                                                button {
                                                    class: "icon-btn",
                                                    title: "Editar",
                                                    onclick: move |_| { nav.push(Route::ClienteForm { opr: "edit".to_string(), id }); },
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
                        p { class: "view-muted", "Nenhum cliente cadastrado." }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "error-box", "Erro ao carregar clientes: {err.user_message()}" }
                },
                None => rsx! {
                    p { class: "view-muted", "Carregando..." }
                },
            }
        }

        if let Some(cliente) = delete_target() {
            ModalOverlay {
                on_close: move |_| delete_target.set(None),
                h2 { class: "modal-title", "Excluir Cliente" }
                p {
                    class: "modal-text",
                    "Excluir o cliente "
                    strong { "{cliente.nome}" }
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
