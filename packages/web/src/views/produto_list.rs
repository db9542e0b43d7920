//! Produto listing. Read-only: produtos are managed elsewhere, this surface
//! only shows the catalog.

use dioxus::prelude::*;
use ui::mask::format_valor;

/// Produto list page component.
#[component]
pub fn ProdutoList() -> Element {
    let produtos = use_resource(|| async { api::produto::get_produtos().await });

    rsx! {
        div {
            class: "view-page",
            div {
                class: "view-toolbar",
                h1 { class: "view-title", "Produtos" }
            }

            match &*produtos.read_unchecked() {
                Some(Ok(list)) => rsx! {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Nome" }
                                th { "Descrição" }
                                th { "Foto" }
                                th { "Valor" }
                            }
                        }
                        tbody {
                            {list.iter().map(|produto| {
                                let id = produto.id_produto.unwrap_or_default();
                                let valor = format_valor(produto.valor);
                                rsx! {
                                    tr {
                                        key: "{id}",
                                        td { "{id}" }
                                        td { "{produto.nome}" }
                                        td { "{produto.descricao}" }
                                        td {
                                            if let Some(foto) = produto.foto.as_deref() {
                                                img { class: "produto-foto", src: "{foto}", alt: "{produto.nome}" }
                                            } else {
                                                "—"
                                            }
                                        }
                                        td { "{valor}" }
                                    }
                                }
                            })}
                        }
                    }
                    if list.is_empty() {
                        p { class: "view-muted", "Nenhum produto cadastrado." }
                    }
                },
                Some(Err(err)) => rsx! {
                    div { class: "error-box", "Erro ao carregar produtos: {err.user_message()}" }
                },
                None => rsx! {
                    p { class: "view-muted", "Carregando..." }
                },
            }
        }
    }
}
