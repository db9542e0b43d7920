use dioxus::prelude::*;
use views::{
    ClienteCreate, ClienteForm, ClienteList, FuncionarioCreate, FuncionarioForm, FuncionarioList,
    Home, Login, ProdutoList,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(MainLayout)]
        #[route("/home")]
        Home {},
        #[route("/clientes")]
        ClienteList {},
        #[route("/cliente")]
        ClienteCreate {},
        #[route("/cliente/:opr/:id")]
        ClienteForm { opr: String, id: i64 },
        #[route("/funcionarios")]
        FuncionarioList {},
        #[route("/funcionario")]
        FuncionarioCreate {},
        #[route("/funcionario/:opr/:id")]
        FuncionarioForm { opr: String, id: i64 },
        #[route("/produtos")]
        ProdutoList {},
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::COMANDAS_CSS }
        ui::AuthProvider {
            ui::components::ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // Redirect based on auth state
    if auth().is_authenticated() {
        nav.replace(Route::Home {});
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}

/// Navbar plus content container for every authenticated page.
/// Unauthenticated sessions never reach the outlet.
#[component]
fn MainLayout() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();
    let toast = ui::components::use_toast();

    if !auth().is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let handle_logout = move |_| {
        ui::auth::logout(auth);
        toast.info("Logout realizado com sucesso!");
        nav.push(Route::Login {});
    };

    rsx! {
        ui::Navbar {
            span { class: "navbar-brand", "Comandas" }
            Link { to: Route::Home {}, class: "navbar-link", "Home" }
            Link { to: Route::ClienteList {}, class: "navbar-link", "Clientes" }
            Link { to: Route::FuncionarioList {}, class: "navbar-link", "Funcionários" }
            Link { to: Route::ProdutoList {}, class: "navbar-link", "Produtos" }
            span { class: "navbar-spacer" }
            button {
                class: "navbar-logout",
                onclick: handle_logout,
                "Sair"
            }
        }
        main {
            class: "container",
            Outlet::<Route> {}
        }
    }
}
