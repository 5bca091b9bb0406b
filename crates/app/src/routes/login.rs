use api_client::ApiClient;
use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Input};

use crate::routes::Route;
use crate::session::use_session;

/// Login page. On success stores token/rol and navigates to `/dashboard`,
/// where the role resolver picks the destination.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    // Already signed in: skip the form entirely.
    if session.is_authenticated() {
        navigator().replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);

        let api = ApiClient::new(None);
        match api.login(email(), password()).await {
            Ok(resp) => {
                session.login(resp.token, resp.rol);
                navigator().push(Route::Dashboard {});
            }
            Err(err) => {
                tracing::debug!(%err, "inicio de sesión rechazado");
                error_msg.set(Some("Credenciales incorrectas".to_string()));
            }
        }
        loading.set(false);
    };

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Iniciar sesión" }
                    CardDescription { "Accede a tu cuenta para continuar." }
                }
                CardContent {
                    form { onsubmit: handle_login,
                        Input {
                            input_type: "email",
                            label: "Correo",
                            placeholder: "usuario@correo.com",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            input_type: "password",
                            label: "Contraseña",
                            placeholder: "Tu contraseña",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit".to_string(),
                            disabled: loading(),
                            class: "auth-submit".to_string(),
                            if loading() { "Entrando..." } else { "Entrar" }
                        }
                        if let Some(err) = error_msg() {
                            p { class: "auth-error", "{err}" }
                        }
                    }
                }
            }
        }
    }
}
