use dioxus::prelude::*;
use shared_types::Usuario;
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, FormSelect, Input, PageActions, PageHeader, PageSubtitle, PageTitle, Skeleton};

use crate::routes::Route;
use crate::session::{use_api, use_session};

/// Client-side filtering over the user table: role filter plus
/// case-insensitive search over email and name.
pub fn filtrar_usuarios(usuarios: &[Usuario], filtro_rol: &str, busqueda: &str) -> Vec<Usuario> {
    let termino = busqueda.trim().to_lowercase();
    usuarios
        .iter()
        .filter(|u| filtro_rol == "TODOS" || u.rol == filtro_rol)
        .filter(|u| {
            termino.is_empty()
                || u.email.to_lowercase().contains(&termino)
                || u.nombre.to_lowercase().contains(&termino)
        })
        .cloned()
        .collect()
}

/// The signed-in active admin must not be able to deactivate themselves.
pub fn es_propio_admin(usuario: &Usuario, email_actual: Option<&str>) -> bool {
    email_actual.is_some_and(|email| {
        usuario.email == email && usuario.rol == "ADMIN" && usuario.activo
    })
}

fn variante_rol(rol: &str) -> BadgeVariant {
    match rol {
        "ADMIN" => BadgeVariant::Primary,
        "VETERINARIO" => BadgeVariant::Secondary,
        "RECEPCIONISTA" => BadgeVariant::Success,
        _ => BadgeVariant::Outline,
    }
}

/// `/admin/usuarios` — user administration: search, role filter and the
/// activate/deactivate toggle.
#[component]
pub fn UsuariosPage() -> Element {
    let api = use_api();
    let session = use_session();

    let mut busqueda = use_signal(String::new);
    let mut filtro_rol = use_signal(|| "TODOS".to_string());
    let mut recarga = use_signal(|| 0u32);
    let mut aviso = use_signal(|| None::<(bool, String)>);

    let api_lista = api.clone();
    let usuarios = use_resource(move || {
        let api = api_lista.clone();
        let _tick = recarga();
        async move { api.usuarios().await }
    });

    let email_actual = session.email();

    let api_toggle = api.clone();
    let cambiar_estado = EventHandler::new(move |(id, nuevo): (i64, bool)| {
        let api = api_toggle.clone();
        spawn(async move {
            aviso.set(None);
            match api.cambiar_estado_usuario(id, nuevo).await {
                Ok(()) => {
                    aviso.set(Some((
                        true,
                        "Estado del usuario actualizado correctamente".to_string(),
                    )));
                    recarga.set(recarga() + 1);
                }
                Err(err) => {
                    let expirada = err.is_unauthorized();
                    aviso.set(Some((false, err.user_message())));
                    if expirada {
                        navigator().push(Route::Login {});
                    }
                }
            }
        });
    });

    rsx! {
        PageHeader {
            div {
                PageTitle { "Gestión de Usuarios" }
                PageSubtitle { "Administra los usuarios del sistema y controla sus accesos" }
            }
            PageActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| recarga.set(recarga() + 1),
                    "Actualizar"
                }
            }
        }

        Card {
            CardContent {
                div { class: "filtros-fila",
                    Input {
                        label: "Buscar usuario",
                        placeholder: "Buscar por email o nombre...",
                        value: busqueda(),
                        on_input: move |e: FormEvent| busqueda.set(e.value()),
                    }
                    FormSelect {
                        label: "Filtrar por rol",
                        value: "{filtro_rol}",
                        onchange: move |e: Event<FormData>| filtro_rol.set(e.value()),
                        option { value: "TODOS", "Todos los roles" }
                        option { value: "ADMIN", "Administrador" }
                        option { value: "VETERINARIO", "Veterinario" }
                        option { value: "RECEPCIONISTA", "Recepcionista" }
                        option { value: "CLIENTE", "Cliente" }
                    }
                }
            }
        }

        if let Some((exito, mensaje)) = aviso() {
            div {
                class: if exito { "alert alert-success" } else { "alert alert-error" },
                "{mensaje}"
            }
        }

        match &*usuarios.read() {
            Some(Ok(lista)) => rsx! {
                TablaUsuarios {
                    usuarios: lista.clone(),
                    filtro_rol: filtro_rol(),
                    busqueda: busqueda(),
                    email_actual: email_actual.clone(),
                    on_cambiar_estado: cambiar_estado,
                }
            },
            Some(Err(err)) => rsx! {
                Card {
                    CardContent {
                        div { class: "alert alert-error",
                            p { "Error al cargar usuarios: {err.user_message()}" }
                            Button {
                                onclick: move |_| recarga.set(recarga() + 1),
                                "Reintentar"
                            }
                        }
                    }
                }
            },
            None => rsx! {
                Card {
                    CardContent {
                        for _ in 0..5 {
                            Skeleton { style: "height: 2.5rem; width: 100%; margin-bottom: 0.5rem;" }
                        }
                    }
                }
            },
        }
    }
}

/// The filtered user table with its result counter.
#[component]
fn TablaUsuarios(
    usuarios: Vec<Usuario>,
    filtro_rol: String,
    busqueda: String,
    email_actual: Option<String>,
    on_cambiar_estado: EventHandler<(i64, bool)>,
) -> Element {
    let filtrados = filtrar_usuarios(&usuarios, &filtro_rol, &busqueda);

    rsx! {
        p { class: "muted",
            "Mostrando "
            strong { "{filtrados.len()}" }
            " de "
            strong { "{usuarios.len()}" }
            " usuarios"
        }
        Card {
            CardContent {
                table { class: "table",
                    thead {
                        tr {
                            th { "Email" }
                            th { "Nombre" }
                            th { "Rol" }
                            th { "Estado" }
                            th { "Acciones" }
                        }
                    }
                    tbody {
                        if filtrados.is_empty() {
                            tr {
                                td { colspan: "5", class: "estado-vacio",
                                    "No se encontraron usuarios con los filtros aplicados"
                                }
                            }
                        } else {
                            for usuario in filtrados.iter() {
                                UsuarioFila {
                                    usuario: usuario.clone(),
                                    propio: es_propio_admin(usuario, email_actual.as_deref()),
                                    on_cambiar_estado: on_cambiar_estado,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn UsuarioFila(
    usuario: Usuario,
    propio: bool,
    on_cambiar_estado: EventHandler<(i64, bool)>,
) -> Element {
    let id = usuario.id;
    let activo = usuario.activo;

    rsx! {
        tr {
            td {
                "{usuario.email}"
                if propio {
                    span { class: "etiqueta-propio", " (Tú)" }
                }
            }
            td { "{usuario.nombre}" }
            td {
                Badge { variant: variante_rol(&usuario.rol), "{usuario.rol}" }
            }
            td {
                Badge {
                    variant: if activo { BadgeVariant::Success } else { BadgeVariant::Destructive },
                    if activo { "Activo" } else { "Inactivo" }
                }
            }
            td {
                Button {
                    variant: if activo { ButtonVariant::Destructive } else { ButtonVariant::Primary },
                    disabled: propio,
                    onclick: move |_| on_cambiar_estado.call((id, !activo)),
                    if activo { "Desactivar" } else { "Activar" }
                }
                if propio {
                    p { class: "aviso-propio", "No puedes desactivarte a ti mismo" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn usuario(id: i64, email: &str, nombre: &str, rol: &str, activo: bool) -> Usuario {
        Usuario {
            id,
            email: email.into(),
            nombre: nombre.into(),
            rol: rol.into(),
            activo,
        }
    }

    fn plantel() -> Vec<Usuario> {
        vec![
            usuario(1, "admin@clinica.com", "Administrador", "ADMIN", true),
            usuario(2, "rivas@clinica.com", "Dra. Rivas", "VETERINARIO", true),
            usuario(3, "mesa@clinica.com", "Mesa de Ayuda", "RECEPCIONISTA", false),
            usuario(4, "ana@correo.com", "Ana Gómez", "CLIENTE", true),
        ]
    }

    #[test]
    fn sin_filtros_se_muestran_todos() {
        assert_eq!(filtrar_usuarios(&plantel(), "TODOS", "").len(), 4);
    }

    #[test]
    fn filtra_por_rol_exacto() {
        let filtrados = filtrar_usuarios(&plantel(), "VETERINARIO", "");
        assert_eq!(filtrados.len(), 1);
        assert_eq!(filtrados[0].email, "rivas@clinica.com");
    }

    #[test]
    fn busca_por_email_y_nombre_sin_mayusculas() {
        assert_eq!(filtrar_usuarios(&plantel(), "TODOS", "RIVAS").len(), 1);
        assert_eq!(filtrar_usuarios(&plantel(), "TODOS", "ana").len(), 1);
        assert_eq!(filtrar_usuarios(&plantel(), "TODOS", "clinica.com").len(), 3);
    }

    #[test]
    fn los_filtros_se_combinan() {
        assert_eq!(filtrar_usuarios(&plantel(), "CLIENTE", "rivas").len(), 0);
        assert_eq!(filtrar_usuarios(&plantel(), "ADMIN", "admin").len(), 1);
    }

    #[test]
    fn el_propio_admin_activo_queda_protegido() {
        let admin = usuario(1, "admin@clinica.com", "Administrador", "ADMIN", true);
        assert!(es_propio_admin(&admin, Some("admin@clinica.com")));
    }

    #[test]
    fn otros_usuarios_no_estan_protegidos() {
        let vet = usuario(2, "rivas@clinica.com", "Dra. Rivas", "VETERINARIO", true);
        assert!(!es_propio_admin(&vet, Some("rivas@clinica.com")));

        let otro_admin = usuario(5, "otro@clinica.com", "Otro", "ADMIN", true);
        assert!(!es_propio_admin(&otro_admin, Some("admin@clinica.com")));
    }

    #[test]
    fn un_admin_inactivo_puede_reactivarse() {
        let admin = usuario(1, "admin@clinica.com", "Administrador", "ADMIN", false);
        assert!(!es_propio_admin(&admin, Some("admin@clinica.com")));
    }

    #[test]
    fn sin_email_no_hay_proteccion() {
        let admin = usuario(1, "admin@clinica.com", "Administrador", "ADMIN", true);
        assert!(!es_propio_admin(&admin, None));
    }
}
