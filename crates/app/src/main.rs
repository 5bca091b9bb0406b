use dioxus::prelude::*;

mod cache;
mod components;
mod format;
mod guard;
mod nav;
mod routes;
mod session;
mod storage;

use routes::Route;
use session::SessionState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The session is the only app-wide context: token + role restored from
    // durable storage so a reload keeps the user signed in.
    use_context_provider(SessionState::restore);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
