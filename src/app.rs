use dioxus::prelude::*;
use invite_core::InviteConfig;

use crate::components::Toast;
use crate::context::get_config;
use crate::pages::Invitation;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The invitation: envelope, then the revealed page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Invitation {},
}

/// Root application component.
///
/// Provides global styles, configuration, the toast queue and routing.
#[component]
pub fn App() -> Element {
    let config: Signal<InviteConfig> = use_signal(get_config);
    let toasts: Signal<Vec<Toast>> = use_signal(Vec::new);

    use_context_provider(|| config);
    use_context_provider(|| toasts);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
