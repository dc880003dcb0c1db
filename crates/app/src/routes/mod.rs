pub mod header;
pub mod login;
pub mod not_found;
pub mod pages;
pub mod session_menu;
pub mod sidebar_nav;

use crate::auth::{use_ui_store, use_user_role};
use crate::session::RouterNavigator;
use dioxus::prelude::*;
use shared_types::{item_for_path, Navigate, Role, ShellConfig};
use shared_ui::state::ScrollState;
use shared_ui::{
    Badge, BadgeVariant, LoadingOverlay, Sidebar, SidebarContent, SidebarFooter, SidebarHeader,
    SidebarInset, SidebarProvider,
};
use std::rc::Rc;

use header::Header;
use login::Login;
use not_found::NotFound;
use pages::{
    AllPatients, Appointments, BookAppointmentPatient, BookAppointmentStaff, Dashboard, Doctors,
    MedicalRecords, MyAppointments, PatientsView, Profile, Settings, Users,
};
use sidebar_nav::NavList;

/// Application routes. Paths under the shell mirror the navigation table.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AppLayout)]
        #[redirect("/", || Route::Dashboard {})]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/appointments")]
        Appointments {},
        #[route("/my-appointments")]
        MyAppointments {},
        #[route("/patients")]
        AllPatients {},
        #[route("/patients-view")]
        PatientsView {},
        #[route("/medical-records")]
        MedicalRecords {},
        #[route("/doctors")]
        Doctors {},
        #[route("/appointments/book")]
        BookAppointmentStaff {},
        #[route("/book-appointment")]
        BookAppointmentPatient {},
        #[route("/users")]
        Users {},
        #[route("/profile")]
        Profile {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Resolve a path string into a route. Unknown paths land on the 404 page.
pub fn route_for_path(path: &str) -> Route {
    path.parse::<Route>().unwrap_or_else(|err| {
        tracing::warn!(path, error = %err, "unroutable path");
        Route::NotFound {
            route: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    })
}

/// Header title for a route: the navigation label when the path is a
/// navigation target.
pub fn page_title(route: &Route) -> &'static str {
    match route {
        Route::Login {} => "Sign In",
        Route::Profile {} => "Profile",
        Route::Settings {} => "Settings",
        Route::NotFound { .. } => "Not Found",
        other => item_for_path(&other.to_string())
            .map(|item| item.label)
            .unwrap_or(""),
    }
}

fn role_badge_variant(role: Role) -> BadgeVariant {
    match role {
        Role::Admin => BadgeVariant::Warning,
        Role::Doctor => BadgeVariant::Success,
        Role::Assistant => BadgeVariant::Info,
        Role::User => BadgeVariant::Neutral,
    }
}

/// Dashboard shell: sidebar, header, scrollable page content, loading overlay.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let config: ShellConfig = use_context();
    let store = use_ui_store();
    let role = use_user_role();

    let sidebar_open = use_signal(|| false);
    let mut scroll = use_signal(ScrollState::default);
    let mut content = use_signal(|| Option::<Rc<MountedData>>::None);

    let current_path = RouterNavigator.current_path();
    let title = page_title(&route);
    let user = store.current_user.read().clone();
    let display_role = role.unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { open: sidebar_open,
            Sidebar {
                SidebarHeader {
                    span { class: "sidebar-brand-name", "{config.app_name}" }
                }
                SidebarContent {
                    NavList { role, current_path }
                }
                SidebarFooter {
                    div { class: "sidebar-footer-row",
                        span { class: "sidebar-footer-label", "Role" }
                        Badge { variant: role_badge_variant(display_role), "{display_role}" }
                    }
                }
            }

            SidebarInset {
                Header {
                    title: title.to_string(),
                    scrolled: scroll.read().is_scrolled(),
                    sidebar_open,
                    user,
                }

                div {
                    class: "page-content",
                    onmounted: move |evt| content.set(Some(evt.data())),
                    onscroll: move |_| {
                        let Some(element) = content() else { return };
                        spawn(async move {
                            match element.get_scroll_offset().await {
                                Ok(offset) => {
                                    if scroll.write().observe(offset.y) {
                                        tracing::trace!(offset = offset.y, "header shadow toggled");
                                    }
                                }
                                Err(err) => tracing::debug!(error = ?err, "scroll offset unavailable"),
                            }
                        });
                    },
                    Outlet::<Route> {}
                }
            }
        }

        LoadingOverlay { visible: (store.loading)() }
    }
}
