use std::time::Duration;

use dioxus::prelude::*;
use shared_ui::{use_sidebar, Badge, BadgeVariant, LoadingOverlay, Navbar, Sidebar, SidebarProvider};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Run spawned tasks and re-render, then return the resulting markup.
async fn settle(dom: &mut VirtualDom) -> String {
    let _ = tokio::time::timeout(Duration::from_secs(1), dom.wait_for_work()).await;
    dom.render_immediate_to_vec();
    dioxus_ssr::render(dom)
}

#[test]
fn navbar_reflects_scroll_flag() {
    fn resting() -> Element {
        rsx! { Navbar { "Dashboard" } }
    }
    fn scrolled() -> Element {
        rsx! { Navbar { scrolled: true, "Dashboard" } }
    }
    assert!(render(resting).contains("data-scrolled=\"false\""));
    assert!(render(scrolled).contains("data-scrolled=\"true\""));
}

#[test]
fn role_badge_renders_label() {
    fn app() -> Element {
        rsx! { Badge { variant: BadgeVariant::Info, "Assistant" } }
    }
    let html = render(app);
    assert!(html.contains("Assistant"));
}

#[test]
fn overlay_blocks_only_while_loading() {
    fn idle() -> Element {
        rsx! { LoadingOverlay { visible: false } }
    }
    fn busy() -> Element {
        rsx! { LoadingOverlay { visible: true } }
    }
    assert!(!render(idle).contains("loading-overlay"));
    assert!(render(busy).contains("Loading..."));
}

#[test]
fn backdrop_only_while_sidebar_open() {
    fn open() -> Element {
        let open = use_signal(|| true);
        rsx! { SidebarProvider { open, Sidebar { "links" } } }
    }
    fn closed() -> Element {
        let open = use_signal(|| false);
        rsx! { SidebarProvider { open, Sidebar { "links" } } }
    }
    let html = render(open);
    assert!(html.contains("sidebar-backdrop"));
    assert!(html.contains("data-sidebar-open=\"true\""));
    let html = render(closed);
    assert!(!html.contains("sidebar-backdrop"));
    assert!(html.contains("data-sidebar-open=\"false\""));
}

#[component]
fn CloseFromInside() -> Element {
    let mut sidebar = use_sidebar();
    use_hook(move || {
        spawn(async move { sidebar.close() });
    });
    rsx! { "links" }
}

#[tokio::test]
async fn closing_the_overlay_removes_the_backdrop() {
    fn app() -> Element {
        let open = use_signal(|| true);
        rsx! { SidebarProvider { open, Sidebar { CloseFromInside {} } } }
    }
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    assert!(dioxus_ssr::render(&dom).contains("sidebar-backdrop"));

    let html = settle(&mut dom).await;
    assert!(!html.contains("sidebar-backdrop"), "{html}");
    assert!(html.contains("data-sidebar-open=\"false\""));
}

#[component]
fn SelectFromInside(on_follow: EventHandler<()>) -> Element {
    let mut sidebar = use_sidebar();
    use_hook(move || {
        spawn(async move { sidebar.select(on_follow) });
    });
    rsx! { "links" }
}

#[tokio::test]
async fn selecting_a_link_closes_the_overlay_and_follows_it() {
    fn app() -> Element {
        let open = use_signal(|| true);
        let mut followed = use_signal(|| false);
        let followed_now = followed();
        rsx! {
            SidebarProvider { open,
                Sidebar {
                    SelectFromInside { on_follow: move |_| followed.set(true) }
                }
            }
            span { "followed={followed_now}" }
        }
    }
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    assert!(dioxus_ssr::render(&dom).contains("followed=false"));

    let html = settle(&mut dom).await;
    assert!(!html.contains("sidebar-backdrop"), "{html}");
    assert!(html.contains("followed=true"), "{html}");
}
