use std::sync::Arc;

use maud::Markup;

use crate::catalog::Catalog;
use crate::lifecycle::Subscription;
use crate::menu::MenuView;
use crate::nav::{NavStyle, Route, ScrollState};
use crate::render;
use crate::testimonials::{Rotation, ROTATION_PERIOD};
use crate::viewport::Viewport;

/// A routed page while it is on screen.
///
/// Mounting attaches the navigation scroll listener and, on the home page,
/// starts the testimonial rotation timer. Both are released exactly once by
/// [`PageView::unmount`] or by dropping the view.
#[derive(Debug)]
pub struct PageView {
    route: Route,
    catalog: Arc<Catalog>,
    scroll: Arc<ScrollState>,
    menu: Option<MenuView>,
    rotation: Option<Rotation>,
    subscriptions: Vec<Subscription>,
}

impl PageView {
    /// Must be called from within a tokio runtime when `route` is
    /// [`Route::Home`].
    pub fn mount(route: Route, catalog: Arc<Catalog>, viewport: &Viewport) -> Self {
        let scroll = Arc::new(ScrollState::new());
        // pick up the offset the page was opened at
        scroll.observe(viewport.offset());

        let mut subscriptions = vec![viewport.listen({
            let scroll = scroll.clone();
            move |offset| {
                scroll.observe(offset);
            }
        })];

        let rotation = match route {
            Route::Home => {
                let (rotation, timer) = Rotation::start(catalog.testimonials().len(), ROTATION_PERIOD);
                subscriptions.push(timer);
                Some(rotation)
            }
            _ => None,
        };

        let menu = match route {
            Route::Menu => Some(MenuView::new(catalog.clone())),
            _ => None,
        };

        tracing::debug!(path = route.path(), "page mounted");
        Self {
            route,
            catalog,
            scroll,
            menu,
            rotation,
            subscriptions,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn nav_style(&self) -> NavStyle {
        self.scroll.style()
    }

    pub fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn menu(&self) -> Option<&MenuView> {
        self.menu.as_ref()
    }

    pub fn menu_mut(&mut self) -> Option<&mut MenuView> {
        self.menu.as_mut()
    }

    /// `None` unless this is the home page.
    pub fn rotation_index(&self) -> Option<usize> {
        self.rotation.as_ref().map(Rotation::index)
    }

    pub fn is_mounted(&self) -> bool {
        self.subscriptions.iter().any(Subscription::is_active)
    }

    pub fn render(&self) -> Markup {
        let catalog = &self.catalog;
        let style = self.nav_style();
        match (self.route, &self.menu) {
            (Route::Home, _) => render::home_page(catalog, style),
            (Route::Menu, Some(menu)) => render::menu_page(catalog, menu, style),
            (Route::Menu, None) => render::menu_page(catalog, &MenuView::new(catalog.clone()), style),
            (Route::History, _) => render::history_page(catalog, style),
            (Route::Contact, _) => render::contact_page(catalog, style),
            (Route::Shop, _) => render::shop_page(catalog, style),
        }
    }

    /// Release every listener and timer. Calling it again is a no-op.
    pub fn unmount(&mut self) {
        let released = self
            .subscriptions
            .iter_mut()
            .filter_map(|sub| sub.release().then_some(sub.name()))
            .collect::<Vec<_>>();
        if !released.is_empty() {
            tracing::debug!(path = self.route.path(), ?released, "page unmounted");
        }
    }
}

impl Drop for PageView {
    fn drop(&mut self) {
        self.unmount();
    }
}
