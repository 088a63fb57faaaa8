use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Vertical offset in px past which the navigation bar turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Menu,
    History,
    Contact,
    Shop,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Menu,
        Route::History,
        Route::Contact,
        Route::Shop,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Menu => "/menu",
            Self::History => "/history",
            Self::Contact => "/contact",
            Self::Shop => "/shop",
        }
    }

    /// Exact match on the path. A single trailing slash is accepted, query
    /// strings must already be stripped.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(stripped) => stripped,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { path: "/", label: "Home" },
    NavItem { path: "/menu", label: "Menu" },
    NavItem { path: "/history", label: "Our History" },
    NavItem { path: "/contact", label: "Contact" },
    NavItem { path: "/shop", label: "Shop" },
];

impl NavItem {
    pub fn is_active(&self, current: Route) -> bool {
        self.path == current.path()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStyle {
    /// translucent bar laid over the page header
    Overlay,
    /// opaque bar with a shadow
    Elevated,
}

impl NavStyle {
    pub fn for_offset(offset: f64) -> Self {
        if offset > SCROLL_THRESHOLD {
            Self::Elevated
        } else {
            Self::Overlay
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Overlay => "nav nav-overlay",
            Self::Elevated => "nav nav-elevated",
        }
    }
}

/// One bit of state driven by scroll offsets. Shared between the scroll
/// listener and the renderer.
#[derive(Debug, Default)]
pub struct ScrollState {
    elevated: AtomicBool,
    transitions: AtomicUsize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a scroll offset. Returns the new style when the offset crossed
    /// the threshold, `None` when it stayed on the same side.
    pub fn observe(&self, offset: f64) -> Option<NavStyle> {
        let style = NavStyle::for_offset(offset);
        let elevated = style == NavStyle::Elevated;
        if self.elevated.swap(elevated, Ordering::AcqRel) == elevated {
            return None;
        }
        self.transitions.fetch_add(1, Ordering::AcqRel);
        tracing::debug!(offset, ?style, "navigation style changed");
        Some(style)
    }

    pub fn style(&self) -> NavStyle {
        if self.elevated.load(Ordering::Acquire) {
            NavStyle::Elevated
        } else {
            NavStyle::Overlay
        }
    }

    /// Number of crossings observed so far.
    pub fn transitions(&self) -> usize {
        self.transitions.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/menu"), Some(Route::Menu));
        assert_eq!(Route::from_path("/menu/"), Some(Route::Menu));
        assert_eq!(Route::from_path("/history"), Some(Route::History));
        assert_eq!(Route::from_path("/contact"), Some(Route::Contact));
        assert_eq!(Route::from_path("/shop"), Some(Route::Shop));
        assert_eq!(Route::from_path("/shop/cart"), None);
        assert_eq!(Route::from_path("/Menu"), None);
        assert_eq!(Route::from_path("/menu//"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_every_route_has_a_nav_item() {
        for route in Route::ALL {
            let active: Vec<_> = NAV_ITEMS.iter().filter(|i| i.is_active(route)).collect();
            assert_eq!(active.len(), 1, "{route:?}");
            assert_eq!(Route::from_path(active[0].path), Some(route));
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(NavStyle::for_offset(0.0), NavStyle::Overlay);
        assert_eq!(NavStyle::for_offset(50.0), NavStyle::Overlay);
        assert_eq!(NavStyle::for_offset(50.5), NavStyle::Elevated);
        assert_eq!(NavStyle::for_offset(2000.0), NavStyle::Elevated);
    }

    #[test]
    fn test_toggle_once_per_crossing() {
        let state = ScrollState::new();
        assert_eq!(state.style(), NavStyle::Overlay);

        assert_eq!(state.observe(10.0), None);
        assert_eq!(state.observe(49.0), None);
        assert_eq!(state.observe(51.0), Some(NavStyle::Elevated));
        assert_eq!(state.observe(300.0), None);
        assert_eq!(state.observe(120.0), None);
        assert_eq!(state.transitions(), 1);
        assert_eq!(state.style(), NavStyle::Elevated);

        assert_eq!(state.observe(50.0), Some(NavStyle::Overlay));
        assert_eq!(state.observe(0.0), None);
        assert_eq!(state.transitions(), 2);
        assert_eq!(state.style(), NavStyle::Overlay);
    }
}
