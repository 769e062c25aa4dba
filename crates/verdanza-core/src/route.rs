//! Route identity, navigation kind and viewport geometry.
//!
//! These are the signal sources that do not change every frame. The routing
//! surface owns them; the driver only reads them.

use glam::Vec2;

/// A page of the site.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    Team,
    Contact,
    Waitlist,
    SolutionOne,
    SolutionTwo,
    Other(String),
}

impl Route {
    /// Parse a location path. Hash-router fragments (`#/team`), query strings
    /// and trailing slashes are accepted.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        let path = path.split(['?', '#']).next().unwrap_or("");
        let path = path.trim_end_matches('/');
        let rooted;
        let path = if path.is_empty() || path.starts_with('/') {
            path
        } else {
            rooted = format!("/{path}");
            rooted.as_str()
        };
        match path {
            "" => Route::Home,
            "/team" => Route::Team,
            "/contact" => Route::Contact,
            "/waitlist" => Route::Waitlist,
            "/solution-1" => Route::SolutionOne,
            "/solution-2" => Route::SolutionTwo,
            other => Route::Other(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Team => "/team",
            Route::Contact => "/contact",
            Route::Waitlist => "/waitlist",
            Route::SolutionOne => "/solution-1",
            Route::SolutionTwo => "/solution-2",
            Route::Other(p) => p,
        }
    }

    #[inline]
    pub fn is_home(&self) -> bool {
        matches!(self, Route::Home)
    }
}

/// How the current location was reached.
///
/// Supplied by the router; the driver never guesses it from scroll state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Replace,
    /// History back/forward.
    Pop,
}

impl NavigationKind {
    /// Whether the host restores the scroll offset itself.
    #[inline]
    pub fn restores_scroll(self) -> bool {
        matches!(self, NavigationKind::Pop)
    }
}

/// Visible area in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        let sane = |v: f32| if v.is_finite() { v.max(1.0) } else { 1.0 };
        Self {
            width: sane(width),
            height: sane(height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}
