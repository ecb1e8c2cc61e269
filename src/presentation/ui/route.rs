//! Route definitions.

/// Pages reachable from the sidebar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Orders list with the new-order dialog.
    Home,
    /// Blogs page.
    Blogs,
    /// Contact page.
    Contact,
}

impl Route {
    /// Every route in sidebar order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Blogs, Self::Contact];

    /// Returns the URL-style path of the route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Blogs => "/blogs",
            Self::Contact => "/contact",
        }
    }

    /// Returns the label rendered in the sidebar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Blogs => "Blogs",
            Self::Contact => "Contact",
        }
    }

    /// Resolves a path to a route, falling back to Home for unknown paths.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == path.trim_end_matches('/') || route.path() == path)
            .unwrap_or(Self::Home)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Blogs.path(), "/blogs");
        assert_eq!(Route::Contact.path(), "/contact");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/blogs"), Route::Blogs);
        assert_eq!(Route::from_path("/blogs/"), Route::Blogs);
        assert_eq!(Route::from_path("/contact"), Route::Contact);
    }

    #[test]
    fn test_unknown_path_falls_back_to_home() {
        assert_eq!(Route::from_path("/missing"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
    }
}
