//! Route table model shared by the router declaration and the navbar.

/// Pages mounted inside the layout shell
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Page {
    Dashboard,
    MyShows,
    Calendar,
    Recommendations,
    TmdbTesting,
}

impl Page {
    /// Absolute path the page is mounted at
    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/dashboard",
            Page::MyShows => "/my-shows",
            Page::Calendar => "/calendar",
            Page::Recommendations => "/recommendations",
            Page::TmdbTesting => "/tmdb-testing",
        }
    }

    /// Navbar label
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::MyShows => "My Shows",
            Page::Calendar => "Calendar",
            Page::Recommendations => "Recommendations",
            Page::TmdbTesting => "TMDB Testing",
        }
    }
}

/// Pages shown as navbar tabs. TmdbTesting is reachable only by URL.
pub const NAV_PAGES: [Page; 4] = [
    Page::Dashboard,
    Page::MyShows,
    Page::Calendar,
    Page::Recommendations,
];

/// Alias kept for old bookmarks; redirects into the dashboard.
pub const APP_ALIAS: &str = "/app";

/// Where a path resolves according to the route table
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Resolution {
    Landing,
    Shell(Page),
    /// Redirect that replaces the current history entry
    RedirectReplace(&'static str),
}

/// Resolve a path the way the router does: landing at the root, shell pages
/// under the layout, the `/app` alias, and a catch-all back to the landing
/// page. Total over all inputs.
pub fn resolve_path(path: &str) -> Resolution {
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        return Resolution::Landing;
    }
    if path == APP_ALIAS {
        return Resolution::RedirectReplace(Page::Dashboard.path());
    }
    for page in [
        Page::Dashboard,
        Page::MyShows,
        Page::Calendar,
        Page::Recommendations,
        Page::TmdbTesting,
    ] {
        if path == page.path() {
            return Resolution::Shell(page);
        }
    }
    Resolution::RedirectReplace("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_resolves_to_landing() {
        assert_eq!(resolve_path("/"), Resolution::Landing);
    }

    #[test]
    fn shell_pages_resolve_to_their_views() {
        assert_eq!(resolve_path("/dashboard"), Resolution::Shell(Page::Dashboard));
        assert_eq!(resolve_path("/my-shows"), Resolution::Shell(Page::MyShows));
        assert_eq!(resolve_path("/calendar"), Resolution::Shell(Page::Calendar));
        assert_eq!(
            resolve_path("/recommendations"),
            Resolution::Shell(Page::Recommendations)
        );
        assert_eq!(
            resolve_path("/tmdb-testing"),
            Resolution::Shell(Page::TmdbTesting)
        );
    }

    #[test]
    fn app_alias_redirects_to_dashboard() {
        assert_eq!(
            resolve_path("/app"),
            Resolution::RedirectReplace("/dashboard")
        );
    }

    #[test]
    fn unknown_paths_redirect_to_landing() {
        for path in ["/unknown-page", "/dashboard/extra", "/shows", "/APP"] {
            assert_eq!(resolve_path(path), Resolution::RedirectReplace("/"));
        }
    }

    #[test]
    fn trailing_slash_matches_the_same_route() {
        assert_eq!(resolve_path("/dashboard/"), Resolution::Shell(Page::Dashboard));
        assert_eq!(resolve_path("/app/"), Resolution::RedirectReplace("/dashboard"));
    }

    #[test]
    fn diagnostic_page_is_not_a_navbar_tab() {
        assert!(!NAV_PAGES.contains(&Page::TmdbTesting));
    }
}
