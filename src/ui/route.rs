//! Navigation routes shown in the sidebar.

use egui_phosphor::regular::{BOOK_OPEN, CHART_BAR, GEAR, HOUSE, USERS};

/// One page of the application. Each route maps to exactly one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Route {
    #[default]
    Dashboard,
    Employees,
    Training,
    Analytics,
    Settings,
}

impl Route {
    /// Sidebar order.
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Employees,
        Route::Training,
        Route::Analytics,
        Route::Settings,
    ];

    /// Get the display name for the route.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Employees => "Employees",
            Route::Training => "Training",
            Route::Analytics => "Analytics",
            Route::Settings => "Settings",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Employees => "/employees",
            Route::Training => "/training",
            Route::Analytics => "/analytics",
            Route::Settings => "/settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard => HOUSE,
            Route::Employees => USERS,
            Route::Training => BOOK_OPEN,
            Route::Analytics => CHART_BAR,
            Route::Settings => GEAR,
        }
    }

    /// Whether this route's sidebar entry is active for `path`.
    ///
    /// The root only matches exactly; every other route matches by prefix.
    pub fn is_active_for(&self, path: &str) -> bool {
        match self {
            Route::Dashboard => path == "/",
            other => path.starts_with(other.path()),
        }
    }

    /// Resolve a location path to its route.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.is_active_for(path))
    }

    /// Parse a `--page` argument given either as a route name
    /// ("employees") or as a location path ("/employees/42").
    pub fn parse_page(arg: &str) -> Result<Route, String> {
        let arg = arg.trim();
        if arg.starts_with('/') {
            return Route::from_path(arg).ok_or_else(|| format!("unknown page path: {arg}"));
        }
        <Route as clap::ValueEnum>::from_str(arg, true)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_route_resolves_from_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_root_matches_exactly() {
        assert!(Route::Dashboard.is_active_for("/"));
        assert!(!Route::Dashboard.is_active_for("/employees"));
    }

    #[test]
    fn test_nested_paths_match_by_prefix() {
        assert_eq!(Route::from_path("/employees/42"), Some(Route::Employees));
        assert_eq!(Route::from_path("/settings/security"), Some(Route::Settings));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(Route::from_path("/payroll"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_parse_page_accepts_names_and_paths() {
        assert_eq!(Route::parse_page("training"), Ok(Route::Training));
        assert_eq!(Route::parse_page("Analytics"), Ok(Route::Analytics));
        assert_eq!(Route::parse_page("/"), Ok(Route::Dashboard));
        assert_eq!(Route::parse_page("/employees/42"), Ok(Route::Employees));
        assert!(Route::parse_page("/payroll").is_err());
        assert!(Route::parse_page("payroll").is_err());
    }

    #[test]
    fn test_titles_are_distinct() {
        let titles: HashSet<_> = Route::ALL.iter().map(|r| r.title()).collect();
        assert_eq!(titles.len(), Route::ALL.len());

        let paths: HashSet<_> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Route::ALL.len());
    }
}
