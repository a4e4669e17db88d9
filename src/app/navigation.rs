//! Navigation - Console Routes
//!
//! Maps addresses to the screens of the console.

use crate::constants::{ACCOUNT_PATH, USERS_PATH};

/// Screens reachable by address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// User list
    #[default]
    Users,
    /// New user form
    UserCreate,
    /// Edit form of one user
    UserEdit { login: String },
    /// Signed-in account profile
    Profile,
}

impl Route {
    /// Address of the route (without query)
    pub fn path(&self) -> String {
        match self {
            Route::Users => USERS_PATH.to_string(),
            Route::UserCreate => format!("{USERS_PATH}create"),
            Route::UserEdit { login } => format!("{USERS_PATH}{login}"),
            Route::Profile => format!("{ACCOUNT_PATH}profile"),
        }
    }

    /// Route for an address; the query string is ignored
    pub fn parse(href: &str) -> Option<Self> {
        let path = href.split_once('?').map_or(href, |(path, _)| path);
        if path == format!("{ACCOUNT_PATH}profile") {
            return Some(Route::Profile);
        }
        let rest = path.strip_prefix(USERS_PATH).or_else(|| {
            // "/admin/users" without the trailing slash
            (path == USERS_PATH.trim_end_matches('/')).then_some("")
        })?;
        match rest.trim_end_matches('/') {
            "" => Some(Route::Users),
            "create" => Some(Route::UserCreate),
            login if !login.contains('/') => Some(Route::UserEdit {
                login: login.to_string(),
            }),
            _ => None,
        }
    }

    /// Translation key of the screen title
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Users | Route::UserCreate | Route::UserEdit { .. } => "users-title",
            Route::Profile => "profile-title",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in [
            Route::Users,
            Route::UserCreate,
            Route::UserEdit {
                login: "jdoe".to_string(),
            },
            Route::Profile,
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_parse_ignores_query_and_unknown_paths() {
        assert_eq!(Route::parse("/admin/users/?page=2"), Some(Route::Users));
        assert_eq!(Route::parse("/admin/users"), Some(Route::Users));
        assert_eq!(Route::parse("/admin/users/a/b"), None);
        assert_eq!(Route::parse("/elsewhere"), None);
    }
}
