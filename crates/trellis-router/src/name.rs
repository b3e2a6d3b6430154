//! Route-name inference from handler identity or URL paths.

use crate::handler::RouteHandler;

/// Derive a dotted route name from a handler's display name.
///
/// Strips a trailing `Route` marker, then converts capitalized word
/// boundaries into dot-separated lowercase segments:
/// `UserEditRoute` -> `user.edit`.
///
/// Returns `None` when nothing is left to name the route with, so callers
/// fall through to path inference.
pub fn route_name_from_handler(handler: &dyn RouteHandler) -> Option<String> {
    let display = handler.handler_name();
    let base = display.strip_suffix("Route").unwrap_or(display);

    if base.is_empty() {
        return None;
    }

    let mut name = String::with_capacity(base.len() + 4);
    for (index, character) in base.chars().enumerate() {
        if index == 0 {
            name.extend(character.to_lowercase());
        } else if character.is_uppercase() {
            name.push('.');
            name.extend(character.to_lowercase());
        } else {
            name.push(character);
        }
    }

    Some(name)
}

/// Derive a dotted route name from a URL path.
///
/// Strips the leading `/`, turns each `/` into `.`, and drops `:`
/// dynamic-segment markers: `/users/:id/edit` -> `users.id.edit`.
pub fn route_name_from_path(path: &str) -> String {
    let target = path.strip_prefix('/').unwrap_or(path);

    target.replace('/', ".").replace(':', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NamedRoute(&'static str);

    impl RouteHandler for NamedRoute {
        fn handler_name(&self) -> &str {
            self.0
        }
    }

    // === Handler Name Inference Tests ===

    #[test]
    fn test_handler_name_strips_route_suffix() {
        let name = route_name_from_handler(&NamedRoute("UserEditRoute"));

        assert_eq!(name.as_deref(), Some("user.edit"));
    }

    #[test]
    fn test_handler_name_single_word() {
        let name = route_name_from_handler(&NamedRoute("UsersRoute"));

        assert_eq!(name.as_deref(), Some("users"));
    }

    #[test]
    fn test_handler_name_without_suffix() {
        let name = route_name_from_handler(&NamedRoute("AdminDashboard"));

        assert_eq!(name.as_deref(), Some("admin.dashboard"));
    }

    #[test]
    fn test_handler_name_bare_marker_falls_through() {
        assert_eq!(route_name_from_handler(&NamedRoute("Route")), None);
    }

    // === Path Inference Tests ===

    #[test]
    fn test_path_with_dynamic_segment() {
        assert_eq!(route_name_from_path("/users/:id/edit"), "users.id.edit");
    }

    #[test]
    fn test_path_without_leading_slash() {
        assert_eq!(route_name_from_path("users/all"), "users.all");
    }

    #[test]
    fn test_root_path() {
        assert_eq!(route_name_from_path("/"), "");
    }
}
