/*
[INPUT]:  A requested path and the current cookie jar
[OUTPUT]: Allow, or a redirect into the auth flow
[POS]:    Navigation - access control in front of protected screens
[UPDATE]: When protected prefixes or verification rules change
*/

use depay_adapter::session::cookies::{CookieJar, AUTH_TOKEN};

use crate::nav::routes;

/// Outcome of checking a navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(String),
}

/// `path` matches `prefix` exactly or as a parent directory
fn matches_prefix(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn is_guarded(path: &str) -> bool {
    routes::GUARDED_PREFIXES
        .iter()
        .any(|prefix| matches_prefix(path, prefix))
}

/// Decide whether `path` may be entered with the given cookies
///
/// Unguarded paths always pass. Guarded paths need an auth token;
/// the dashboard additionally needs a live PIN verification marker.
pub fn evaluate(path: &str, cookies: &CookieJar) -> RouteDecision {
    let path = routes::path_only(path);
    if !is_guarded(path) {
        return RouteDecision::Allow;
    }

    if !cookies.contains(AUTH_TOKEN) {
        tracing::debug!(path, "unauthenticated request, redirecting to login");
        return RouteDecision::Redirect(routes::login_redirect(path));
    }

    if matches_prefix(path, routes::DASHBOARD) && !cookies.is_pin_verified() {
        tracing::debug!(path, "PIN not verified, redirecting to verification");
        return RouteDecision::Redirect(routes::verify_pin_redirect(path));
    }

    RouteDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jar_with_token() -> CookieJar {
        let mut jar = CookieJar::default();
        jar.set_auth_token("jwt-token");
        jar
    }

    fn jar_with_token_and_pin() -> CookieJar {
        let mut jar = jar_with_token();
        jar.mark_pin_verified();
        jar
    }

    #[test]
    fn test_unauthenticated_dashboard_redirects_to_login() {
        let jar = CookieJar::default();
        assert_eq!(
            evaluate("/dashboard", &jar),
            RouteDecision::Redirect("/auth/login?redirectTo=%2Fdashboard".to_string())
        );
    }

    #[test]
    fn test_authenticated_without_pin_redirects_to_verification() {
        let jar = jar_with_token();
        assert_eq!(
            evaluate("/dashboard/wallets", &jar),
            RouteDecision::Redirect(
                "/auth/verify-pin?redirectTo=%2Fdashboard%2Fwallets".to_string()
            )
        );
    }

    #[test]
    fn test_authenticated_and_verified_passes() {
        let jar = jar_with_token_and_pin();
        assert_eq!(evaluate("/dashboard", &jar), RouteDecision::Allow);
        assert_eq!(
            evaluate("/dashboard/transactions", &jar),
            RouteDecision::Allow
        );
    }

    #[test]
    fn test_pin_gate_only_applies_to_dashboard() {
        let jar = jar_with_token();
        assert_eq!(evaluate("/settings", &jar), RouteDecision::Allow);
        assert_eq!(evaluate("/pay/confirm", &jar), RouteDecision::Allow);
    }

    #[test]
    fn test_guarded_prefixes_require_token() {
        let jar = CookieJar::default();
        for path in ["/settings", "/settings/profile", "/pay", "/pay/confirm"] {
            match evaluate(path, &jar) {
                RouteDecision::Redirect(url) => {
                    assert!(url.starts_with("/auth/login?redirectTo="), "{}", url)
                }
                RouteDecision::Allow => panic!("{} should be guarded", path),
            }
        }
    }

    #[test]
    fn test_unguarded_paths_always_pass() {
        let jar = CookieJar::default();
        assert_eq!(evaluate("/", &jar), RouteDecision::Allow);
        assert_eq!(evaluate("/about", &jar), RouteDecision::Allow);
        assert_eq!(evaluate("/auth/login", &jar), RouteDecision::Allow);
    }

    #[test]
    fn test_prefix_match_requires_segment_boundary() {
        let jar = CookieJar::default();
        assert_eq!(evaluate("/dashboards", &jar), RouteDecision::Allow);
        assert_eq!(evaluate("/payments", &jar), RouteDecision::Allow);
    }

    #[test]
    fn test_query_string_is_ignored_for_matching() {
        let jar = jar_with_token_and_pin();
        assert_eq!(evaluate("/dashboard?tab=recent", &jar), RouteDecision::Allow);
    }

    #[test]
    fn test_pin_marker_must_be_true() {
        let mut jar = jar_with_token();
        jar.set("pinVerified", "1", "/", None);
        match evaluate("/dashboard", &jar) {
            RouteDecision::Redirect(url) => assert!(url.starts_with("/auth/verify-pin")),
            RouteDecision::Allow => panic!("stale marker should not pass"),
        }
    }

    #[test]
    fn test_expired_pin_marker_redirects_again() {
        use depay_adapter::session::cookies::Cookie;

        let mut jar = jar_with_token();
        jar.insert(
            "pinVerified",
            Cookie {
                value: "true".to_string(),
                path: "/".to_string(),
                expires_at: Some(chrono::Utc::now() - chrono::Duration::seconds(10)),
            },
        );
        match evaluate("/dashboard", &jar) {
            RouteDecision::Redirect(url) => assert!(url.starts_with("/auth/verify-pin")),
            RouteDecision::Allow => panic!("expired marker should not pass"),
        }
    }
}
