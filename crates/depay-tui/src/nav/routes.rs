/*
[INPUT]:  Application paths and redirect targets
[OUTPUT]: Route constants and redirect URL builders/parsers
[POS]:    Navigation - canonical paths shared by guard and screens
[UPDATE]: When screens move or redirect parameters change
*/

pub const HOME: &str = "/";
pub const LOGIN: &str = "/auth/login";
pub const SIGNUP: &str = "/auth/signup";
pub const SET_PIN: &str = "/auth/set-pin";
pub const VERIFY_PIN: &str = "/auth/verify-pin";
pub const DASHBOARD: &str = "/dashboard";
pub const TRANSACTIONS: &str = "/dashboard/transactions";
pub const PAY: &str = "/pay";

/// Path prefixes that require an authenticated session
pub const GUARDED_PREFIXES: [&str; 3] = ["/dashboard", "/settings", "/pay"];

/// Query parameter carrying the path to continue to after a redirect
pub const REDIRECT_PARAM: &str = "redirectTo";

/// Login URL that returns to `return_to` after authentication
pub fn login_redirect(return_to: &str) -> String {
    with_redirect(LOGIN, return_to)
}

/// PIN check URL that returns to `return_to` after verification
pub fn verify_pin_redirect(return_to: &str) -> String {
    with_redirect(VERIFY_PIN, return_to)
}

fn with_redirect(base: &str, return_to: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(REDIRECT_PARAM, return_to)
        .finish();
    format!("{}?{}", base, query)
}

/// Pull the redirect target out of a `path?query` string, if present
pub fn redirect_target(path_and_query: &str) -> Option<String> {
    let (_, query) = path_and_query.split_once('?')?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == REDIRECT_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// The `path` part of a `path?query` string
pub fn path_only(path_and_query: &str) -> &str {
    path_and_query
        .split_once('?')
        .map(|(path, _)| path)
        .unwrap_or(path_and_query)
}
