//! Headers the backend expects on requests made by the client

/// The cookie the backend keeps its csrf token in
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
/// The header a mutating request has to repeat the csrf token in
pub const CSRF_HEADER: &str = "X-CSRFToken";
/// Marks a request as made by script; sent with every request
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// Find the value of cookie `name` in a `document.cookie` string
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .and_then(|(_, v)| urlencoding::decode(v).ok())
        .map(|v| v.into_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finds_the_token() {
        let cookies = "sessionid=abc; csrftoken=T0k%3Den; theme=dark";
        assert_eq!(cookie_value(cookies, CSRF_COOKIE_NAME).as_deref(), Some("T0k=en"));
        assert_eq!(cookie_value(cookies, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn missing_cookie() {
        assert_eq!(cookie_value("", CSRF_COOKIE_NAME), None);
        assert_eq!(cookie_value("xcsrftoken=1", CSRF_COOKIE_NAME), None);
    }
}
