use axum::{extract::Path, http::Method, response::Html};

use super::templates::send_page;

pub const NOT_POST_PLACEHOLDER: &str = "it's not a POST request";

pub async fn send(method: Method, Path(email): Path<String>) -> Html<String> {
    Html(send_page(send_data(&method, &email)).into_string())
}

/// Only a POST echoes the email back.
pub fn send_data<'a>(method: &Method, email: &'a str) -> &'a str {
    if method == Method::POST {
        email
    } else {
        NOT_POST_PLACEHOLDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_echoes_email() {
        assert_eq!(send_data(&Method::POST, "a@b.com"), "a@b.com");
    }

    #[test]
    fn other_methods_get_placeholder() {
        assert_eq!(send_data(&Method::GET, "a@b.com"), NOT_POST_PLACEHOLDER);
        assert_eq!(send_data(&Method::PUT, "a@b.com"), NOT_POST_PLACEHOLDER);
    }
}
