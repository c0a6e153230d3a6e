use poem::{handler, web::Html};

// Embedded at compile time so the binary is self-contained.
const PAGE: &str = include_str!("../assets/index.html");

/// Application shell served at the root route.
#[handler]
pub fn app_shell() -> Html<&'static str> {
    Html(PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_has_mount_point() {
        assert!(PAGE.contains("id=\"root\""));
    }
}
