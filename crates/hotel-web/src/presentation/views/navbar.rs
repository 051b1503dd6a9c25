use std::fmt;

use crate::config::SiteConfig;
use crate::presentation::formatters::Escaped;
use crate::presentation::view_models::UserMenuViewModel;

/// Element id of the logout link inside the user menu
pub const LOGOUT_LINK_ID: &str = "navLogoutBtn";

pub struct UserMenuView<'a> {
    data: &'a UserMenuViewModel,
    site: &'a SiteConfig,
}

impl<'a> UserMenuView<'a> {
    pub fn new(data: &'a UserMenuViewModel, site: &'a SiteConfig) -> Self {
        Self { data, site }
    }

    fn render_authenticated(
        &self,
        f: &mut fmt::Formatter<'_>,
        first_name: &str,
        is_admin: bool,
        prefix: &str,
    ) -> fmt::Result {
        let pages = &self.site.pages;
        writeln!(f, r#"<div class="nav-item dropdown">"#)?;
        writeln!(
            f,
            r##"  <a class="nav-link dropdown-toggle" href="#" id="userDropdown" role="button" data-bs-toggle="dropdown" aria-expanded="false">"##
        )?;
        writeln!(f, r#"    <i class="bi bi-person-circle"></i> {}"#, Escaped(first_name))?;
        writeln!(f, "  </a>")?;
        writeln!(
            f,
            r#"  <ul class="dropdown-menu dropdown-menu-end dropdown-menu-dark" aria-labelledby="userDropdown">"#
        )?;
        writeln!(
            f,
            r#"    <li><a class="dropdown-item" href="{}{}"><i class="bi bi-calendar-check"></i> My bookings</a></li>"#,
            prefix,
            Escaped(&pages.bookings)
        )?;
        if is_admin {
            writeln!(
                f,
                r#"    <li><a class="dropdown-item" href="{}{}"><i class="bi bi-gear"></i> Administration</a></li>"#,
                prefix,
                Escaped(&pages.admin)
            )?;
        }
        writeln!(f, r#"    <li><hr class="dropdown-divider"></li>"#)?;
        writeln!(
            f,
            r##"    <li><a class="dropdown-item" href="#" id="{}"><i class="bi bi-box-arrow-right"></i> Log out</a></li>"##,
            LOGOUT_LINK_ID
        )?;
        writeln!(f, "  </ul>")?;
        writeln!(f, "</div>")
    }
}

impl<'a> fmt::Display for UserMenuView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data {
            UserMenuViewModel::Authenticated {
                first_name,
                is_admin,
                link_prefix,
            } => self.render_authenticated(f, first_name, *is_admin, link_prefix),
            UserMenuViewModel::Anonymous { link_prefix } => writeln!(
                f,
                r#"<a class="nav-link" href="{}{}"><i class="bi bi-person-circle"></i> Sign in</a>"#,
                link_prefix,
                Escaped(&self.site.pages.login)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(data: &UserMenuViewModel) -> String {
        UserMenuView::new(data, &SiteConfig::default()).to_string()
    }

    #[test]
    fn test_admin_sees_admin_link() {
        let html = render(&UserMenuViewModel::Authenticated {
            first_name: "Lucía".to_string(),
            is_admin: true,
            link_prefix: "../".to_string(),
        });

        assert!(html.contains("Lucía"));
        assert!(html.contains(r#"href="../mis-reservas.html""#));
        assert!(html.contains(r#"href="../admin.html""#));
        assert!(html.contains(LOGOUT_LINK_ID));
    }

    #[test]
    fn test_ordinary_user_has_no_admin_link() {
        let html = render(&UserMenuViewModel::Authenticated {
            first_name: "<Bo>".to_string(),
            is_admin: false,
            link_prefix: String::new(),
        });

        assert!(html.contains("&lt;Bo&gt;"));
        assert!(!html.contains("admin.html"));
    }

    #[test]
    fn test_anonymous_sees_login_link() {
        let html = render(&UserMenuViewModel::Anonymous {
            link_prefix: String::new(),
        });

        assert!(html.contains(r#"href="login.html""#));
        assert!(!html.contains(LOGOUT_LINK_ID));
    }
}
