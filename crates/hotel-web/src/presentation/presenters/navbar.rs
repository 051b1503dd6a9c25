use hotel_types::User;

use crate::presentation::view_models::UserMenuViewModel;

/// Link prefix for the page at `path`: pages under `/html/` link one level up.
pub fn link_prefix(path: &str) -> &'static str {
    if path.contains("/html/") { "../" } else { "" }
}

pub fn present_user_menu(user: Option<&User>, page_path: &str) -> UserMenuViewModel {
    let link_prefix = link_prefix(page_path).to_string();

    match user {
        Some(user) => UserMenuViewModel::Authenticated {
            first_name: user.first_name().to_string(),
            is_admin: user.is_admin(),
            link_prefix,
        },
        None => UserMenuViewModel::Anonymous { link_prefix },
    }
}
