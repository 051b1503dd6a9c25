use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UserMenuViewModel {
    Authenticated {
        first_name: String,
        is_admin: bool,
        /// `"../"` for pages under `/html/`, empty otherwise
        link_prefix: String,
    },
    Anonymous {
        link_prefix: String,
    },
}
