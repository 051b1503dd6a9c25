use std::fmt;

use crate::notifications::{Notification, NotificationKind};
use crate::presentation::formatters::Escaped;

pub struct NotificationView<'a> {
    data: &'a Notification,
}

impl<'a> NotificationView<'a> {
    pub fn new(data: &'a Notification) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for NotificationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self.data.kind {
            NotificationKind::Success => "check-circle",
            _ => "exclamation-triangle",
        };
        writeln!(
            f,
            r#"<div id="{}" class="alert alert-{} alert-dismissible fade show position-fixed top-0 start-50 translate-middle-x mt-3" style="z-index: 9999" role="alert">"#,
            self.data.id.element_id(),
            self.data.kind.as_str()
        )?;
        writeln!(f, r#"  <i class="bi bi-{}"></i> {}"#, icon, Escaped(&self.data.message))?;
        writeln!(
            f,
            r#"  <button type="button" class="btn-close" data-bs-dismiss="alert" data-notification-id="{}"></button>"#,
            self.data.id
        )?;
        writeln!(f, "</div>")
    }
}
