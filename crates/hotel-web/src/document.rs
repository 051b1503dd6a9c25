use std::collections::{BTreeMap, VecDeque};

/// The slice of the page a controller may touch.
///
/// Element writes return `false` when the element does not exist; callers
/// treat that as "optional element absent" and carry on.
pub trait Document {
    /// Path of the current page, e.g. `/html/mis-reservas.html`
    fn location_path(&self) -> String;

    fn has_element(&self, id: &str) -> bool;
    fn set_text(&mut self, id: &str, text: &str) -> bool;
    fn set_html(&mut self, id: &str, html: &str) -> bool;

    /// Append a fragment at the end of the body as element `id`
    fn append_html(&mut self, id: &str, html: &str);
    /// Removing an element that is already gone is a no-op returning `false`
    fn remove_element(&mut self, id: &str) -> bool;

    fn show_modal(&mut self, id: &str) -> bool;

    /// Blocking message box
    fn alert(&mut self, message: &str);
    /// Blocking yes/no question
    fn confirm(&mut self, message: &str) -> bool;
    fn navigate(&mut self, url: &str);
}

/// Content written into an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Empty,
    Text(String),
    Html(String),
}

impl Content {
    pub fn as_str(&self) -> &str {
        match self {
            Content::Empty => "",
            Content::Text(s) | Content::Html(s) => s,
        }
    }
}

/// In-process page used for tests and for rendering outside a browser.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    path: String,
    elements: BTreeMap<String, Content>,
    appended: Vec<(String, String)>,
    modals: BTreeMap<String, bool>,
    alerts: Vec<String>,
    confirmations: Vec<String>,
    confirm_answers: VecDeque<bool>,
    navigations: Vec<String>,
}

impl MemoryDocument {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            elements: BTreeMap::new(),
            appended: Vec::new(),
            modals: BTreeMap::new(),
            alerts: Vec::new(),
            confirmations: Vec::new(),
            confirm_answers: VecDeque::new(),
            navigations: Vec::new(),
        }
    }

    /// Page with the elements of the bookings page
    pub fn bookings_page() -> Self {
        Self::new("/html/mis-reservas.html")
            .with_elements(&[
                "userName",
                "profileName",
                "profileEmail",
                "totalBookings",
                "activeBookings",
                "totalSpent",
                "bookingsContainer",
                "detailsBody",
                "userMenuItem",
            ])
            .with_modal("detailsModal")
    }

    pub fn with_elements(mut self, ids: &[&str]) -> Self {
        for id in ids {
            self.elements.insert(id.to_string(), Content::Empty);
        }
        self
    }

    pub fn with_modal(mut self, id: &str) -> Self {
        self.modals.insert(id.to_string(), false);
        self
    }

    /// Queue the answer for the next `confirm` call (unanswered prompts decline)
    pub fn answer_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    pub fn content(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(Content::as_str)
    }

    pub fn element(&self, id: &str) -> Option<&Content> {
        self.elements.get(id)
    }

    /// Fragments appended to the body, in order, as `(id, html)`
    pub fn appended(&self) -> &[(String, String)] {
        &self.appended
    }

    pub fn is_modal_open(&self, id: &str) -> bool {
        self.modals.get(id).copied().unwrap_or(false)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn confirmations(&self) -> &[String] {
        &self.confirmations
    }

    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    pub fn last_navigation(&self) -> Option<&str> {
        self.navigations.last().map(String::as_str)
    }
}

impl Document for MemoryDocument {
    fn location_path(&self) -> String {
        self.path.clone()
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id) || self.appended.iter().any(|(el, _)| el == id)
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(content) => {
                *content = Content::Text(text.to_string());
                true
            }
            None => false,
        }
    }

    fn set_html(&mut self, id: &str, html: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(content) => {
                *content = Content::Html(html.to_string());
                true
            }
            None => false,
        }
    }

    fn append_html(&mut self, id: &str, html: &str) {
        self.appended.push((id.to_string(), html.to_string()));
    }

    fn remove_element(&mut self, id: &str) -> bool {
        let before = self.appended.len();
        self.appended.retain(|(el, _)| el != id);
        if self.appended.len() != before {
            return true;
        }
        self.elements.remove(id).is_some()
    }

    fn show_modal(&mut self, id: &str) -> bool {
        match self.modals.get_mut(id) {
            Some(open) => {
                *open = true;
                true
            }
            None => false,
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.confirm_answers.pop_front().unwrap_or(false)
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_writes_are_skipped() {
        let mut doc = MemoryDocument::new("/index.html").with_elements(&["a"]);

        assert!(doc.set_text("a", "hi"));
        assert!(!doc.set_text("b", "hi"));
        assert_eq!(doc.content("a"), Some("hi"));
        assert_eq!(doc.content("b"), None);
    }

    #[test]
    fn test_remove_appended_is_idempotent() {
        let mut doc = MemoryDocument::new("/index.html");
        doc.append_html("n-1", "<div></div>");

        assert!(doc.remove_element("n-1"));
        assert!(!doc.remove_element("n-1"));
        assert!(doc.appended().is_empty());
    }

    #[test]
    fn test_confirm_defaults_to_decline() {
        let mut doc = MemoryDocument::new("/index.html");
        doc.answer_confirm(true);

        assert!(doc.confirm("first?"));
        assert!(!doc.confirm("second?"));
        assert_eq!(doc.confirmations().len(), 2);
    }
}
