use hotel_storage::{keys, SessionStore, StorageChange, StorageChannel, Subscription};
use std::cell::RefCell;
use std::rc::Rc;

use super::PageOutcome;
use crate::config::SiteConfig;
use crate::document::Document;
use crate::presentation::presenters::{link_prefix, present_user_menu};
use crate::presentation::view_models::UserMenuViewModel;
use crate::presentation::views::UserMenuView;

const USER_MENU_ITEM: &str = "userMenuItem";
const MSG_CONFIRM_LOGOUT: &str = "Are you sure you want to log out?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavbarEvent {
    Ready,
    /// `persisted` is true when the page was restored from the back/forward cache
    PageShow { persisted: bool },
    StorageChanged(StorageChange),
    LogoutRequested,
}

/// User menu in the shared navigation bar.
///
/// Stateless apart from its collaborators: every render re-reads the
/// session, so repeated renders with an unchanged session are identical.
pub struct NavbarController<D> {
    session: SessionStore,
    document: D,
    site: SiteConfig,
}

impl<D: Document> NavbarController<D> {
    pub fn new(session: SessionStore, document: D, site: SiteConfig) -> Self {
        Self {
            session,
            document,
            site,
        }
    }

    pub fn handle(&mut self, event: NavbarEvent) -> PageOutcome {
        match event {
            NavbarEvent::Ready => {
                self.update_user_menu();
            }
            NavbarEvent::PageShow { persisted } => {
                if persisted {
                    self.update_user_menu();
                }
            }
            NavbarEvent::StorageChanged(change) => {
                if keys::affects_navbar(change.key.as_deref()) {
                    self.update_user_menu();
                }
            }
            NavbarEvent::LogoutRequested => return self.logout(),
        }
        PageOutcome::Continue
    }

    pub fn user_menu(&self) -> UserMenuViewModel {
        present_user_menu(
            self.session.current_user().as_ref(),
            &self.document.location_path(),
        )
    }

    /// Re-render the user menu from the current session.
    ///
    /// Returns `None` when the page has no menu slot.
    pub fn update_user_menu(&mut self) -> Option<UserMenuViewModel> {
        if !self.document.has_element(USER_MENU_ITEM) {
            tracing::warn!("#{} not found on page", USER_MENU_ITEM);
            return None;
        }
        let menu = self.user_menu();
        let html = UserMenuView::new(&menu, &self.site).to_string();
        self.document.set_html(USER_MENU_ITEM, &html);
        Some(menu)
    }

    /// Ask for confirmation, then clear the session and go home.
    pub fn logout(&mut self) -> PageOutcome {
        if !self.document.confirm(MSG_CONFIRM_LOGOUT) {
            return PageOutcome::Continue;
        }
        if let Err(err) = self.session.logout() {
            tracing::error!(error = %err, "failed to clear session keys");
        }
        let url = format!(
            "{}{}",
            link_prefix(&self.document.location_path()),
            self.site.pages.home
        );
        self.document.navigate(&url);
        PageOutcome::Redirected(url)
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }
}

impl<D: Document + 'static> NavbarController<D> {
    /// Re-render whenever another tab changes the session keys.
    ///
    /// The subscription holds only a weak handle, so dropping the controller
    /// silently ends it.
    pub fn subscribe(controller: &Rc<RefCell<Self>>, channel: &StorageChannel) -> Subscription {
        let weak = Rc::downgrade(controller);
        channel.subscribe(move |change| {
            if let Some(controller) = weak.upgrade() {
                controller
                    .borrow_mut()
                    .handle(NavbarEvent::StorageChanged(change.clone()));
            }
        })
    }
}
