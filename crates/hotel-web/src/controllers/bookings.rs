use hotel_storage::{BookingRepository, Clock, RoomRepository, SessionStore};
use hotel_types::{Booking, BookingId, FilterMode, Room, RoomId, User};
use std::rc::Rc;

use super::PageOutcome;
use crate::Error;
use crate::config::SiteConfig;
use crate::document::Document;
use crate::notifications::{NotificationCenter, NotificationId, NotificationKind};
use crate::presentation::formatters::format_price;
use crate::presentation::presenters::{
    compute_stats, present_booking_detail, present_booking_list,
};
use crate::presentation::view_models::{
    BookingDetailViewModel, BookingListViewModel, BookingPageViewModel, BookingStatsViewModel,
};
use crate::presentation::views::{BookingDetailView, BookingListView, NotificationView};

const BOOKINGS_CONTAINER: &str = "bookingsContainer";
const DETAILS_BODY: &str = "detailsBody";
const DETAILS_MODAL: &str = "detailsModal";

const MSG_NOT_SIGNED_IN: &str = "You must sign in to see your bookings";
const MSG_USER_UNAVAILABLE: &str = "Could not load your user details";
const MSG_LOAD_FAILED: &str = "Could not load your bookings";
const MSG_BOOKING_NOT_FOUND: &str = "Booking not found";
const MSG_ROOM_UNAVAILABLE: &str = "Room information is not available";

/// Events the bookings page reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum BookingPageEvent {
    Ready,
    FilterChanged(FilterMode),
    /// A filter radio input changed; carries the input's element id
    FilterInputChanged(String),
    ViewDetails(BookingId),
    DismissNotification(NotificationId),
    /// Periodic wake-up used to expire notifications
    Tick,
}

/// State and behaviour of the "my bookings" page.
///
/// Owns the in-memory booking list and the active filter. Every load
/// replaces the list; filter changes re-render from memory.
pub struct BookingListController<R, D> {
    session: SessionStore,
    repo: R,
    document: D,
    clock: Rc<dyn Clock>,
    site: SiteConfig,
    all_bookings: Vec<Booking>,
    filter: FilterMode,
    notifications: NotificationCenter,
}

impl<R, D> BookingListController<R, D>
where
    R: BookingRepository + RoomRepository,
    D: Document,
{
    pub fn new(
        session: SessionStore,
        repo: R,
        document: D,
        clock: Rc<dyn Clock>,
        site: SiteConfig,
    ) -> Self {
        let notifications = NotificationCenter::new(site.notifications.timeout_ms);
        Self {
            session,
            repo,
            document,
            clock,
            site,
            all_bookings: Vec::new(),
            filter: FilterMode::default(),
            notifications,
        }
    }

    pub fn handle(&mut self, event: BookingPageEvent) -> PageOutcome {
        match event {
            BookingPageEvent::Ready => return self.init(),
            BookingPageEvent::FilterChanged(mode) => self.set_filter(mode),
            BookingPageEvent::FilterInputChanged(input_id) => {
                match FilterMode::from_input_id(&input_id) {
                    Some(mode) => self.set_filter(mode),
                    None => tracing::debug!(input_id = %input_id, "ignoring unknown filter input"),
                }
            }
            BookingPageEvent::ViewDetails(id) => {
                self.show_details(&id);
            }
            BookingPageEvent::DismissNotification(id) => self.dismiss_notification(id),
            BookingPageEvent::Tick => self.expire_notifications(),
        }
        PageOutcome::Continue
    }

    /// Page-ready entry point: session check, profile, first load.
    pub fn init(&mut self) -> PageOutcome {
        let user = match self.verify_authentication() {
            Ok(user) => user,
            Err(outcome) => return outcome,
        };
        self.setup_profile(&user);
        self.reload();
        PageOutcome::Continue
    }

    fn verify_authentication(&mut self) -> Result<User, PageOutcome> {
        if !self.session.is_authenticated() {
            tracing::info!("no session, redirecting to login");
            return Err(self.redirect_to_login(MSG_NOT_SIGNED_IN));
        }
        match self.session.current_user() {
            Some(user) => Ok(user),
            None => {
                tracing::warn!("session reported authenticated but user could not be read");
                Err(self.redirect_to_login(MSG_USER_UNAVAILABLE))
            }
        }
    }

    /// Links written by this page are relative to its own directory.
    fn redirect_to_login(&mut self, message: &str) -> PageOutcome {
        self.document.alert(message);
        let url = self.site.pages.login.clone();
        self.document.navigate(&url);
        PageOutcome::Redirected(url)
    }

    fn setup_profile(&mut self, user: &User) {
        self.document.set_text("userName", user.first_name());
        self.document.set_text("profileName", &user.name);
        self.document.set_text("profileEmail", &user.email);
    }

    /// Fetch the user's bookings again, replacing the in-memory list.
    pub fn reload(&mut self) {
        match self.fetch_bookings() {
            Ok(bookings) => {
                tracing::info!(count = bookings.len(), "bookings loaded");
                self.all_bookings = bookings;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load bookings");
                self.all_bookings.clear();
                self.notify(NotificationKind::Danger, MSG_LOAD_FAILED);
            }
        }

        self.update_stats();
        self.render_bookings();
    }

    fn fetch_bookings(&self) -> crate::Result<Vec<Booking>> {
        let user = self.session.current_user().ok_or(Error::NotSignedIn)?;
        Ok(self.repo.user_bookings(&user.id)?)
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
        self.render_bookings();
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.all_bookings
    }

    pub fn stats(&self) -> BookingStatsViewModel {
        compute_stats(&self.all_bookings)
    }

    pub fn list_view_model(&self) -> BookingListViewModel {
        present_booking_list(&self.all_bookings, self.filter, self.clock.now(), |id| {
            self.lookup_room(id)
        })
    }

    pub fn page_view_model(&self) -> BookingPageViewModel {
        BookingPageViewModel {
            stats: self.stats(),
            list: self.list_view_model(),
        }
    }

    fn lookup_room(&self, room_id: &RoomId) -> Option<Room> {
        match self.repo.room_by_id(room_id) {
            Ok(Some(room)) => Some(room),
            Ok(None) => {
                tracing::warn!(room_id = %room_id, "room not found");
                None
            }
            Err(err) => {
                tracing::warn!(room_id = %room_id, error = %err, "room lookup failed");
                None
            }
        }
    }

    fn update_stats(&mut self) {
        let stats = self.stats();
        self.document
            .set_text("totalBookings", &stats.total_bookings.to_string());
        self.document
            .set_text("activeBookings", &stats.active_bookings.to_string());
        self.document.set_text(
            "totalSpent",
            &format_price(stats.total_spent, &self.site.currency),
        );
    }

    fn render_bookings(&mut self) {
        if !self.document.has_element(BOOKINGS_CONTAINER) {
            return;
        }
        let list = self.list_view_model();
        let html = BookingListView::new(&list, &self.site).to_string();
        self.document.set_html(BOOKINGS_CONTAINER, &html);
    }

    /// Render the detail view for `id` and open the modal.
    ///
    /// Unknown bookings and unresolvable rooms raise a notification instead.
    pub fn show_details(&mut self, id: &BookingId) -> Option<BookingDetailViewModel> {
        let Some(booking) = self.all_bookings.iter().find(|b| &b.id == id) else {
            tracing::warn!(booking_id = %id, "details requested for unknown booking");
            self.notify(NotificationKind::Danger, MSG_BOOKING_NOT_FOUND);
            return None;
        };
        let Some(room) = self.lookup_room(&booking.room_id) else {
            self.notify(NotificationKind::Danger, MSG_ROOM_UNAVAILABLE);
            return None;
        };

        let detail = present_booking_detail(booking, &room);
        let html = BookingDetailView::new(&detail, &self.site).to_string();
        self.document.set_html(DETAILS_BODY, &html);
        self.document.show_modal(DETAILS_MODAL);
        Some(detail)
    }

    fn notify(&mut self, kind: NotificationKind, message: &str) {
        let now = self.clock.now();
        let notification = self.notifications.push(kind, message, now);
        let html = NotificationView::new(notification).to_string();
        let element_id = notification.id.element_id();
        self.document.append_html(&element_id, &html);
    }

    pub fn dismiss_notification(&mut self, id: NotificationId) {
        self.notifications.dismiss(id);
        self.document.remove_element(&id.element_id());
    }

    pub fn expire_notifications(&mut self) {
        for id in self.notifications.expire(self.clock.now()) {
            self.document.remove_element(&id.element_id());
        }
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }
}
