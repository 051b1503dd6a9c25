use std::fmt;

use super::{status_icon, status_label};
use crate::config::SiteConfig;
use crate::presentation::formatters::{format_date, format_price, Escaped};
use crate::presentation::view_models::{
    BookingCardViewModel, BookingListViewModel, BookingSummaryViewModel, StayBadge,
};

// --------------------------------------------------------
// Booking List View
// --------------------------------------------------------

pub struct BookingListView<'a> {
    data: &'a BookingListViewModel,
    site: &'a SiteConfig,
}

impl<'a> BookingListView<'a> {
    pub fn new(data: &'a BookingListViewModel, site: &'a SiteConfig) -> Self {
        Self { data, site }
    }

    fn render_missing_room(
        &self,
        f: &mut fmt::Formatter<'_>,
        booking_id: &str,
        room_id: &str,
    ) -> fmt::Result {
        writeln!(f, r#"<div class="booking-card" data-booking-id="{}">"#, Escaped(booking_id))?;
        writeln!(f, r#"  <div class="booking-header bg-danger text-white">"#)?;
        writeln!(
            f,
            "    Error: room not found for booking #{} (room ID: {})",
            Escaped(booking_id),
            Escaped(room_id)
        )?;
        writeln!(f, "  </div>")?;
        writeln!(f, "</div>")
    }

    fn render_card(&self, f: &mut fmt::Formatter<'_>, card: &BookingSummaryViewModel) -> fmt::Result {
        let id = Escaped(&card.booking_id);
        let room_name = Escaped(&card.room_name);

        writeln!(f, r#"<div class="booking-card" data-booking-id="{}">"#, id)?;
        writeln!(
            f,
            r#"  <div class="booking-header d-flex justify-content-between align-items-center flex-wrap gap-2">"#
        )?;
        writeln!(f, "    <div>")?;
        writeln!(f, r#"      <h5 class="mb-1">{}</h5>"#, room_name)?;
        writeln!(f, "      <small>Booking #{}</small>", id)?;
        writeln!(f, "    </div>")?;
        writeln!(
            f,
            r#"    <span class="booking-status status-{}"><i class="bi bi-{}"></i> {}</span>"#,
            card.status.as_str(),
            status_icon(card.status),
            status_label(card.status)
        )?;
        writeln!(f, "  </div>")?;

        writeln!(f, r#"  <div class="booking-body row">"#)?;
        writeln!(f, r#"    <div class="col-md-4 mb-3 mb-md-0">"#)?;
        writeln!(
            f,
            r#"      <img src="{}{}" alt="{}" class="booking-image" onerror="this.src='{}/400/300?random={}'">"#,
            Escaped(&self.site.assets.room_images),
            Escaped(&card.room_image),
            room_name,
            Escaped(&self.site.assets.placeholder_base),
            id
        )?;
        writeln!(f, "    </div>")?;
        writeln!(f, r#"    <div class="col-md-8">"#)?;
        self.render_info(f, card)?;
        writeln!(f, "    </div>")?;
        writeln!(f, "  </div>")?;
        writeln!(f, "</div>")
    }

    fn render_info(&self, f: &mut fmt::Formatter<'_>, card: &BookingSummaryViewModel) -> fmt::Result {
        let rows = [
            ("calendar-check", "Check-in", format_date(card.check_in)),
            ("calendar-x", "Check-out", format_date(card.check_out)),
            ("people", "Guests", card.guests.to_string()),
        ];
        for (icon, label, value) in rows {
            writeln!(
                f,
                r#"      <div class="info-row"><i class="bi bi-{} text-gold"></i> {}: <strong>{}</strong></div>"#,
                icon,
                label,
                Escaped(value)
            )?;
        }
        writeln!(
            f,
            r#"      <div class="info-row"><i class="bi bi-currency-dollar text-gold"></i> Total: <strong class="text-gold">{}</strong></div>"#,
            Escaped(format_price(card.total, &self.site.currency))
        )?;

        writeln!(f, r#"      <div class="mt-3 d-flex gap-2 flex-wrap">"#)?;
        writeln!(
            f,
            r#"        <button class="btn btn-sm btn-outline-dark btn-view-details" data-booking-id="{}"><i class="bi bi-eye"></i> View full details</button>"#,
            Escaped(&card.booking_id)
        )?;
        match card.stay_badge {
            Some(StayBadge::Completed) => writeln!(
                f,
                r#"        <span class="badge bg-success"><i class="bi bi-check-circle"></i> Completed</span>"#
            )?,
            Some(StayBadge::Upcoming) => writeln!(
                f,
                r#"        <span class="badge bg-info"><i class="bi bi-clock"></i> Upcoming</span>"#
            )?,
            None => {}
        }
        writeln!(f, "      </div>")
    }
}

impl<'a> fmt::Display for BookingListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            return write!(f, "{}", EmptyStateView::new(self.site));
        }

        for card in &self.data.cards {
            match card {
                BookingCardViewModel::Booking(summary) => self.render_card(f, summary)?,
                BookingCardViewModel::MissingRoom { booking_id, room_id } => {
                    self.render_missing_room(f, booking_id, room_id)?
                }
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Empty State View
// --------------------------------------------------------

/// Call-to-action shown when the current filter matches nothing
pub struct EmptyStateView<'a> {
    site: &'a SiteConfig,
}

impl<'a> EmptyStateView<'a> {
    pub fn new(site: &'a SiteConfig) -> Self {
        Self { site }
    }
}

impl<'a> fmt::Display for EmptyStateView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<div class="empty-bookings text-center">"#)?;
        writeln!(f, r#"  <i class="bi bi-calendar-x fs-1 text-muted"></i>"#)?;
        writeln!(f, r#"  <h3 class="text-muted">No bookings yet</h3>"#)?;
        writeln!(
            f,
            r#"  <p class="text-muted">Make your first booking and enjoy our luxury suites!</p>"#
        )?;
        writeln!(
            f,
            r#"  <a href="{}" class="btn btn-gold mt-3"><i class="bi bi-plus-circle"></i> New booking</a>"#,
            Escaped(&self.site.pages.new_booking)
        )?;
        writeln!(f, "</div>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_types::{BookingStatus, FilterMode};

    fn summary(status: BookingStatus, stay_badge: Option<StayBadge>) -> BookingSummaryViewModel {
        BookingSummaryViewModel {
            booking_id: "17".to_string(),
            room_name: "Suite <Deluxe>".to_string(),
            room_image: "suite.jpg".to_string(),
            status,
            check_in: "2024-01-10".parse().unwrap(),
            check_out: "2024-01-12".parse().unwrap(),
            guests: 2,
            total: 1250.0,
            stay_badge,
        }
    }

    fn render(cards: Vec<BookingCardViewModel>) -> String {
        let site = SiteConfig::default();
        let list = BookingListViewModel {
            filter: FilterMode::All,
            cards,
        };
        BookingListView::new(&list, &site).to_string()
    }

    #[test]
    fn test_confirmed_card() {
        let html = render(vec![BookingCardViewModel::Booking(summary(
            BookingStatus::Confirmed,
            Some(StayBadge::Upcoming),
        ))]);

        assert!(html.contains("Suite &lt;Deluxe&gt;"));
        assert!(html.contains("Booking #17"));
        assert!(html.contains(r#"class="booking-status status-confirmed""#));
        assert!(html.contains("Jan 10, 2024"));
        assert!(html.contains("$1,250.00"));
        assert!(html.contains("Upcoming"));
        assert!(!html.contains("Completed"));
        assert!(html.contains(r#"src="assets/img/rooms/suite.jpg""#));
    }

    #[test]
    fn test_cancelled_card_has_no_stay_badge() {
        let html = render(vec![BookingCardViewModel::Booking(summary(
            BookingStatus::Cancelled,
            None,
        ))]);

        assert!(html.contains("status-cancelled"));
        assert!(html.contains("Cancelled"));
        assert!(!html.contains("Upcoming"));
        assert!(!html.contains("Completed"));
    }

    #[test]
    fn test_missing_room_card_escapes_ids() {
        let html = render(vec![BookingCardViewModel::MissingRoom {
            booking_id: "5".to_string(),
            room_id: "<R999>".to_string(),
        }]);

        assert!(html.contains("bg-danger"));
        assert!(html.contains("room ID: &lt;R999&gt;"));
        assert!(!html.contains("<R999>"));
    }

    #[test]
    fn test_empty_list_renders_call_to_action() {
        let html = render(Vec::new());

        assert!(html.contains("empty-bookings"));
        assert!(html.contains(r#"href="reservas.html""#));
    }
}
