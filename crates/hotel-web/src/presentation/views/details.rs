use std::fmt;

use super::status_label;
use crate::config::SiteConfig;
use crate::presentation::formatters::{format_date, format_price, format_timestamp, Escaped};
use crate::presentation::view_models::BookingDetailViewModel;

pub struct BookingDetailView<'a> {
    data: &'a BookingDetailViewModel,
    site: &'a SiteConfig,
}

impl<'a> BookingDetailView<'a> {
    pub fn new(data: &'a BookingDetailViewModel, site: &'a SiteConfig) -> Self {
        Self { data, site }
    }

    fn price(&self, amount: f64) -> Escaped<String> {
        Escaped(format_price(amount, &self.site.currency))
    }

    fn render_info(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.data;
        writeln!(
            f,
            r#"    <h6 class="mt-4 mb-3 text-gold"><i class="bi bi-info-circle"></i> Booking information</h6>"#
        )?;
        writeln!(f, r#"    <ul class="list-unstyled">"#)?;
        let rows = [
            ("hash", "ID", d.booking_id.clone()),
            ("calendar-check", "Check-in", format_date(d.check_in)),
            ("calendar-x", "Check-out", format_date(d.check_out)),
            ("moon-stars", "Nights", d.nights.to_string()),
            ("people", "Guests", d.guests.to_string()),
            ("clock", "Booked on", format_timestamp(d.created_at)),
        ];
        for (icon, label, value) in rows {
            writeln!(
                f,
                r#"      <li><i class="bi bi-{} text-gold"></i> <strong>{}:</strong> {}</li>"#,
                icon,
                label,
                Escaped(value)
            )?;
        }
        writeln!(
            f,
            r#"      <li><i class="bi bi-info-circle text-gold"></i> <strong>Status:</strong> <span class="booking-status status-{}">{}</span></li>"#,
            d.status.as_str(),
            status_label(d.status)
        )?;
        writeln!(f, "    </ul>")
    }

    fn render_services(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"    <h6 class="mt-4 mb-3 text-gold"><i class="bi bi-star"></i> Included services</h6>"#
        )?;
        writeln!(f, r#"    <div class="mb-3">"#)?;
        for service in &self.data.services {
            writeln!(
                f,
                r#"      <span class="service-badge"><i class="bi bi-check2"></i> {}</span>"#,
                Escaped(service)
            )?;
        }
        writeln!(f, "    </div>")
    }

    fn render_cost(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cost = &self.data.cost;
        writeln!(f, r#"    <div class="alert alert-info">"#)?;
        writeln!(
            f,
            r#"      <h6 class="alert-heading"><i class="bi bi-currency-dollar"></i> Cost details</h6>"#
        )?;
        writeln!(
            f,
            r#"      <div class="d-flex justify-content-between mb-1"><span>Price per night:</span><strong>{}</strong></div>"#,
            self.price(cost.nightly_price)
        )?;
        writeln!(
            f,
            r#"      <div class="d-flex justify-content-between mb-1"><span>Nights ({}):</span><strong>{}</strong></div>"#,
            cost.nights,
            self.price(cost.nights_subtotal)
        )?;
        writeln!(f, "      <hr>")?;
        writeln!(
            f,
            r#"      <div class="d-flex justify-content-between"><span><strong>Total paid:</strong></span><h5 class="text-gold mb-0">{}</h5></div>"#,
            self.price(cost.total_paid)
        )?;
        writeln!(f, "    </div>")
    }
}

impl<'a> fmt::Display for BookingDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.data;
        let room_name = Escaped(&d.room_name);

        writeln!(f, r#"<div class="row">"#)?;
        writeln!(f, r#"  <div class="col-md-6">"#)?;
        writeln!(
            f,
            r#"    <img src="{}{}" class="img-fluid rounded mb-3" alt="{}" onerror="this.src='{}/500/400?random={}'">"#,
            Escaped(&self.site.assets.room_images),
            Escaped(&d.room_image),
            room_name,
            Escaped(&self.site.assets.placeholder_base),
            Escaped(&d.booking_id)
        )?;
        writeln!(f, "  </div>")?;
        writeln!(f, r#"  <div class="col-md-6">"#)?;
        writeln!(f, r#"    <h4 class="mb-3">{}</h4>"#, room_name)?;
        writeln!(f, r#"    <p class="text-muted">{}</p>"#, Escaped(&d.room_description))?;
        self.render_info(f)?;
        self.render_services(f)?;
        self.render_cost(f)?;
        writeln!(f, "  </div>")?;
        writeln!(f, "</div>")?;
        writeln!(f, r#"<div class="modal-footer">"#)?;
        writeln!(
            f,
            r#"  <button type="button" class="btn btn-secondary" data-bs-dismiss="modal"><i class="bi bi-x-circle"></i> Close</button>"#
        )?;
        writeln!(f, "</div>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::CostBreakdownViewModel;
    use chrono::{TimeZone, Utc};
    use hotel_types::BookingStatus;

    fn detail(services: Vec<String>) -> BookingDetailViewModel {
        BookingDetailViewModel {
            booking_id: "b1".to_string(),
            room_name: "Suite".to_string(),
            room_description: "Sea & sky".to_string(),
            room_image: "suite.jpg".to_string(),
            check_in: "2024-01-10".parse().unwrap(),
            check_out: "2024-01-12".parse().unwrap(),
            nights: 2,
            guests: 3,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap(),
            status: BookingStatus::Confirmed,
            services,
            cost: CostBreakdownViewModel {
                nightly_price: 120.0,
                nights: 2,
                nights_subtotal: 240.0,
                total_paid: 199.0,
            },
        }
    }

    #[test]
    fn test_detail_markup() {
        let site = SiteConfig::default();
        let data = detail(vec!["Spa".to_string(), "<WiFi>".to_string()]);
        let html = BookingDetailView::new(&data, &site).to_string();

        assert!(html.contains("Sea &amp; sky"));
        assert!(html.contains("<strong>Nights:</strong> 2"));
        assert!(html.contains("Jan 1, 2024 09:30 UTC"));
        assert!(html.contains("Nights (2):</span><strong>$240.00</strong>"));
        assert!(html.contains(r#"<h5 class="text-gold mb-0">$199.00</h5>"#));
        assert!(html.contains("&lt;WiFi&gt;"));
        assert_eq!(html.matches("service-badge").count(), 2);
    }

    #[test]
    fn test_detail_without_services() {
        let site = SiteConfig::default();
        let data = detail(Vec::new());
        let html = BookingDetailView::new(&data, &site).to_string();

        assert!(html.contains("Included services"));
        assert_eq!(html.matches("service-badge").count(), 0);
    }
}
