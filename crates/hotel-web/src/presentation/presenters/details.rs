use hotel_types::{Booking, Room};

use crate::presentation::view_models::{BookingDetailViewModel, CostBreakdownViewModel};

pub fn present_booking_detail(booking: &Booking, room: &Room) -> BookingDetailViewModel {
    let nights = booking.nights();

    BookingDetailViewModel {
        booking_id: booking.id.to_string(),
        room_name: room.name.clone(),
        room_description: room.description.clone(),
        room_image: room.image.clone(),
        check_in: booking.check_in.date_naive(),
        check_out: booking.check_out.date_naive(),
        nights,
        guests: booking.guests,
        created_at: booking.created_at,
        status: booking.status,
        services: room.services.clone(),
        cost: CostBreakdownViewModel {
            nightly_price: room.price,
            nights,
            nights_subtotal: room.price * f64::from(nights),
            total_paid: booking.total,
        },
    }
}
