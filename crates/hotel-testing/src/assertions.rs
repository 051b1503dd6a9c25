//! Helpers for inspecting rendered fragments.

use anyhow::Result;

/// Booking ids of the cards in a rendered list, in order.
pub fn card_ids(html: &str) -> Vec<String> {
    const MARKER: &str = r#"<div class="booking-card" data-booking-id=""#;

    html.match_indices(MARKER)
        .filter_map(|(pos, _)| {
            let rest = &html[pos + MARKER.len()..];
            rest.find('"').map(|end| rest[..end].to_string())
        })
        .collect()
}

/// Assert the rendered list shows exactly `expected` cards, in this order.
pub fn assert_cards(html: &str, expected: &[&str]) -> Result<()> {
    let actual = card_ids(html);
    if actual != expected {
        anyhow::bail!("Expected cards {:?}, got {:?}", expected, actual);
    }
    Ok(())
}

/// Assert that every confirmed card carries exactly one stay badge
/// and cancelled cards carry none.
pub fn assert_stay_badges(html: &str) -> Result<()> {
    for (i, card) in html.split(r#"<div class="booking-card""#).skip(1).enumerate() {
        let badges = card.matches("</i> Completed</span>").count()
            + card.matches("</i> Upcoming</span>").count();
        let expected = if card.contains("status-confirmed") {
            1
        } else {
            0
        };
        if badges != expected {
            anyhow::bail!("Card {} has {} stay badges, expected {}", i, badges, expected);
        }
    }
    Ok(())
}
