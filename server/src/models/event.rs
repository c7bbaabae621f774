use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::organizer::Organizer;

/// Catalog entry shown on listing cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub university: String,
    pub location: String,
    pub date: String,
    pub attendees: u32,
    pub image: String,
    pub sponsorship_amount: Decimal,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SponsorshipTier {
    pub name: String,
    pub price: Decimal,
    pub includes: Vec<String>,
}

/// Everything the detail page needs beyond the listing card.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub time: Option<String>,
    pub venue: String,
    /// Attendee tickets, when the organizer sells them.
    pub ticket_price: Option<Decimal>,
    pub tickets_available: Option<u32>,
    pub registration_deadline: Option<String>,
    pub images: Vec<String>,
    pub highlights: Vec<String>,
    pub benefits: Vec<String>,
    pub tiers: Vec<SponsorshipTier>,
    pub organizer: Organizer,
    pub previous_sponsors: Vec<String>,
}
