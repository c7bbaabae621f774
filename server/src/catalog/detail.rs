use rust_decimal::Decimal;

use crate::models::event::{Event, EventDetail, SponsorshipTier};
use crate::models::organizer::Organizer;

const STANDARD_BENEFITS: [&str; 6] = [
    "Logo placement on event website, t-shirts, and venue signage",
    "Opportunity to send mentors and judges",
    "Ability to host a sponsored workshop or tech talk",
    "Access to participant resumes and GitHub profiles",
    "Demo booth throughout the event",
    "Social media promotion across all channels",
];

const FLAGSHIP_DESCRIPTION: &str = "TechHacks 2025 is Stanford University's premier hackathon, \
bringing together 500 of the brightest student minds across the West Coast. Over 48 \
action-packed hours, participants will compete to develop innovative solutions to real-world \
challenges.

This event provides an unparalleled opportunity for sponsors to connect with top student \
talent, showcase products and APIs, and recruit future team members. Previous participants \
have gone on to become engineers at leading tech companies and founders of successful \
startups.

Sponsors will receive prominent branding throughout the event, including on the event \
website, t-shirts, and venue signage. Additionally, sponsors can host workshops, send mentors, \
and engage directly with participants throughout the hackathon.";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Gold asks for the full sponsorship target, silver half, bronze a quarter.
pub fn standard_tiers(target: Decimal) -> Vec<SponsorshipTier> {
    vec![
        SponsorshipTier {
            name: "Gold".into(),
            price: target,
            includes: strings(&[
                "All benefits listed above",
                "Prime logo placement",
                "Keynote speaking opportunity",
                "First access to recruiting",
            ]),
        },
        SponsorshipTier {
            name: "Silver".into(),
            price: (target / Decimal::from(2)).round_dp(0),
            includes: strings(&[
                "Logo on website and t-shirts",
                "Send mentors and judges",
                "Resume access",
                "Recruiting table",
            ]),
        },
        SponsorshipTier {
            name: "Bronze".into(),
            price: (target / Decimal::from(4)).round_dp(0),
            includes: strings(&["Logo on website", "Send mentors", "Resume access"]),
        },
    ]
}

pub fn detail_for(mut event: Event) -> EventDetail {
    let tiers = standard_tiers(event.sponsorship_amount);
    let benefits = strings(&STANDARD_BENEFITS);

    // The flagship listing carries its full page; the rest get the generic layout
    if event.id == 1 {
        event.description = FLAGSHIP_DESCRIPTION.to_string();
        return EventDetail {
            time: Some("9:00 AM - 9:00 PM".into()),
            venue: "Computer Science Building, Stanford University".into(),
            ticket_price: Some(Decimal::from(500)),
            tickets_available: Some(200),
            registration_deadline: Some("May 1, 2025".into()),
            images: strings(&[
                "https://images.unsplash.com/photo-1519389950473-47ba0277781c?w=800&auto=format&fit=crop&q=90",
                "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=800&auto=format&fit=crop&q=90",
                "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&auto=format&fit=crop&q=90",
            ]),
            highlights: strings(&[
                "Coding competitions",
                "Networking sessions",
                "Tech workshops",
                "Mentorship opportunities",
            ]),
            benefits,
            tiers,
            organizer: Organizer {
                name: "Stanford Tech Club".into(),
                role: "Event Organizer".into(),
                contact_email: Some("organizers@techhacks-stanford.edu".into()),
                website: Some("https://techhacks-stanford.edu".into()),
            },
            previous_sponsors: strings(&["Google", "Microsoft", "Amazon", "Meta", "Apple"]),
            event,
        };
    }

    EventDetail {
        time: None,
        venue: event.university.clone(),
        ticket_price: None,
        tickets_available: None,
        registration_deadline: None,
        images: vec![event.image.clone()],
        highlights: Vec::new(),
        benefits,
        tiers,
        organizer: Organizer {
            name: event.university.clone(),
            role: "Event Organizer".into(),
            contact_email: None,
            website: None,
        },
        previous_sponsors: Vec::new(),
        event,
    }
}

pub fn find_detail(events: &[Event], id: u32) -> Option<EventDetail> {
    events.iter().find(|e| e.id == id).cloned().map(detail_for)
}
