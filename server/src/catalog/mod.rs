//! Fixed event catalog and the filters applied to it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::event::Event;

pub mod detail;

pub const ALL_CATEGORIES: &str = "All Categories";
pub const ALL_LOCATIONS: &str = "All Locations";
pub const NO_MATCH_MESSAGE: &str = "No events match your filters";

pub const BUDGET_MAX: u32 = 20000;
pub const BUDGET_STEP: u32 = 500;
pub const ATTENDEES_MAX: u32 = 1000;
pub const ATTENDEES_STEP: u32 = 50;

pub fn sample_events() -> Vec<Event> {
    vec![
        event(
            1,
            "TechHacks 2025",
            "Hackathon",
            "Stanford University",
            "Palo Alto, CA",
            "May 15-17, 2025",
            500,
            "https://images.unsplash.com/photo-1519389950473-47ba0277781c?w=600&auto=format&fit=crop&q=90",
            10000,
            "A 48-hour hackathon challenging students to build innovative solutions for real-world problems. Sponsored by top tech companies with mentorship opportunities.",
        ),
        event(
            2,
            "Business Summit",
            "Conference",
            "Harvard Business School",
            "Boston, MA",
            "June 5-6, 2025",
            300,
            "https://images.unsplash.com/photo-1591115765373-5207764f72e7?w=600&auto=format&fit=crop&q=90",
            7500,
            "Annual business conference bringing together industry leaders and students to discuss emerging trends and opportunities in the global market.",
        ),
        event(
            3,
            "Design Expo",
            "Exhibition",
            "Rhode Island School of Design",
            "Providence, RI",
            "July 12, 2025",
            250,
            "https://images.unsplash.com/photo-1569683795645-b62e50fbf103?w=600&auto=format&fit=crop&q=90",
            5000,
            "Showcase of student design projects spanning industrial design, graphic design, architecture, and digital media. Great opportunity to scout emerging talent.",
        ),
        event(
            4,
            "AI & ML Symposium",
            "Symposium",
            "MIT",
            "Cambridge, MA",
            "August 22-24, 2025",
            400,
            "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=600&auto=format&fit=crop&q=90",
            15000,
            "A three-day symposium focused on recent advancements in artificial intelligence and machine learning with keynotes from leading researchers in the field.",
        ),
        event(
            5,
            "College Film Festival",
            "Festival",
            "NYU Tisch School of the Arts",
            "New York, NY",
            "September 18-20, 2025",
            600,
            "https://images.unsplash.com/photo-1594909122845-11baa439b7bf?w=600&auto=format&fit=crop&q=90",
            8000,
            "Annual showcase of student films from one of the top film schools in the country, featuring screenings, workshops, and networking events with industry professionals.",
        ),
        event(
            6,
            "Engineering Fair",
            "Fair",
            "Georgia Tech",
            "Atlanta, GA",
            "October 5, 2025",
            350,
            "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=600&auto=format&fit=crop&q=90",
            6000,
            "Exhibition of innovative engineering projects across electrical, mechanical, civil, and computer engineering disciplines with opportunities for student recruitment.",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: u32,
    title: &str,
    category: &str,
    university: &str,
    location: &str,
    date: &str,
    attendees: u32,
    image: &str,
    sponsorship_amount: i64,
    description: &str,
) -> Event {
    Event {
        id,
        title: title.to_string(),
        category: category.to_string(),
        university: university.to_string(),
        location: location.to_string(),
        date: date.to_string(),
        attendees,
        image: image.to_string(),
        sponsorship_amount: Decimal::new(sponsorship_amount, 0),
        description: description.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Featured,
    Newest,
    Oldest,
    BudgetHigh,
    BudgetLow,
    Attendees,
}

/// Query parameters of the catalog search. Every predicate is optional and
/// they combine with AND.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventFilter {
    pub q: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub min_budget: Option<Decimal>,
    pub max_budget: Option<Decimal>,
    pub min_attendees: Option<u32>,
    pub max_attendees: Option<u32>,
    pub sort: SortOrder,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_search(event)
            && self.matches_category(event)
            && self.matches_location(event)
            && self.matches_budget(event)
            && self.matches_attendees(event)
    }

    fn matches_search(&self, event: &Event) -> bool {
        let Some(term) = self.q.as_deref() else {
            return true;
        };
        let term = term.to_lowercase();
        event.title.to_lowercase().contains(&term)
            || event.description.to_lowercase().contains(&term)
            || event.university.to_lowercase().contains(&term)
    }

    fn matches_category(&self, event: &Event) -> bool {
        match self.category.as_deref().filter(|c| !c.is_empty()) {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => event.category == category,
        }
    }

    fn matches_location(&self, event: &Event) -> bool {
        match self.location.as_deref().filter(|l| !l.is_empty()) {
            None | Some(ALL_LOCATIONS) => true,
            Some(location) => event.location.contains(location),
        }
    }

    fn matches_budget(&self, event: &Event) -> bool {
        let min = self.min_budget.unwrap_or(Decimal::ZERO);
        let max = self.max_budget.unwrap_or(Decimal::from(BUDGET_MAX));
        event.sponsorship_amount >= min && event.sponsorship_amount <= max
    }

    fn matches_attendees(&self, event: &Event) -> bool {
        let min = self.min_attendees.unwrap_or(0);
        let max = self.max_attendees.unwrap_or(ATTENDEES_MAX);
        event.attendees >= min && event.attendees <= max
    }

    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        let mut matched: Vec<Event> = events.iter().filter(|e| self.matches(e)).cloned().collect();
        match self.sort {
            SortOrder::Featured => {}
            SortOrder::Newest => matched.sort_by(|a, b| b.id.cmp(&a.id)),
            SortOrder::Oldest => matched.sort_by(|a, b| a.id.cmp(&b.id)),
            SortOrder::BudgetHigh => {
                matched.sort_by(|a, b| b.sponsorship_amount.cmp(&a.sponsorship_amount))
            }
            SortOrder::BudgetLow => {
                matched.sort_by(|a, b| a.sponsorship_amount.cmp(&b.sponsorship_amount))
            }
            SortOrder::Attendees => matched.sort_by(|a, b| b.attendees.cmp(&a.attendees)),
        }
        matched
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub total: usize,
    pub events: Vec<Event>,
    /// Set only when nothing matched.
    pub message: Option<&'static str>,
}

impl SearchResult {
    pub fn new(events: Vec<Event>) -> Self {
        let message = events.is_empty().then_some(NO_MATCH_MESSAGE);
        Self {
            total: events.len(),
            events,
            message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RangeOption {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub locations: Vec<String>,
    pub budget: RangeOption,
    pub attendees: RangeOption,
}

/// Option lists are derived from the catalog, first-seen order, with the
/// "all" entry up front.
pub fn filter_options(events: &[Event]) -> FilterOptions {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    let mut locations = vec![ALL_LOCATIONS.to_string()];
    for event in events {
        if !categories.contains(&event.category) {
            categories.push(event.category.clone());
        }
        if !locations.contains(&event.location) {
            locations.push(event.location.clone());
        }
    }

    FilterOptions {
        categories,
        locations,
        budget: RangeOption {
            min: 0,
            max: BUDGET_MAX,
            step: BUDGET_STEP,
        },
        attendees: RangeOption {
            min: 0,
            max: ATTENDEES_MAX,
            step: ATTENDEES_STEP,
        },
    }
}
