//! Navigation model rendered by the site header.

use serde::Serialize;

use crate::auth::Session;

pub const REVIEW_EVENTS_PATH: &str = "/review-events";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub brand: &'static str,
    pub links: Vec<NavLink>,
    pub actions: Vec<NavLink>,
    pub session: Session,
}

pub fn navigation(session: Session) -> Navigation {
    let mut links = vec![
        NavLink {
            label: "Be a Sponsor",
            href: "/sponsor",
        },
        NavLink {
            label: "Get a Sponsor",
            href: "/create-event",
        },
        NavLink {
            label: "Search Events",
            href: "/events",
        },
    ];
    // Hidden entirely from non-admins
    if session.is_admin {
        links.push(NavLink {
            label: "Review Events",
            href: REVIEW_EVENTS_PATH,
        });
    }

    Navigation {
        brand: "SponsorGO",
        links,
        actions: vec![
            NavLink {
                label: "Log in",
                href: "/login",
            },
            NavLink {
                label: "Sign up",
                href: "/signup",
            },
        ],
        session,
    }
}
