pub mod draft;
pub mod event;
pub mod organizer;
pub mod pending;
