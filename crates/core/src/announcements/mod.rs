//! Announcements module - append-only broadcasts from the group admin.

mod announcements_model;
mod announcements_service;


pub use announcements_model::{Announcement, NewAnnouncement};
pub use announcements_service::{AnnouncementService, AnnouncementServiceTrait};
