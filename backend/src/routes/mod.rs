pub mod dashboard;
pub mod events;
pub mod landing;
pub mod map;
pub mod ranking;
pub mod selection;
pub mod timeline;
