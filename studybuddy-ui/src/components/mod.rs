//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod avatar;
pub mod landing;
pub mod loading;
pub mod nav;
pub mod toast;

pub use avatar::Avatar;
pub use landing::{CallToAction, Features, Hero, Testimonials};
pub use loading::{InlineLoading, Loading};
pub use nav::Nav;
pub use toast::Toast;
