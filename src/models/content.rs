//! Marketing copy for the landing page

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Feature {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Testimonial {
    pub content: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}
