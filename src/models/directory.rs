//! Static directory entries listed by the read endpoints

use serde::Serialize;

/// A supported destination
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
    pub country: &'static str,
}

/// A recommendation category shown to clients
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}
