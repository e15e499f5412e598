//! Dil Mil - Terminal Dating App Prototype
//!
//! A purely client-side, mock-data prototype of a dating application rendered
//! in the terminal: welcome screen, phone login stub, multi-step onboarding,
//! a swipeable profile-discovery deck, and a matches/chat screen.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
