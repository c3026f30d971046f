pub mod booking;
pub mod country;
pub mod itinerary;
pub mod preference;
pub mod recommendation;
