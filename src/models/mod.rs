pub mod booking;
pub mod client;
pub mod credentials;
pub mod location;
pub mod payment;
pub mod technician;

pub use booking::{Booking, BookingHistoryEntry, CreatedBooking, NewBooking};
pub use client::ClientProfile;
pub use credentials::{AccessToken, AuthMode, Credentials};
pub use location::{Coordinates, MapMarker, MapRegion};
pub use payment::{CardInput, PaymentStatus};
pub use technician::Technician;
