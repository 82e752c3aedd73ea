pub mod api;
pub mod auth;
pub mod booking_form;
pub mod confirmation;
pub mod dashboard;
pub mod location;
pub mod payment;
pub mod validation;
pub mod workflow;
