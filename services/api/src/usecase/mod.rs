pub mod auth;
pub mod client_intake;
pub mod feature_option;
pub mod message;
pub mod property;
pub mod track_view;
pub mod user;
