mod auth_test;
mod feature_option_test;
mod helpers;
mod message_test;
mod property_test;
mod track_view_test;
