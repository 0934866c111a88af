use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
};
use tower_http::trace::TraceLayer;

use emlak_core::health::health;
use emlak_core::middleware::{cors_layer, request_id_layer};

use crate::handlers::{auth, client_intake, feature_option, message, property, track_view, user};
use crate::state::AppState;

pub fn build_router(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        // Health
        .route("/health", get(health))
        // Auth
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/forgot-password", post(auth::forgot_password))
        .route("/auth/reset-password", post(auth::reset_password))
        // Users
        .route("/user", post(user::create_user))
        .route("/user", get(user::list_users))
        .route("/user/{id}", get(user::get_user))
        .route("/user/{id}", put(user::update_user))
        .route("/user/{id}", delete(user::delete_user))
        .route("/user/{id}/password", patch(user::update_password))
        .route("/user/{id}/upload-image", patch(user::upload_user_image))
        // Properties
        .route("/properties", post(property::create_property))
        .route("/properties", get(property::list_properties))
        .route("/properties/query", get(property::query_properties))
        .route("/properties/near", get(property::near_properties))
        .route("/properties/lastsix", get(property::last_six_properties))
        .route("/properties/count", get(property::count_properties))
        .route("/properties/yearlistings", get(property::year_listings))
        .route("/properties/piechart", get(property::pie_chart))
        .route("/properties/{id}", get(property::get_property))
        .route("/properties/{id}", put(property::update_property))
        .route("/properties/{id}", patch(property::set_property_owner))
        .route("/properties/{id}", delete(property::delete_property))
        // Feature options
        .route("/feature-options", post(feature_option::create_feature_option))
        .route("/feature-options", get(feature_option::grouped_feature_options))
        .route("/feature-options/findall", get(feature_option::list_feature_options))
        .route("/feature-options/{id}", get(feature_option::get_feature_option))
        .route("/feature-options/{id}", put(feature_option::update_feature_option))
        .route("/feature-options/{id}", delete(feature_option::delete_feature_option))
        // Messages
        .route("/messages", post(message::create_message))
        .route("/messages", get(message::list_messages))
        .route("/messages/{id}", get(message::get_message))
        .route("/messages/{id}", patch(message::mark_message_read))
        .route("/messages/{id}", delete(message::delete_message))
        // Client intake
        .route("/client-intake", post(client_intake::create_client_intake))
        .route("/client-intake", get(client_intake::list_client_intakes))
        .route("/client-intake/{id}", get(client_intake::get_client_intake))
        .route("/client-intake/{id}", patch(client_intake::update_client_intake))
        .route("/client-intake/{id}", delete(client_intake::delete_client_intake))
        // Track view
        .route("/track-view", post(track_view::record_view))
        .route("/track-view", get(track_view::year_views))
        .route("/track-view/month", get(track_view::month_views))
        // Listing uploads carry up to 20 images per request.
        .layer(DefaultBodyLimit::max(50 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}
