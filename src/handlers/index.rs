//! Index page and fallback handlers.
//!
//! The index lists every API route in an HTML table rendered from [`ROUTES`].

use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use once_cell::sync::Lazy;

/// A documented API route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteInfo {
    /// Human readable name
    pub name: &'static str,
    /// Path template shown to users
    pub path: &'static str,
}

/// Routes listed on the index page, in display order
pub const ROUTES: &[RouteInfo] = &[
    RouteInfo {
        name: "Precipitation",
        path: "/api/v1.0/precipitation",
    },
    RouteInfo {
        name: "Stations",
        path: "/api/v1.0/stations",
    },
    RouteInfo {
        name: "Tobs",
        path: "/api/v1.0/tobs",
    },
    RouteInfo {
        name: "Temperatures for a given date (format: yyyy-mm-dd)",
        path: "/api/v1.0/yyyy-mm-dd",
    },
    RouteInfo {
        name: "Temperatures for a given date range (format: yyyy-mm-dd)",
        path: "/api/v1.0/yyyy-mm-dd/yyyy-mm-dd",
    },
];

static INDEX_PAGE: Lazy<String> = Lazy::new(|| render_index(ROUTES));

/// Render the route table as an HTML fragment
pub fn render_index(routes: &[RouteInfo]) -> String {
    let mut html = String::from(
        "<h1>Available Routes:</h1><br/>\
         <table border='1' cellspacing='0' cellpadding='0'>\
         <thead><tr><th>Route Name</th><th>Route</th></tr></thead><tbody>",
    );
    for route in routes {
        html.push_str(&format!(
            "<tr><td style='text-align:center'>{}</td><td style='text-align:center'>{}</td></tr>",
            route.name, route.path
        ));
    }
    html.push_str("</tbody></table>");
    html
}

/// Handle GET / requests
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE.as_str())
}

/// Respond to unknown paths with a JSON 404
pub async fn not_found_handler(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": format!("No route for {}", uri.path())
        })),
    )
        .into_response()
}
