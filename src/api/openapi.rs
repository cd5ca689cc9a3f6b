use super::handlers::{health, proxy};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(health::health, proxy::proxy),
    components(schemas(health::Health, proxy::ErrorBody)),
    tags(
        (name = "health", description = "Liveness and build information"),
        (name = "proxy", description = "Email verification pass-through")
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    // Use Cargo.toml metadata instead of the crate info defaults.
    doc.info.title = env!("CARGO_PKG_NAME").to_string();
    doc.info.version = env!("CARGO_PKG_VERSION").to_string();
    doc.info.description = Some(env!("CARGO_PKG_DESCRIPTION").to_string());
    doc
}
