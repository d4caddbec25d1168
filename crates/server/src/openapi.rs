use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// `weight` is forwarded exactly as sent, whatever its JSON type.
#[derive(ToSchema)]
pub struct RateRequestDoc {
    pub origin: String,
    pub destination: String,
    #[schema(value_type = f64)]
    pub weight: serde_json::Value,
}

#[derive(ToSchema)]
pub struct UploadFormDoc {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct CreateQueryDoc { pub issue: String, pub orderId: String }

#[derive(ToSchema)]
pub struct UpdateStatusDoc { pub status: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct SupportQueryDoc { pub id: i32, pub issue: String, pub orderId: String, pub status: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::rates::get_rates,
        crate::routes::documents::upload,
        crate::routes::queries::create,
        crate::routes::queries::update_status,
        crate::routes::queries::get,
    ),
    components(
        schemas(
            HealthResponse,
            RateRequestDoc,
            UploadFormDoc,
            CreateQueryDoc,
            UpdateStatusDoc,
            SupportQueryDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "shipping"),
        (name = "documents"),
        (name = "query")
    )
)]
pub struct ApiDoc;
