//! Listing creation endpoint (multipart upload)

use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse};
use futures_util::TryStreamExt;

use ct_core::domain::entities::listing::NewListing;
use ct_core::repositories::{ListingRepository, UserRepository};
use ct_core::services::storage::ImageStore;
use ct_shared::types::ErrorResponse;

use crate::app::AppState;
use crate::dto::listing::CreateListingResponse;
use crate::handlers::error::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Raw form fields accumulated while draining the multipart stream
#[derive(Default)]
struct ListingForm {
    image: Vec<u8>,
    name: Option<String>,
    description: Option<String>,
    price_per_day: Option<String>,
    category: Option<String>,
    mobile_number: Option<String>,
}

/// Handle POST /upload.
///
/// Accepts a multipart form with an `image` file part and the listing
/// metadata as text parts. The owner is always the authenticated identity
/// from the verified claims; any owner field in the form is ignored.
pub async fn create_listing<U, L, S>(
    ctx: AuthContext,
    state: web::Data<AppState<U, L, S>>,
    payload: Multipart,
) -> HttpResponse
where
    U: UserRepository,
    L: ListingRepository,
    S: ImageStore,
{
    let form = match parse_form(payload).await {
        Ok(form) => form,
        Err(response) => return response,
    };

    let metadata = match form_metadata(&form) {
        Ok(metadata) => metadata,
        Err(response) => return response,
    };

    match state
        .listing_service
        .create_listing(ctx.user_id, metadata, form.image)
        .await
    {
        Ok(item) => HttpResponse::Ok().json(CreateListingResponse {
            message: "Item uploaded successfully".to_string(),
            item,
        }),
        Err(err) => handle_domain_error(err),
    }
}

/// Drain the multipart stream into a [`ListingForm`]
async fn parse_form(mut payload: Multipart) -> Result<ListingForm, HttpResponse> {
    let mut form = ListingForm::default();

    while let Some(mut field) = payload.try_next().await.map_err(bad_multipart)? {
        let name = field.name().to_string();
        let data = collect_field(&mut field).await?;

        match name.as_str() {
            "image" => form.image = data,
            "name" => form.name = Some(into_text(data)),
            "description" => form.description = Some(into_text(data)),
            "price_per_day" => form.price_per_day = Some(into_text(data)),
            "category" => form.category = Some(into_text(data)),
            "mobile_number" => form.mobile_number = Some(into_text(data)),
            // Unknown parts (including any owner field) are dropped
            _ => {}
        }
    }

    Ok(form)
}

/// Validate the text parts and assemble the listing metadata
fn form_metadata(form: &ListingForm) -> Result<NewListing, HttpResponse> {
    let require = |value: &Option<String>, label: &str| {
        value
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                HttpResponse::BadRequest().json(ErrorResponse::new(
                    "validation_error",
                    format!("{label} is required"),
                ))
            })
    };

    Ok(NewListing {
        name: require(&form.name, "name")?,
        description: require(&form.description, "description")?,
        price_per_day: require(&form.price_per_day, "price_per_day")?,
        category: require(&form.category, "category")?,
        contact_number: require(&form.mobile_number, "mobile_number")?,
    })
}

async fn collect_field(field: &mut Field) -> Result<Vec<u8>, HttpResponse> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(bad_multipart)? {
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn into_text(data: Vec<u8>) -> String {
    String::from_utf8_lossy(&data).into_owned()
}

fn bad_multipart(err: actix_multipart::MultipartError) -> HttpResponse {
    log::warn!("malformed multipart payload: {err}");
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "validation_error",
        "Malformed multipart payload",
    ))
}
