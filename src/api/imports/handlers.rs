use actix_multipart::form::{bytes::Bytes, MultipartForm};
use actix_web::{
    get, post,
    web::{scope, Data, ServiceConfig},
    HttpResponse, Responder,
};
use tracing::{error, info, warn};

use crate::api::validation::ErrorResponse;
use crate::config::Config;
use crate::importer::{process_import, template};

use super::dto::ImportPreviewResponse;

/// Fixed user-facing message for any structural CSV failure.
const PARSE_ERROR_MESSAGE: &str = "Error parsing CSV. Please check the file format.";

#[derive(MultipartForm)]
struct ImportUpload {
    #[multipart(rename = "file")]
    file: Bytes,
}

/// Parse an uploaded CSV file into job-post drafts and return a
/// preview. Nothing is persisted here; the client submits the drafts
/// to `POST /jobs/bulk` after the user confirms.
#[post("/preview")]
async fn preview_import(
    config: Data<Config>,
    upload: MultipartForm<ImportUpload>,
) -> impl Responder {
    let text = match std::str::from_utf8(&upload.file.data) {
        Ok(text) => text,
        Err(_) => {
            warn!("Import upload rejected: file is not valid UTF-8");
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: PARSE_ERROR_MESSAGE.to_string(),
                fields: serde_json::json!({"message": "File is not valid UTF-8 text"}),
            });
        }
    };

    match process_import(text) {
        Ok(drafts) => {
            info!("Import preview produced {} drafts", drafts.len());
            let preview = drafts.iter().take(config.preview_rows).cloned().collect();
            HttpResponse::Ok().json(ImportPreviewResponse {
                message: format!("Parsed {} job posts from CSV", drafts.len()),
                count: drafts.len(),
                preview,
                drafts,
            })
        }
        Err(err) => {
            warn!("Import preview failed: {}", err);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: PARSE_ERROR_MESSAGE.to_string(),
                fields: serde_json::json!({"message": err.to_string()}),
            })
        }
    }
}

/// Download the CSV template uploaders fill out: the 18 recognized
/// column headers plus one example row.
#[get("/template")]
async fn download_template() -> impl Responder {
    match template::template_csv() {
        Ok(csv_text) => HttpResponse::Ok()
            .content_type("text/csv")
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"job-import-template.csv\"",
            ))
            .body(csv_text),
        Err(err) => {
            error!("Template rendering failed: {}", err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate template".to_string(),
                fields: serde_json::json!({"message": err.to_string()}),
            })
        }
    }
}

pub fn imports_config(config: &mut ServiceConfig) {
    config.service(
        scope("imports")
            .service(preview_import)
            .service(download_template),
    );
}
