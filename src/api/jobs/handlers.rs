use actix_web::{
    post,
    web::{scope, Data, ServiceConfig},
    HttpResponse,
};
use actix_web_validator::Json;

use super::models::{BulkCreateJobPostsRequest, CreateJobPostRequest};
use super::service::{JobPostService, ServiceError};

#[post("")]
async fn create_job_post(
    service: Data<JobPostService>,
    request: Json<CreateJobPostRequest>,
) -> Result<HttpResponse, ServiceError> {
    let response = service
        .create_job_post(&request.company_id, &request.hr_id, &request.job)
        .await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/bulk")]
async fn bulk_create_job_posts(
    service: Data<JobPostService>,
    request: Json<BulkCreateJobPostsRequest>,
) -> Result<HttpResponse, ServiceError> {
    let request = request.into_inner();
    let response = service
        .bulk_create_job_posts(&request.company_id, &request.hr_id, request.jobs)
        .await?;
    Ok(HttpResponse::Created().json(response))
}

pub fn jobs_config(config: &mut ServiceConfig) {
    config.service(
        scope("jobs")
            .service(create_job_post)
            .service(bulk_create_job_posts),
    );
}
