use std::path::Path;

use actix_web::{post, web, HttpResponse};

use crate::domain::icp::Icp;
use crate::services::data_persistance::{save_prospects, DEFAULT_OUTPUT_DIR};
use crate::services::pipeline::ProspectPipeline;

/// Run the full prospect-resolution pipeline for one ICP document. A
/// malformed ICP is rejected by the Json extractor before this handler runs;
/// that is the one fatal condition, everything downstream degrades to
/// partial results.
#[post("")]
async fn search_prospects(
    pipeline: web::Data<ProspectPipeline>,
    icp: web::Json<Icp>,
) -> HttpResponse {
    let icp = icp.into_inner();
    let prospects = pipeline.run(&icp).await;

    if let Err(e) = save_prospects(&prospects, Path::new(DEFAULT_OUTPUT_DIR)) {
        log::error!("Failed to persist prospect snapshot: {:?}", e);
    }

    HttpResponse::Ok().json(prospects)
}
