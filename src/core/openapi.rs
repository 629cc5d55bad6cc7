use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::auth;
use crate::features::catalog::{
    dtos as catalog_dtos, handlers as catalog_handlers, models as catalog_models,
};
use crate::features::purchases::{
    dtos as purchases_dtos, handlers as purchases_handlers, models as purchases_models,
};
use crate::features::uploads::{dtos as uploads_dtos, handlers as uploads_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Catalog (public)
        catalog_handlers::catalog_handler::list_courses,
        catalog_handlers::catalog_handler::get_course,
        // Purchases
        purchases_handlers::purchase_handler::create_purchase,
        purchases_handlers::purchase_handler::list_purchases,
        purchases_handlers::purchase_handler::refund_purchase,
        // Admin
        admin_handlers::course_admin_handler::list_courses,
        admin_handlers::course_admin_handler::get_course,
        admin_handlers::course_admin_handler::create_course,
        admin_handlers::course_admin_handler::update_course,
        admin_handlers::course_admin_handler::delete_course,
        admin_handlers::stats_handler::get_stats,
        uploads_handlers::upload_handler::upload_image,
    ),
    components(
        schemas(
            // Auth
            auth::model::AuthenticatedUser,
            // Catalog
            catalog_models::CourseStatus,
            catalog_models::CourseLevel,
            catalog_dtos::CourseResponseDto,
            catalog_dtos::PaginationMeta,
            catalog_dtos::CatalogPageDto,
            ApiResponse<catalog_dtos::CatalogPageDto>,
            ApiResponse<catalog_dtos::CourseResponseDto>,
            // Purchases
            purchases_models::PurchaseStatus,
            purchases_dtos::CreatePurchaseDto,
            purchases_dtos::RefundPurchaseDto,
            purchases_dtos::PurchaseResponseDto,
            ApiResponse<purchases_dtos::PurchaseResponseDto>,
            ApiResponse<Vec<purchases_dtos::PurchaseResponseDto>>,
            // Admin
            admin_dtos::CreateCourseDto,
            admin_dtos::UpdateCourseDto,
            admin_dtos::OverviewStatsDto,
            admin_dtos::PopularCourseDto,
            admin_dtos::CategoryStatsDto,
            admin_dtos::MonthlyRevenueDto,
            admin_dtos::AdminStatsDto,
            ApiResponse<admin_dtos::AdminStatsDto>,
            // Uploads
            uploads_dtos::ImageSlot,
            uploads_dtos::UploadImageForm,
            uploads_dtos::UploadImageResponseDto,
            ApiResponse<uploads_dtos::UploadImageResponseDto>,
        )
    ),
    tags(
        (name = "catalog", description = "Public course catalog"),
        (name = "purchases", description = "Purchase recording and history"),
        (name = "admin", description = "Admin back office (admin role only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Topclass API",
        version = "0.1.0",
        description = "Course storefront and admin API",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
