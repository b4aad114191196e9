//! OpenAPI document. The `*Doc` types describe wire shapes only.

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub message: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDoc {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    #[schema(example = "6085551023")]
    pub telephone: String,
}

#[derive(Serialize, ToSchema)]
pub struct PetTypeDoc { pub id: Option<i32>, pub name: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetDoc {
    pub id: Option<i32>,
    pub name: Option<String>,
    #[schema(example = "2019/04/12")]
    pub birth_date: String,
    pub owner_id: i32,
    #[serde(rename = "type")]
    pub pet_type: PetTypeDoc,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisitDoc {
    pub id: Option<i32>,
    pub pet_id: i32,
    #[schema(example = "2013/01/01")]
    pub date: String,
    pub description: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct SpecialtyDoc { pub id: Option<i32>, pub name: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VetDoc {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub specialties: Vec<SpecialtyDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct RoleDoc {
    pub id: Option<i32>,
    #[schema(example = "ROLE_ADMIN")]
    pub name: String,
}

#[derive(Serialize, ToSchema)]
pub struct UserDoc {
    pub username: String,
    #[schema(write_only)]
    pub password: String,
    pub enabled: bool,
    pub roles: Option<Vec<RoleDoc>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::owners::list,
        crate::routes::owners::get,
        crate::routes::owners::create,
        crate::routes::owners::update,
        crate::routes::owners::delete,
        crate::routes::pets::list,
        crate::routes::pets::get,
        crate::routes::pets::create,
        crate::routes::pets::update,
        crate::routes::pets::delete,
        crate::routes::pets::visits,
        crate::routes::pet_types::list,
        crate::routes::pet_types::get,
        crate::routes::pet_types::create,
        crate::routes::pet_types::update,
        crate::routes::pet_types::delete,
        crate::routes::visits::list,
        crate::routes::visits::get,
        crate::routes::visits::create,
        crate::routes::visits::update,
        crate::routes::visits::delete,
        crate::routes::specialties::list,
        crate::routes::specialties::get,
        crate::routes::specialties::create,
        crate::routes::specialties::update,
        crate::routes::specialties::delete,
        crate::routes::vets::list,
        crate::routes::vets::get,
        crate::routes::vets::create,
        crate::routes::vets::update,
        crate::routes::vets::delete,
        crate::routes::users::create,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            OwnerDoc,
            PetTypeDoc,
            PetDoc,
            VisitDoc,
            SpecialtyDoc,
            VetDoc,
            RoleDoc,
            UserDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "owners"),
        (name = "pets"),
        (name = "pettypes"),
        (name = "visits"),
        (name = "specialties"),
        (name = "vets"),
        (name = "users")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_clinic_paths() {
        let doc = ApiDoc::openapi();
        for path in ["/api/owners", "/api/pets/{id}/visits", "/api/users", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }
    }
}
