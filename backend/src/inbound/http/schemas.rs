//! OpenAPI schema definitions for the mirrored documents.
//!
//! Domain entities keep unknown source fields in an open map, so their
//! derived shapes say little. These wrappers describe the documented
//! JSONPlaceholder layout instead and are registered under the domain names.

use utoipa::ToSchema;

/// Geographic coordinates attached to an address.
#[derive(ToSchema)]
#[schema(as = Geo)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct GeoSchema {
    #[schema(example = "-37.3159")]
    lat: String,
    #[schema(example = "81.1496")]
    lng: String,
}

/// Postal address of a user.
#[derive(ToSchema)]
#[schema(as = Address)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct AddressSchema {
    street: String,
    suite: String,
    city: String,
    zipcode: String,
    geo: GeoSchema,
}

/// Employer of a user.
#[derive(ToSchema)]
#[schema(as = Company, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CompanySchema {
    name: String,
    catch_phrase: String,
    bs: String,
}

/// Comment embedded under a post.
#[derive(ToSchema)]
#[schema(as = Comment, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CommentSchema {
    post_id: Option<i64>,
    id: i64,
    name: String,
    email: String,
    body: String,
}

/// Post embedded under its author, carrying its comments.
#[derive(ToSchema)]
#[schema(as = Post, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct PostSchema {
    user_id: Option<i64>,
    id: i64,
    title: String,
    body: String,
    comments: Vec<CommentSchema>,
}

/// Stored user document.
///
/// Loaded users follow this layout; documents written through `PUT /users`
/// only need the integer `id` and are returned exactly as stored.
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Leanne Graham")]
    name: String,
    username: String,
    email: String,
    address: AddressSchema,
    phone: String,
    website: String,
    company: CompanySchema,
    posts: Vec<PostSchema>,
}
