use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Submitter contact details.
///
/// Every field is optional on the wire so that a missing value is reported
/// as a validation failure naming the field, not as an opaque body error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserDto {
    #[schema(example = "a@b.com")]
    pub email: Option<String>,
    /// Family name.
    #[schema(example = "Ivanov")]
    pub fam: Option<String>,
    /// Given name.
    #[schema(example = "Ivan")]
    pub name: Option<String>,
    /// Patronymic.
    #[schema(example = "Ivanovich")]
    pub otc: Option<String>,
    #[schema(example = "+7 555 55 55")]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CoordsDto {
    /// Latitude in decimal degrees, as text.
    #[schema(example = "45.3842")]
    pub latitude: Option<String>,
    /// Longitude in decimal degrees, as text.
    #[schema(example = "7.1525")]
    pub longitude: Option<String>,
    /// Height above sea level in meters.
    #[schema(example = 1200)]
    pub height: Option<i32>,
}

/// Difficulty category per season.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LevelDto {
    #[schema(example = "3A")]
    pub winter: Option<String>,
    #[schema(example = "1B")]
    pub summer: Option<String>,
    #[schema(example = "2A")]
    pub autumn: Option<String>,
    #[schema(example = "3A")]
    pub spring: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ImageDto {
    /// Encoded image payload (e.g. base64).
    pub data: Option<String>,
    #[schema(example = "Saddle, view from the north")]
    pub title: Option<String>,
}

/// Request body for submitting a new pass.
#[derive(Clone, Debug, Deserialize, utoipa::ToSchema)]
pub struct CreatePerevalRequest {
    #[schema(example = "pass.")]
    pub beauty_title: String,
    #[schema(example = "Pkhia")]
    pub title: String,
    /// May be empty.
    #[schema(example = "Triev")]
    pub other_titles: String,
    /// Connectivity notes. May be empty.
    #[schema(example = "")]
    pub connect: String,
    pub user: UserDto,
    pub coords: CoordsDto,
    pub level: LevelDto,
    /// Attached images. The key is required; the list may be empty.
    pub images: Vec<ImageDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    pub email: String,
    pub fam: String,
    pub name: String,
    pub otc: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CoordsResponse {
    pub latitude: String,
    pub longitude: String,
    pub height: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LevelResponse {
    pub winter: String,
    pub summer: String,
    pub autumn: String,
    pub spring: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ImageResponse {
    pub data: String,
    pub title: String,
}

/// A stored pass with all of its parts.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct PerevalResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub beauty_title: String,
    pub title: String,
    pub other_titles: String,
    pub connect: String,
    #[schema(example = "2025-10-01T14:30:00Z")]
    pub add_time: DateTime<Utc>,
    pub user: UserResponse,
    pub coords: CoordsResponse,
    pub level: LevelResponse,
    pub images: Vec<ImageResponse>,
}
