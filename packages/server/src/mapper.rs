//! Decomposes a nested pass submission into the rows it is stored as.
//!
//! Each sub-mapping checks field completeness and builds an unsaved
//! `ActiveModel`. Nothing here touches the database; foreign keys that
//! depend on generated identifiers are filled in by [`crate::store`].

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, Set};
use serde::Deserialize;
use thiserror::Error;

use crate::entity::{coords, image, level, pereval, user};
use crate::models::pereval::{CoordsDto, CreatePerevalRequest, ImageDto, LevelDto, UserDto};

/// How strictly required fields are checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// Fields must be present; text must be non-empty. Zero is a valid number.
    #[default]
    RequirePresent,
    /// Additionally reject zero-valued numbers (legacy clients relied on this).
    RejectFalsy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationKind {
    #[error("field required")]
    Missing,
    #[error("field must not be empty")]
    Empty,
    #[error("field must not be zero")]
    Zero,
}

impl ValidationKind {
    /// Machine-readable tag reported in error bodies.
    pub fn type_tag(self) -> &'static str {
        match self {
            ValidationKind::Missing => "missing_field",
            ValidationKind::Empty => "empty_field",
            ValidationKind::Zero => "zero_value",
        }
    }
}

/// A required field failed its check. `loc` is the JSON path of the field.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}: {}", .loc.join("."), .kind)]
pub struct ValidationError {
    pub loc: Vec<String>,
    pub kind: ValidationKind,
}

/// Rows produced from one submission, ready to be saved as one unit of work.
#[derive(Clone, Debug)]
pub struct NewSubmission {
    pub user: user::ActiveModel,
    pub coords: coords::ActiveModel,
    pub level: level::ActiveModel,
    /// `user_id`, `coords_id` and `level_id` are left unset.
    pub pereval: pereval::ActiveModel,
    pub images: Vec<image::ActiveModel>,
}

/// Field checker scoped to one nested record.
struct Fields {
    path: Vec<String>,
    policy: FieldPolicy,
}

impl Fields {
    fn new(path: &[&str], policy: FieldPolicy) -> Self {
        let mut full = vec!["body".to_string()];
        full.extend(path.iter().map(|s| s.to_string()));
        Self { path: full, policy }
    }

    fn error(&self, field: &str, kind: ValidationKind) -> ValidationError {
        let mut loc = self.path.clone();
        loc.push(field.to_string());
        ValidationError { loc, kind }
    }

    fn text(&self, field: &str, value: Option<String>) -> Result<String, ValidationError> {
        match value {
            None => Err(self.error(field, ValidationKind::Missing)),
            Some(v) if v.is_empty() => Err(self.error(field, ValidationKind::Empty)),
            Some(v) => Ok(v),
        }
    }

    fn int(&self, field: &str, value: Option<i32>) -> Result<i32, ValidationError> {
        match value {
            None => Err(self.error(field, ValidationKind::Missing)),
            Some(0) if self.policy == FieldPolicy::RejectFalsy => {
                Err(self.error(field, ValidationKind::Zero))
            }
            Some(v) => Ok(v),
        }
    }
}

pub fn map_user(dto: UserDto, policy: FieldPolicy) -> Result<user::ActiveModel, ValidationError> {
    let f = Fields::new(&["user"], policy);
    Ok(user::ActiveModel {
        email: Set(f.text("email", dto.email)?),
        fam: Set(f.text("fam", dto.fam)?),
        name: Set(f.text("name", dto.name)?),
        otc: Set(f.text("otc", dto.otc)?),
        phone: Set(f.text("phone", dto.phone)?),
        ..Default::default()
    })
}

pub fn map_coords(
    dto: CoordsDto,
    policy: FieldPolicy,
) -> Result<coords::ActiveModel, ValidationError> {
    let f = Fields::new(&["coords"], policy);
    Ok(coords::ActiveModel {
        latitude: Set(f.text("latitude", dto.latitude)?),
        longitude: Set(f.text("longitude", dto.longitude)?),
        height: Set(f.int("height", dto.height)?),
        ..Default::default()
    })
}

pub fn map_level(dto: LevelDto, policy: FieldPolicy) -> Result<level::ActiveModel, ValidationError> {
    let f = Fields::new(&["level"], policy);
    Ok(level::ActiveModel {
        winter: Set(f.text("winter", dto.winter)?),
        summer: Set(f.text("summer", dto.summer)?),
        autumn: Set(f.text("autumn", dto.autumn)?),
        spring: Set(f.text("spring", dto.spring)?),
        ..Default::default()
    })
}

/// Map the image at position `index` of the submission's image list.
/// The returned image is not linked to any pass yet.
pub fn map_image(
    dto: ImageDto,
    index: usize,
    policy: FieldPolicy,
) -> Result<image::ActiveModel, ValidationError> {
    let index = index.to_string();
    let f = Fields::new(&["images", &index], policy);
    Ok(image::ActiveModel {
        data: Set(f.text("data", dto.data)?),
        title: Set(f.text("title", dto.title)?),
        ..Default::default()
    })
}

/// Map a whole submission. Stops at the first invalid field, checking
/// user, coords, level, then images in order.
pub fn map_submission(
    req: CreatePerevalRequest,
    added_at: DateTime<Utc>,
    policy: FieldPolicy,
) -> Result<NewSubmission, ValidationError> {
    let user = map_user(req.user, policy)?;
    let coords = map_coords(req.coords, policy)?;
    let level = map_level(req.level, policy)?;
    let images = req
        .images
        .into_iter()
        .enumerate()
        .map(|(i, dto)| map_image(dto, i, policy))
        .collect::<Result<Vec<_>, _>>()?;

    let pereval = pereval::ActiveModel {
        beauty_title: Set(req.beauty_title),
        title: Set(req.title),
        other_titles: Set(req.other_titles),
        connect: Set(req.connect),
        add_time: Set(added_at),
        ..Default::default()
    };

    Ok(NewSubmission {
        user,
        coords,
        level,
        pereval,
        images,
    })
}

/// Point every unlinked image at `pereval_id`. Images that already carry a
/// link are left alone. Returns how many images were linked.
pub fn link_images(images: &mut [image::ActiveModel], pereval_id: i32) -> usize {
    let mut linked = 0;
    for image in images.iter_mut() {
        let already_linked = matches!(
            image.pereval_id,
            ActiveValue::Set(Some(_)) | ActiveValue::Unchanged(Some(_))
        );
        if !already_linked {
            image.pereval_id = Set(Some(pereval_id));
            linked += 1;
        }
    }
    linked
}
