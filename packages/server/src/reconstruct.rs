//! Rebuilds the nested response shape from stored rows.

use thiserror::Error;

use crate::entity::{coords, image, level, pereval, user};
use crate::models::pereval::{
    CoordsResponse, ImageResponse, LevelResponse, PerevalResponse, UserResponse,
};

/// A pass row together with its related rows, already loaded.
#[derive(Clone, Debug)]
pub struct SubmissionRecords {
    pub pereval: pereval::Model,
    pub user: Option<user::Model>,
    pub coords: Option<coords::Model>,
    pub level: Option<level::Model>,
    pub images: Vec<image::Model>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataIntegrityError {
    #[error("Pereval {pereval_id} has no {relation} record")]
    MissingRelation {
        pereval_id: i32,
        relation: &'static str,
    },
}

impl From<user::Model> for UserResponse {
    fn from(m: user::Model) -> Self {
        Self {
            email: m.email,
            fam: m.fam,
            name: m.name,
            otc: m.otc,
            phone: m.phone,
        }
    }
}

impl From<coords::Model> for CoordsResponse {
    fn from(m: coords::Model) -> Self {
        Self {
            latitude: m.latitude,
            longitude: m.longitude,
            height: m.height,
        }
    }
}

impl From<level::Model> for LevelResponse {
    fn from(m: level::Model) -> Self {
        Self {
            winter: m.winter,
            summer: m.summer,
            autumn: m.autumn,
            spring: m.spring,
        }
    }
}

impl From<image::Model> for ImageResponse {
    fn from(m: image::Model) -> Self {
        Self {
            data: m.data,
            title: m.title,
        }
    }
}

fn required<T>(
    value: Option<T>,
    pereval_id: i32,
    relation: &'static str,
) -> Result<T, DataIntegrityError> {
    value.ok_or(DataIntegrityError::MissingRelation {
        pereval_id,
        relation,
    })
}

/// Build the response for a stored pass. Images are returned in id order.
pub fn reconstruct(records: SubmissionRecords) -> Result<PerevalResponse, DataIntegrityError> {
    let SubmissionRecords {
        pereval,
        user,
        coords,
        level,
        mut images,
    } = records;

    let id = pereval.id;
    let user = required(user, id, "user")?;
    let coords = required(coords, id, "coords")?;
    let level = required(level, id, "level")?;
    images.sort_by_key(|img| img.id);

    Ok(PerevalResponse {
        id,
        beauty_title: pereval.beauty_title,
        title: pereval.title,
        other_titles: pereval.other_titles,
        connect: pereval.connect,
        add_time: pereval.add_time,
        user: user.into(),
        coords: coords.into(),
        level: level.into(),
        images: images.into_iter().map(ImageResponse::from).collect(),
    })
}
