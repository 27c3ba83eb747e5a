//! Reads and writes whole submissions against the database.

use sea_orm::*;
use tracing::{debug, warn};

use crate::entity::{coords, image, level, pereval, user};
use crate::error::AppError;
use crate::mapper::{NewSubmission, link_images};
use crate::reconstruct::SubmissionRecords;

/// Insert every row of a mapped submission, parents first, and link its images.
pub async fn insert_submission<C: ConnectionTrait>(
    db: &C,
    mapped: NewSubmission,
) -> Result<SubmissionRecords, DbErr> {
    let NewSubmission {
        user,
        coords,
        level,
        mut pereval,
        mut images,
    } = mapped;

    let user = user.insert(db).await?;
    let coords = coords.insert(db).await?;
    let level = level.insert(db).await?;

    pereval.user_id = Set(user.id);
    pereval.coords_id = Set(coords.id);
    pereval.level_id = Set(level.id);
    let pereval = pereval.insert(db).await?;

    let linked = link_images(&mut images, pereval.id);
    debug!(pereval_id = pereval.id, linked, "Linked images");

    let mut saved_images = Vec::with_capacity(images.len());
    for image in images {
        saved_images.push(image.insert(db).await?);
    }

    Ok(SubmissionRecords {
        pereval,
        user: Some(user),
        coords: Some(coords),
        level: Some(level),
        images: saved_images,
    })
}

/// Save a submission in one transaction. On any failure nothing is kept.
pub async fn create_submission(
    db: &DatabaseConnection,
    mapped: NewSubmission,
) -> Result<SubmissionRecords, AppError> {
    let txn = db.begin().await?;

    match insert_submission(&txn, mapped).await {
        Ok(records) => {
            txn.commit().await?;
            Ok(records)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                warn!("Rollback failed: {}", rollback_err);
            }
            Err(e.into())
        }
    }
}

/// Attach user, coords, level and images to each pass, batching one query
/// per relation.
pub async fn with_relations<C: ConnectionTrait>(
    db: &C,
    perevals: Vec<pereval::Model>,
) -> Result<Vec<SubmissionRecords>, DbErr> {
    let users = perevals.load_one(user::Entity, db).await?;
    let coords = perevals.load_one(coords::Entity, db).await?;
    let levels = perevals.load_one(level::Entity, db).await?;
    let images = perevals.load_many(image::Entity, db).await?;

    Ok(perevals
        .into_iter()
        .zip(users)
        .zip(coords)
        .zip(levels)
        .zip(images)
        .map(
            |((((pereval, user), coords), level), images)| SubmissionRecords {
                pereval,
                user,
                coords,
                level,
                images,
            },
        )
        .collect())
}

/// Fetch one pass with everything it owns, or `None` if the id is unknown.
pub async fn find_submission(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<SubmissionRecords>, DbErr> {
    let txn = db.begin().await?;

    let Some(found) = pereval::Entity::find_by_id(id).one(&txn).await? else {
        txn.commit().await?;
        return Ok(None);
    };
    let records = with_relations(&txn, vec![found]).await?;
    txn.commit().await?;

    Ok(records.into_iter().next())
}
