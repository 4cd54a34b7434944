//! Shared helpers for the factory modules: id generation, link-table rows,
//! and combined creation shortcuts.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns a monotonically increasing value. Factories embed it in unique
/// columns so repeated inserts never collide.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Links an existing club to an existing tag through the club-tag link table.
pub async fn link_club_tag(
    db: &DatabaseConnection,
    club_id: i32,
    tag_id: i32,
) -> Result<entity::club_tag::Model, DbErr> {
    entity::club_tag::ActiveModel {
        club_id: ActiveValue::Set(club_id),
        tag_id: ActiveValue::Set(tag_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a raw favorite link between a user and a club.
///
/// Only the link row is written; the club's stored favorites counter is NOT
/// adjusted. This lets tests set up a counter that disagrees with the link
/// table on purpose. Go through the favorite repository when the counter
/// should move with the link.
pub async fn favorite_club(
    db: &DatabaseConnection,
    user_id: i32,
    club_id: i32,
) -> Result<entity::user_favorite_club::Model, DbErr> {
    entity::user_favorite_club::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        club_id: ActiveValue::Set(club_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a club plus one tag per name in `tag_names`, each linked to the
/// club. Tags come back in input order.
pub async fn create_club_with_tags(
    db: &DatabaseConnection,
    tag_names: &[&str],
) -> Result<(entity::club::Model, Vec<entity::tag::Model>), DbErr> {
    let club = crate::factory::club::create_club(db).await?;

    let mut tags = Vec::with_capacity(tag_names.len());
    for name in tag_names {
        let tag = crate::factory::tag::create_tag_with_name(db, *name).await?;
        link_club_tag(db, club.id, tag.id).await?;
        tags.push(tag);
    }

    Ok((club, tags))
}
