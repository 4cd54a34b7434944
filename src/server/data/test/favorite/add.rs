use super::*;

/// Tests favoriting a club for the first time.
///
/// Verifies that the link row is created and the club's stored favorites
/// counter moves from 0 to 1.
///
/// Expected: Ok(Added) with counter at 1
#[tokio::test]
async fn adds_favorite_and_increments_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let user = factory::create_user(&test.db).await?;
    let club = factory::create_club(&test.db).await?;

    let repo = FavoriteRepository::new(&test.db);
    let outcome = repo.add(user.id, club.id).await?;

    assert_eq!(outcome, FavoriteOutcome::Added);

    let club = entity::prelude::Club::find_by_id(club.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(club.favorites, 1);

    let link_count = entity::prelude::UserFavoriteClub::find()
        .count(&test.db)
        .await?;
    assert_eq!(link_count, 1);

    Ok(())
}

/// Tests favoriting a club the user already favorited.
///
/// Verifies the second call reports the existing link and leaves both the
/// link table and the counter alone.
///
/// Expected: Ok(AlreadyFavorited) with counter still at 1
#[tokio::test]
async fn repeat_add_reports_already_favorited() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let user = factory::create_user(&test.db).await?;
    let club = factory::create_club(&test.db).await?;

    let repo = FavoriteRepository::new(&test.db);
    repo.add(user.id, club.id).await?;
    let outcome = repo.add(user.id, club.id).await?;

    assert_eq!(outcome, FavoriteOutcome::AlreadyFavorited);

    let club = entity::prelude::Club::find_by_id(club.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(club.favorites, 1);

    let link_count = entity::prelude::UserFavoriteClub::find()
        .count(&test.db)
        .await?;
    assert_eq!(link_count, 1);

    Ok(())
}

/// Tests favorites from different users accumulating on one club.
///
/// Expected: Ok(Added) for each user, counter at 2
#[tokio::test]
async fn counts_each_user_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let user1 = factory::create_user(&test.db).await?;
    let user2 = factory::create_user(&test.db).await?;
    let club = factory::create_club(&test.db).await?;

    let repo = FavoriteRepository::new(&test.db);
    assert_eq!(repo.add(user1.id, club.id).await?, FavoriteOutcome::Added);
    assert_eq!(repo.add(user2.id, club.id).await?, FavoriteOutcome::Added);

    let club = entity::prelude::Club::find_by_id(club.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(club.favorites, 2);

    Ok(())
}
