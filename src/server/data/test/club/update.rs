use super::*;

/// Tests updating a club's name and description.
///
/// Expected: Ok with both fields changed
#[tokio::test]
async fn updates_name_and_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let club = factory::create_club(&test.db).await?;

    let repo = ClubRepository::new(&test.db);
    let (updated, _) = repo
        .update(
            club.id,
            UpdateClubParams {
                name: Some("New Name".to_string()),
                description: Some("New description.".to_string()),
                tags: None,
            },
        )
        .await?;

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.description, "New description.");
    assert_eq!(updated.code, club.code);

    Ok(())
}

/// Tests that absent and empty fields leave the stored values alone.
///
/// Verifies that a missing name and an empty description are both skipped
/// rather than blanking the club.
///
/// Expected: Ok with the original values intact
#[tokio::test]
async fn ignores_missing_and_empty_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let club = factory::create_club(&test.db).await?;

    let repo = ClubRepository::new(&test.db);
    let (updated, _) = repo
        .update(
            club.id,
            UpdateClubParams {
                name: None,
                description: Some(String::new()),
                tags: None,
            },
        )
        .await?;

    assert_eq!(updated.name, club.name);
    assert_eq!(updated.description, club.description);

    Ok(())
}

/// Tests replacing a club's tag set.
///
/// Verifies that a present tag list replaces the links wholesale and that
/// tag rows dropped from the club are not deleted.
///
/// Expected: Ok with only the new tag linked, old tag rows still present
#[tokio::test]
async fn replaces_tag_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let (club, _) =
        factory::helpers::create_club_with_tags(&test.db, &["Undergraduate", "Athletics"]).await?;

    let repo = ClubRepository::new(&test.db);
    let (_, tags) = repo
        .update(
            club.id,
            UpdateClubParams {
                name: None,
                description: None,
                tags: Some(vec!["Graduate".to_string()]),
            },
        )
        .await?;

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "Graduate");

    // Unlinked tag rows survive the replacement
    let tag_count = entity::prelude::Tag::find().count(&test.db).await?;
    assert_eq!(tag_count, 3);

    Ok(())
}

/// Tests clearing a club's tags with an empty list.
///
/// Expected: Ok with no links remaining
#[tokio::test]
async fn clears_tags_with_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let (club, _) = factory::helpers::create_club_with_tags(&test.db, &["Undergraduate"]).await?;

    let repo = ClubRepository::new(&test.db);
    let (_, tags) = repo
        .update(
            club.id,
            UpdateClubParams {
                name: None,
                description: None,
                tags: Some(vec![]),
            },
        )
        .await?;

    assert!(tags.is_empty());

    let link_count = entity::prelude::ClubTag::find()
        .filter(entity::club_tag::Column::ClubId.eq(club.id))
        .count(&test.db)
        .await?;
    assert_eq!(link_count, 0);

    Ok(())
}

/// Tests that an absent tag list leaves the links untouched.
///
/// Expected: Ok with the original tags still linked
#[tokio::test]
async fn keeps_tags_when_list_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let (club, _) = factory::helpers::create_club_with_tags(&test.db, &["Undergraduate"]).await?;

    let repo = ClubRepository::new(&test.db);
    let (_, tags) = repo
        .update(
            club.id,
            UpdateClubParams {
                name: Some("Renamed".to_string()),
                description: None,
                tags: None,
            },
        )
        .await?;

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "Undergraduate");

    Ok(())
}

/// Tests updating a club id that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn errors_on_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let repo = ClubRepository::new(&test.db);
    let result = repo
        .update(
            9999,
            UpdateClubParams {
                name: Some("Nobody".to_string()),
                description: None,
                tags: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
