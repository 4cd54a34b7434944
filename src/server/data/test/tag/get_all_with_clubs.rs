use super::*;

/// Tests getting every tag with the clubs linked to it.
///
/// Verifies that a tag shared by two clubs lists both, and that clubs on
/// another tag do not leak in.
///
/// Expected: Ok with each tag paired with its own clubs
#[tokio::test]
async fn returns_tags_with_linked_clubs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let (_, tags) = factory::helpers::create_club_with_tags(&test.db, &["Undergraduate"]).await?;
    let shared_tag = &tags[0];

    let second_club = factory::create_club(&test.db).await?;
    factory::helpers::link_club_tag(&test.db, second_club.id, shared_tag.id).await?;

    factory::helpers::create_club_with_tags(&test.db, &["Graduate"]).await?;

    let repo = TagRepository::new(&test.db);
    let all = repo.get_all_with_clubs().await?;

    assert_eq!(all.len(), 2);

    let (_, undergrad_clubs) = all
        .iter()
        .find(|(tag, _)| tag.name == "Undergraduate")
        .unwrap();
    assert_eq!(undergrad_clubs.len(), 2);

    let (_, grad_clubs) = all.iter().find(|(tag, _)| tag.name == "Graduate").unwrap();
    assert_eq!(grad_clubs.len(), 1);

    Ok(())
}

/// Tests that a tag with no linked clubs still appears.
///
/// Expected: Ok with the orphan tag carrying an empty club list
#[tokio::test]
async fn includes_tags_without_clubs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    factory::create_tag_with_name(&test.db, "Orphan").await?;

    let repo = TagRepository::new(&test.db);
    let all = repo.get_all_with_clubs().await?;

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].0.name, "Orphan");
    assert!(all[0].1.is_empty());

    Ok(())
}

/// Tests getting tags from an empty database.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_no_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let repo = TagRepository::new(&test.db);
    let all = repo.get_all_with_clubs().await?;

    assert!(all.is_empty());

    Ok(())
}
