use super::*;

/// Tests listing all clubs as domain models.
///
/// Expected: Ok with each club carrying its tag names
#[tokio::test]
async fn returns_clubs_with_tag_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();

    let (tagged, _) = factory::helpers::create_club_with_tags(&test.db, &["Undergraduate"]).await?;
    factory::create_club(&test.db).await?;

    let service = ClubService::new(&test.db);
    let clubs = service.get_all().await?;

    assert_eq!(clubs.len(), 2);

    let tagged_club = clubs.iter().find(|club| club.id == tagged.id).unwrap();
    assert_eq!(tagged_club.tags, vec!["Undergraduate".to_string()]);

    Ok(())
}
