use super::*;

#[tokio::test]
async fn bulk_delete_leaves_non_matching_rows_in_place() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    entries.add(new_entry(author.id, "a")).await?;
    entries.add(new_entry(author.id, "b")).await?;
    entries.add(new_entry(other.id, "c")).await?;

    let before = entries.count(entity::entry::Column::Id.is_not_null()).await?;
    let affected = entries
        .bulk_delete(entity::entry::Column::CreatedById.eq(author.id))
        .await?;

    assert_eq!(before, 3);
    assert_eq!(affected, 2);

    let remaining = entries.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].created_by_id, other.id);

    Ok(())
}

#[tokio::test]
async fn bulk_delete_by_ids_with_no_ids_is_a_noop() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    entries.add(new_entry(author.id, "kalan")).await?;

    let affected = entries.bulk_delete_by_ids(Vec::new()).await?;

    assert_eq!(affected, 0);
    assert_eq!(entries.get_all().await?.len(), 1);

    Ok(())
}

#[tokio::test]
async fn bulk_delete_entities_removes_the_given_models() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    let first = entries.add_returning(new_entry(author.id, "bir")).await?;
    let second = entries.add_returning(new_entry(author.id, "iki")).await?;
    let kept = entries.add_returning(new_entry(author.id, "uc")).await?;

    let affected = entries.bulk_delete_entities(vec![first, second]).await?;

    assert_eq!(affected, 2);

    let remaining = entries.get_all().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}
