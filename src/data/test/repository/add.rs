use super::*;

#[tokio::test]
async fn add_assigns_id_and_stamps_create_date() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    let before = Utc::now();
    let affected = entries.add(new_entry(author.id, "ilk")).await?;
    let after = Utc::now();

    assert_eq!(affected, 1);

    let rows = entries.get_all().await?;
    assert_eq!(rows.len(), 1);
    assert_ne!(rows[0].id, Uuid::nil());
    assert!(rows[0].create_date >= before);
    assert!(rows[0].create_date <= after);

    Ok(())
}

#[tokio::test]
async fn add_returning_round_trips_every_field() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    let inserted = entries.add_returning(new_entry(author.id, "kayit")).await?;
    let fetched = entries.get_by_id(inserted.id).await?;

    assert_eq!(fetched, Some(inserted.clone()));
    assert_eq!(inserted.subject, "kayit");
    assert_eq!(inserted.created_by_id, author.id);

    Ok(())
}

#[tokio::test]
async fn add_keeps_caller_supplied_id_and_create_date() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    let id = Uuid::new_v4();
    let stamp = Utc::now() - chrono::Duration::days(7);
    let mut model = new_entry(author.id, "tasinan");
    model.id = ActiveValue::Set(id);
    model.create_date = ActiveValue::Set(stamp);

    let inserted = entries.add_returning(model).await?;

    assert_eq!(inserted.id, id);
    assert_eq!(inserted.create_date, stamp);

    Ok(())
}

#[tokio::test]
async fn add_all_empty_batch_is_a_noop() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entries = EntryRepository::new(db);

    let affected = entries.add_all(Vec::new()).await?;

    assert_eq!(affected, 0);
    assert_eq!(entries.get_all().await?.len(), 0);

    Ok(())
}

#[tokio::test]
async fn add_all_stamps_the_whole_batch_with_one_timestamp() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    let affected = entries
        .bulk_add(vec![
            new_entry(author.id, "bir"),
            new_entry(author.id, "iki"),
            new_entry(author.id, "uc"),
        ])
        .await?;

    assert_eq!(affected, 3);

    let rows = entries.get_all().await?;
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.create_date == rows[0].create_date));

    Ok(())
}
