use super::*;

#[tokio::test]
async fn update_cannot_move_the_creation_timestamp() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    let inserted = entries.add_returning(new_entry(author.id, "kalici")).await?;

    // An update that tries to rewrite create_date has the slot stripped from
    // its SET clause.
    let affected = entries
        .update(entity::entry::ActiveModel {
            id: ActiveValue::Set(inserted.id),
            subject: ActiveValue::Set("duzeltildi".to_string()),
            create_date: ActiveValue::Set(Utc::now() - chrono::Duration::days(30)),
            ..Default::default()
        })
        .await?;

    assert_eq!(affected, 1);

    let updated = entries.get_by_id(inserted.id).await?.unwrap();
    assert_eq!(updated.subject, "duzeltildi");
    assert_eq!(updated.create_date, inserted.create_date);

    Ok(())
}

#[tokio::test]
async fn add_or_update_cannot_move_the_creation_timestamp() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    let inserted = entries.add_returning(new_entry(author.id, "sabit")).await?;

    entries
        .add_or_update(entity::entry::ActiveModel {
            id: ActiveValue::Set(inserted.id),
            content: ActiveValue::Set("yeni icerik".to_string()),
            create_date: ActiveValue::Set(Utc::now() + chrono::Duration::hours(1)),
            ..Default::default()
        })
        .await?;

    let row = entries.get_by_id(inserted.id).await?.unwrap();
    assert_eq!(row.create_date, inserted.create_date);

    Ok(())
}
