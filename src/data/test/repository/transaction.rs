use super::*;

#[tokio::test]
async fn committed_work_is_visible_on_the_base_connection() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let store = Store::new(db.clone());

    let txn = store.begin().await?;
    {
        let entries = EntryRepository::new(&txn);
        entries.add(new_entry(author.id, "islemde")).await?;
        entries.add(new_entry(author.id, "islemde de")).await?;

        // Repositories over the same transaction see each other's writes.
        assert_eq!(entries.get_all().await?.len(), 2);
    }
    txn.commit().await?;

    let entries = EntryRepository::new(db);
    assert_eq!(entries.get_all().await?.len(), 2);

    Ok(())
}

#[tokio::test]
async fn rolled_back_work_leaves_no_trace() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let store = Store::new(db.clone());

    let txn = store.begin().await?;
    {
        let entries = EntryRepository::new(&txn);
        entries.add(new_entry(author.id, "iptal")).await?;
    }
    txn.rollback().await?;

    let entries = EntryRepository::new(db);
    assert_eq!(entries.get_all().await?.len(), 0);

    Ok(())
}
