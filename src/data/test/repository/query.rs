use super::*;

#[tokio::test]
async fn get_by_id_of_a_missing_row_is_none() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entries = EntryRepository::new(db);

    assert_eq!(entries.get_by_id(Uuid::new_v4()).await?, None);

    Ok(())
}

#[tokio::test]
async fn get_list_filters_by_author() -> Result<(), RepoError> {
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

    for subject in ["bir", "iki", "uc"] {
        entries.add(new_entry(author.id, subject)).await?;
    }
    entries.add(new_entry(other.id, "baska")).await?;

    let listed = entries
        .get_list(
            Some(entity::entry::Column::CreatedById.eq(author.id).into_condition()),
            None,
        )
        .await?;

    assert_eq!(listed.len(), 3);
    assert!(listed.iter().all(|e| e.created_by_id == author.id));

    Ok(())
}

#[tokio::test]
async fn get_list_applies_the_requested_order() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    for subject in ["orta", "son", "bas"] {
        entries.add(new_entry(author.id, subject)).await?;
    }

    let listed = entries
        .get_list(None, Some((entity::entry::Column::Subject, Order::Asc)))
        .await?;

    let subjects: Vec<&str> = listed.iter().map(|e| e.subject.as_str()).collect();
    assert_eq!(subjects, vec!["bas", "orta", "son"]);

    Ok(())
}

#[tokio::test]
async fn get_single_returns_the_lone_match() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    let inserted = entries.add_returning(new_entry(author.id, "tek")).await?;

    let found = entries
        .get_single(entity::entry::Column::Subject.eq("tek"))
        .await?;

    assert_eq!(found, Some(inserted));

    Ok(())
}

#[tokio::test]
async fn get_single_is_none_when_nothing_matches() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entries = EntryRepository::new(db);

    let found = entries
        .get_single(entity::entry::Column::Subject.eq("yok"))
        .await?;

    assert_eq!(found, None);

    Ok(())
}

#[tokio::test]
async fn get_single_rejects_multiple_matches() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    entries.add(new_entry(author.id, "cift")).await?;
    entries.add(new_entry(author.id, "cift")).await?;

    let err = entries
        .get_single(entity::entry::Column::Subject.eq("cift"))
        .await
        .unwrap_err();

    assert!(matches!(err, RepoError::MultipleRecords));

    Ok(())
}

#[tokio::test]
async fn first_returns_a_match_or_none() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    entries.add(new_entry(author.id, "mevcut")).await?;

    let hit = entries
        .first(entity::entry::Column::Subject.eq("mevcut"))
        .await?;
    let miss = entries
        .first(entity::entry::Column::Subject.eq("namevcut"))
        .await?;

    assert!(hit.is_some());
    assert!(miss.is_none());

    Ok(())
}

#[tokio::test]
async fn get_builder_composes_with_further_query_steps() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entries = EntryRepository::new(db);

    entries.add(new_entry(author.id, "bir")).await?;
    entries.add(new_entry(author.id, "iki")).await?;

    let total = entries
        .get(entity::entry::Column::CreatedById.eq(author.id))
        .count(db)
        .await
        .map_err(RepoError::Db)?;

    assert_eq!(total, 2);

    Ok(())
}

#[tokio::test]
async fn get_list_with_related_loads_the_author_per_row() -> Result<(), RepoError> {
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

    entries.add(new_entry(author.id, "ortak")).await?;
    entries.add(new_entry(other.id, "ortak")).await?;
    entries.add(new_entry(author.id, "ayri")).await?;

    let listed = entries
        .get_list_with_related::<User>(Some(
            entity::entry::Column::Subject.eq("ortak").into_condition(),
        ))
        .await?;

    assert_eq!(listed.len(), 2);
    assert!(listed
        .iter()
        .all(|(entry, user)| user.as_ref().map(|u| u.id) == Some(entry.created_by_id)));

    Ok(())
}

#[tokio::test]
async fn get_list_with_related_spans_comment_to_entry() -> Result<(), RepoError> {
    let test = TestBuilder::new().with_forum_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entry = factory::create_entry(db, author.id).await?;
    let other_entry = factory::create_entry(db, author.id).await?;

    factory::create_comment(db, entry.id, author.id).await?;
    factory::create_comment(db, entry.id, author.id).await?;
    factory::create_comment(db, other_entry.id, author.id).await?;

    let comments = EntryCommentRepository::new(db);
    let listed = comments
        .get_list_with_related::<Entry>(Some(
            entity::entry_comment::Column::EntryId.eq(entry.id).into_condition(),
        ))
        .await?;

    assert_eq!(listed.len(), 2);
    assert!(listed
        .iter()
        .all(|(comment, parent)| comment.entry_id == entry.id
            && parent.as_ref().map(|e| e.id) == Some(entry.id)));

    Ok(())
}

#[tokio::test]
async fn get_by_id_with_related_loads_the_author() -> Result<(), RepoError> {
    let test = TestBuilder::new()
        .with_table(User)
        .with_table(Entry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let entry = factory::create_entry(db, author.id).await?;
    let entries = EntryRepository::new(db);

    let loaded = entries.get_by_id_with_related::<User>(entry.id).await?;

    let (found, related) = loaded.unwrap();
    assert_eq!(found.id, entry.id);
    assert_eq!(related.map(|u| u.id), Some(author.id));

    Ok(())
}
