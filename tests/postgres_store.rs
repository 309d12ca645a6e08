use anyhow::Result;
use sqlx::PgPool;
use student_roster::{
    domain::models::NewStudent,
    infrastructure::store::{PgStudentStore, StudentStore},
};

#[path = "test_harness.rs"]
mod test_harness;

use test_harness::run_test;

#[tokio::test]
async fn update_email_touches_a_single_row() -> Result<()> {
    run_test(run_update_scenario).await
}

#[tokio::test]
async fn sex_lookup_miss_is_empty() -> Result<()> {
    run_test(run_sex_scenario).await
}

async fn run_update_scenario(pool: PgPool) -> Result<()> {
    let store = PgStudentStore::new(pool.clone());
    let first = store
        .insert(NewStudent::new("Ada", "Lovelace", "x@x.com", "F"))
        .await?;
    let second = store
        .insert(NewStudent::new("Alan", "Turing", "alan@x.com", "M"))
        .await?;

    let updated = store
        .update_email(first.id, "y@y.com")
        .await?
        .expect("row exists");
    assert_eq!(updated.email, "y@y.com");
    assert_eq!(updated.firstname, first.firstname);

    let listed = store.list_all().await?;
    assert_eq!(listed.iter().filter(|s| s.id == first.id).count(), 1);
    assert!(listed.contains(&updated));
    assert!(listed.contains(&second));

    let missing_id = second.id + 1_000_000;
    assert!(store.update_email(missing_id, "z@z.com").await?.is_none());
    assert!(store.get(missing_id).await?.is_none());

    sqlx::query("DELETE FROM student WHERE id = ANY($1)")
        .bind(vec![first.id, second.id])
        .execute(&pool)
        .await?;

    Ok(())
}

async fn run_sex_scenario(pool: PgPool) -> Result<()> {
    let store = PgStudentStore::new(pool);

    assert!(store.find_by_sex("no-such-sex-key").await?.is_none());

    Ok(())
}
