//! `PgStore` against a real database. Each test gets a fresh migrated
//! database from `sqlx::test`; run with `DATABASE_URL` set and `--ignored`.

use sqlx::PgPool;
use uuid::Uuid;

use artune::domain::{ArtistBasics, AvailabilityStatus, NewUserProfile, Role};
use artune::error::AppError;
use artune::store::{PgStore, Store};

async fn account(store: &PgStore, role: Role) -> Uuid {
    let id = Uuid::new_v4();
    store
        .ensure_user_profile(&NewUserProfile {
            id,
            email: format!("{}@example.com", id),
            role,
        })
        .await
        .unwrap();
    id
}

fn basics(display_name: &str, location: Option<&str>) -> ArtistBasics {
    ArtistBasics {
        display_name: display_name.to_string(),
        location: location.map(str::to_string),
    }
}

async fn artist_rows(pool: &PgPool, user_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM artist_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn first_submit_creates_one_row(pool: PgPool) {
    let store = PgStore::new(pool.clone());
    let user_id = account(&store, Role::Artist).await;

    let artist = store
        .upsert_artist_basics(user_id, &basics("Jane Doe", Some("Austin, TX")))
        .await
        .unwrap();

    assert_eq!(artist.user_id, user_id);
    assert_eq!(artist.display_name, "Jane Doe");
    assert_eq!(artist.location.as_deref(), Some("Austin, TX"));
    assert_eq!(artist.availability_status, AvailabilityStatus::Available);
    assert!(!artist.verified);
    assert_eq!(artist_rows(&pool, user_id).await, 1);
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn resubmit_updates_the_same_row(pool: PgPool) {
    let store = PgStore::new(pool.clone());
    let user_id = account(&store, Role::Artist).await;

    let first = store
        .upsert_artist_basics(user_id, &basics("Jane Doe", Some("Austin, TX")))
        .await
        .unwrap();
    let second = store
        .upsert_artist_basics(user_id, &basics("DJ Jane", None))
        .await
        .unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.display_name, "DJ Jane");
    assert_eq!(second.location, None);
    assert_eq!(artist_rows(&pool, user_id).await, 1);
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn client_cannot_own_an_artist_profile(pool: PgPool) {
    let store = PgStore::new(pool.clone());
    let user_id = account(&store, Role::Client).await;

    let result = store
        .upsert_artist_basics(user_id, &basics("Sneaky", None))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert_eq!(artist_rows(&pool, user_id).await, 0);

    // The trigger stops writes that bypass the upsert
    let direct = sqlx::query("INSERT INTO artist_profiles (user_id, display_name) VALUES ($1, 'x')")
        .bind(user_id)
        .execute(&pool)
        .await;
    assert!(direct.is_err());
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn role_cannot_change(pool: PgPool) {
    let store = PgStore::new(pool.clone());
    let user_id = account(&store, Role::Client).await;

    let result = sqlx::query("UPDATE profiles SET role = 'artist' WHERE id = $1")
        .bind(user_id)
        .execute(&pool)
        .await;
    assert!(result.is_err());

    let profile = store.find_user_profile(user_id).await.unwrap().unwrap();
    assert_eq!(profile.role, Role::Client);
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn ensure_profile_keeps_existing_role(pool: PgPool) {
    let store = PgStore::new(pool);
    let user_id = account(&store, Role::Artist).await;

    let again = store
        .ensure_user_profile(&NewUserProfile {
            id: user_id,
            email: "other@example.com".to_string(),
            role: Role::Client,
        })
        .await
        .unwrap();

    assert_eq!(again.role, Role::Artist);
    assert_eq!(again.email, format!("{}@example.com", user_id));
}
