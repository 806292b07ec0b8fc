use planed::utils::password::hash_password;
#[allow(unused_imports)]
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Generate a unique email address for test isolation.
pub fn generate_unique_email() -> String {
    format!("test-{}@planed.test", Uuid::new_v4())
}

/// Insert a user directly, bypassing the registration endpoint.
#[allow(dead_code)]
pub async fn create_test_user(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (email, password, name) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(email)
    .bind(&hashed)
    .bind("Test Lehrkraft")
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        name: "Test Lehrkraft".to_string(),
    }
}
