use planed::config::jwt::JwtConfig;
use planed::utils::jwt::{create_access_token, verify_token};
use uuid::Uuid;

fn test_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-nur-fuer-tests".to_string(),
        token_expiry_secs: 24 * 3600,
    }
}

#[test]
fn test_token_roundtrip() {
    let config = test_config();
    let user_id = Uuid::new_v4();

    let token = create_access_token(user_id, "lehrkraft@planed.test", &config).unwrap();
    let claims = verify_token(&token, &config).unwrap();

    assert_eq!(claims.sub, user_id.to_string());
    assert_eq!(claims.email, "lehrkraft@planed.test");
    assert!(claims.exp > claims.iat);
    assert_eq!(claims.exp - claims.iat, 24 * 3600);
}

#[test]
fn test_verify_garbage_token_fails() {
    let config = test_config();

    let result = verify_token("nicht.ein.token", &config);

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(err.status, axum::http::StatusCode::UNAUTHORIZED);
}

#[test]
fn test_verify_wrong_secret_fails() {
    let config = test_config();
    let other_config = JwtConfig {
        secret: "ein-anderes-geheimnis".to_string(),
        token_expiry_secs: 24 * 3600,
    };

    let token = create_access_token(Uuid::new_v4(), "lehrkraft@planed.test", &config).unwrap();
    let result = verify_token(&token, &other_config);

    assert!(result.is_err());
}
