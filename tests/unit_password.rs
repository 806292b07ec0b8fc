use planed::utils::password::{hash_password, verify_password};

#[test]
fn test_hash_password_success() {
    let password = "testpasswort123";
    let result = hash_password(password);

    assert!(result.is_ok());
    let hash = result.unwrap();
    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_verify_password_correct() {
    let password = "richtigespasswort";
    let hash = hash_password(password).unwrap();

    let result = verify_password(password, &hash);

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let password = "richtigespasswort";
    let wrong_password = "falschespasswort";
    let hash = hash_password(password).unwrap();

    let result = verify_password(wrong_password, &hash);

    assert!(result.is_ok());
    assert!(!result.unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    let result = verify_password("testpasswort", "kein_gueltiger_bcrypt_hash");

    assert!(result.is_err());
}

#[test]
fn test_hash_generates_unique_hashes() {
    let password = "gleichespasswort";
    let hash1 = hash_password(password).unwrap();
    let hash2 = hash_password(password).unwrap();

    assert_ne!(hash1, hash2);
    assert!(verify_password(password, &hash1).unwrap());
    assert!(verify_password(password, &hash2).unwrap());
}

#[test]
fn test_hash_unicode_characters() {
    let password = "Größenmaßstäbe-Übung!";
    let hash = hash_password(password).unwrap();

    let result = verify_password(password, &hash);

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[test]
fn test_verify_case_sensitive() {
    let password = "PasswortMitGross";
    let hash = hash_password(password).unwrap();

    assert!(!verify_password("passwortmitgross", &hash).unwrap());
}
