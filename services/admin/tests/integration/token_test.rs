use folio_auth_types::token::{ADMIN_TOKEN_TTL_SECS, validate_admin_token};

use folio_admin::error::AdminApiError;
use folio_admin::usecase::token::{
    VerifyLoginCodeInput, VerifyLoginCodeUseCase, issue_admin_token,
};

use crate::helpers::{
    MockLoginCodeRepo, MockSettingsStore, TEST_EMAIL, TEST_JWT_SECRET, expired_login_code,
    live_login_code,
};

fn usecase(repo: MockLoginCodeRepo) -> VerifyLoginCodeUseCase<MockSettingsStore, MockLoginCodeRepo>
{
    VerifyLoginCodeUseCase {
        settings: MockSettingsStore::with_email(),
        login_codes: repo,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

// ── issue_admin_token ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_token_that_validates_successfully() {
    let (token, exp) = issue_admin_token(TEST_EMAIL, TEST_JWT_SECRET).unwrap();

    assert!(!token.is_empty());

    let info = validate_admin_token(&token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.email, TEST_EMAIL);
    assert_eq!(info.expires_at, exp);
}

#[tokio::test]
async fn issued_token_should_fail_with_wrong_secret() {
    let (token, _) = issue_admin_token(TEST_EMAIL, TEST_JWT_SECRET).unwrap();
    assert!(validate_admin_token(&token, "wrong-secret").is_err());
}

// ── VerifyLoginCodeUseCase ───────────────────────────────────────────────────

#[tokio::test]
async fn should_exchange_valid_code_for_session_token() {
    let code = live_login_code(TEST_EMAIL, "ABC123");
    let uc = usecase(MockLoginCodeRepo::new(vec![code]));

    let out = uc
        .execute(VerifyLoginCodeInput {
            code: "ABC123".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(out.expires_in, ADMIN_TOKEN_TTL_SECS);

    let info = validate_admin_token(&out.token, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.email, TEST_EMAIL);
}

#[tokio::test]
async fn should_accept_lowercase_submission_of_uppercase_code() {
    let code = live_login_code(TEST_EMAIL, "ABC123");
    let uc = usecase(MockLoginCodeRepo::new(vec![code]));

    let result = uc
        .execute(VerifyLoginCodeInput {
            code: "abc123".to_owned(),
        })
        .await;

    assert!(result.is_ok(), "case must not matter, got {result:?}");
}

#[tokio::test]
async fn should_purge_all_codes_for_email_after_success() {
    let repo = MockLoginCodeRepo::new(vec![
        live_login_code(TEST_EMAIL, "ABC123"),
        expired_login_code(TEST_EMAIL, "EXP000"),
    ]);
    let codes_handle = repo.codes_handle();
    let uc = usecase(repo);

    uc.execute(VerifyLoginCodeInput {
        code: "ABC123".to_owned(),
    })
    .await
    .unwrap();

    assert!(
        codes_handle.lock().unwrap().is_empty(),
        "ledger must be emptied for this email after login"
    );
}

#[tokio::test]
async fn should_reject_wrong_code() {
    let code = live_login_code(TEST_EMAIL, "ABC123");
    let uc = usecase(MockLoginCodeRepo::new(vec![code]));

    let result = uc
        .execute(VerifyLoginCodeInput {
            code: "ZZZ999".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AdminApiError::InvalidLoginCode)),
        "expected InvalidLoginCode, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_expired_code_even_when_value_matches() {
    let uc = usecase(MockLoginCodeRepo::new(vec![expired_login_code(
        TEST_EMAIL, "ABC123",
    )]));

    let result = uc
        .execute(VerifyLoginCodeInput {
            code: "ABC123".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AdminApiError::InvalidLoginCode)),
        "expected InvalidLoginCode, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_already_verified_code() {
    let mut code = live_login_code(TEST_EMAIL, "ABC123");
    code.verified = true;
    let uc = usecase(MockLoginCodeRepo::new(vec![code]));

    let result = uc
        .execute(VerifyLoginCodeInput {
            code: "ABC123".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AdminApiError::InvalidLoginCode)),
        "expected InvalidLoginCode, got {result:?}"
    );
}

#[tokio::test]
async fn should_fail_second_verification_with_same_code() {
    let code = live_login_code(TEST_EMAIL, "ABC123");
    let repo = MockLoginCodeRepo::new(vec![code]);
    let uc = usecase(repo);

    let first = uc
        .execute(VerifyLoginCodeInput {
            code: "ABC123".to_owned(),
        })
        .await;
    assert!(first.is_ok());

    let second = uc
        .execute(VerifyLoginCodeInput {
            code: "ABC123".to_owned(),
        })
        .await;
    assert!(
        matches!(second, Err(AdminApiError::InvalidLoginCode)),
        "a code must be single-use, got {second:?}"
    );
}

#[tokio::test]
async fn should_reject_wrong_length_code_as_validation_error() {
    let uc = usecase(MockLoginCodeRepo::empty());

    for bad in ["", "ABC12", "ABC1234"] {
        let result = uc
            .execute(VerifyLoginCodeInput {
                code: bad.to_owned(),
            })
            .await;
        assert!(
            matches!(result, Err(AdminApiError::InvalidRequest)),
            "expected InvalidRequest for {bad:?}, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_fail_when_no_email_configured() {
    let uc = VerifyLoginCodeUseCase {
        settings: MockSettingsStore::unconfigured(),
        login_codes: MockLoginCodeRepo::empty(),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };

    let result = uc
        .execute(VerifyLoginCodeInput {
            code: "ABC123".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AdminApiError::NotConfigured)),
        "expected NotConfigured, got {result:?}"
    );
}

#[tokio::test]
async fn wrong_expired_and_reused_codes_share_one_error_shape() {
    let wrong = usecase(MockLoginCodeRepo::new(vec![live_login_code(
        TEST_EMAIL, "ABC123",
    )]))
    .execute(VerifyLoginCodeInput {
        code: "ZZZ999".to_owned(),
    })
    .await
    .unwrap_err();

    let expired = usecase(MockLoginCodeRepo::new(vec![expired_login_code(
        TEST_EMAIL, "ABC123",
    )]))
    .execute(VerifyLoginCodeInput {
        code: "ABC123".to_owned(),
    })
    .await
    .unwrap_err();

    let mut reused_row = live_login_code(TEST_EMAIL, "ABC123");
    reused_row.verified = true;
    let reused = usecase(MockLoginCodeRepo::new(vec![reused_row]))
        .execute(VerifyLoginCodeInput {
            code: "ABC123".to_owned(),
        })
        .await
        .unwrap_err();

    for err in [&wrong, &expired, &reused] {
        assert_eq!(err.kind(), "INVALID_LOGIN_CODE");
        assert_eq!(err.to_string(), "invalid or expired code");
    }
}
