//! Connection Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DB_USER, DB_PASSWORD, DB_HOST, DB_PORT, DB_NAME
//!
//! Run with: cargo test -p integration-tests --test connection_tests

use dbcheck_core::{check_connection, ConnectError, DatabaseHandle};
use dbcheck_db::PgDriver;
use integration_tests::{check_test_env, open_live_handle, test_config, with_password};

#[tokio::test]
async fn test_check_connection_succeeds() {
    if !check_test_env().await {
        return;
    }
    let config = test_config().unwrap();

    check_connection(&PgDriver::new(), &config.connection_url())
        .await
        .expect("configured database should be reachable");
}

#[tokio::test]
async fn test_handle_connects_on_ping() {
    if !check_test_env().await {
        return;
    }
    let config = test_config().unwrap();

    let mut handle = open_live_handle(&config.connection_url()).await.unwrap();
    assert!(handle.is_connected());

    // A second ping reuses the session
    handle.ping().await.unwrap();
    handle.close().await;
}

#[tokio::test]
async fn test_rejected_password_is_liveness_error() {
    if !check_test_env().await {
        return;
    }
    let config = with_password(&test_config().unwrap(), "definitely-not-the-password@:/%");

    // Servers with trust authentication accept any password
    if let Err(err) = check_connection(&PgDriver::new(), &config.connection_url()).await {
        assert!(matches!(err, ConnectError::Liveness(_)), "got {err:?}");
    }
}

#[tokio::test]
async fn test_wrong_port_is_liveness_error() {
    if !check_test_env().await {
        return;
    }
    let mut config = test_config().unwrap();
    config.port = "1".to_string();

    let err = check_connection(&PgDriver::new(), &config.connection_url())
        .await
        .unwrap_err();

    assert!(err.is_liveness(), "got {err:?}");
}
