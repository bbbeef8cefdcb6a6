//! tests/api/check_nickname.rs

use crate::helpers::spawn_app;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn taken_nickname_is_reported_as_not_unique() {
    // Arrange
    let test_app = spawn_app();

    // Act
    let unique = test_app
        .api
        .check_nickname_for_uniq_request("nickname")
        .await;

    // Assert
    assert!(!unique);
}

#[tokio::test(start_paused = true)]
async fn other_nicknames_are_unique() {
    // Arrange
    let test_app = spawn_app();
    let test_cases = vec![
        ("ursula", "plain nickname"),
        ("NICKNAME", "different case"),
        ("nickname ", "trailing whitespace"),
        ("", "empty nickname"),
        ("никнейм", "cyrillic nickname"),
    ];

    for (nickname, description) in test_cases {
        // Act
        let unique = test_app.api.check_nickname_for_uniq_request(nickname).await;

        // Assert
        assert!(unique, "The api reported a taken nickname for {}.", description);
    }
}

#[tokio::test(start_paused = true)]
async fn nickname_check_waits_for_the_configured_latency() {
    // Arrange
    let test_app = spawn_app();
    let start = Instant::now();

    // Act
    test_app.api.check_nickname_for_uniq_request("ursula").await;

    // Assert
    assert!(start.elapsed() >= test_app.configuration.api.latency());
}

#[tokio::test(start_paused = true)]
async fn concurrent_checks_resolve_independently() {
    // Arrange
    let test_app = spawn_app();
    let start = Instant::now();

    // Act
    let (first, second) = tokio::join!(
        test_app.api.check_nickname_for_uniq_request("nickname"),
        test_app.api.check_nickname_for_uniq_request("ursula"),
    );

    // Assert
    assert!(!first);
    assert!(second);
    // both delays run at the same time
    assert!(start.elapsed() < test_app.configuration.api.latency() * 2);
}
