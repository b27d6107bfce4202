//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variable: DATABASE_URL
//!
//! Without DATABASE_URL every test returns early and reports success.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_me_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me_returns_profile() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();

    let response = server.get_auth("/api/v1/users/@me", &alice.token).await.unwrap();
    let body: Envelope<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
    assert_eq!(
        body.data["username"].as_str().unwrap(),
        alice.user.username
    );
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .get_auth("/api/v1/users/@me", "not-a-real-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Community Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_community() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/communities",
            &alice.token,
            &CreateCommunityPayload::named("Rust Study Seoul"),
        )
        .await
        .unwrap();
    let created: Envelope<CommunityData> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(created.success);
    assert_eq!(created.data.name, "Rust Study Seoul");
    assert_eq!(created.data.owner_id, alice.user.id.to_string());

    let response = server
        .get_auth(
            &format!("/api/v1/communities/{}", created.data.id),
            &alice.token,
        )
        .await
        .unwrap();
    let fetched: Envelope<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    // The creator is automatically the owner member
    assert_eq!(fetched.data["member_count"].as_i64().unwrap(), 1);
}

#[tokio::test]
async fn test_soft_deleted_community_reads_as_absent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/communities",
            &alice.token,
            &CreateCommunityPayload::named("Ephemeral Club"),
        )
        .await
        .unwrap();
    let created: Envelope<CommunityData> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/communities/{}", created.data.id);

    let response = server.delete_auth(&path, &alice.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The row still exists physically; the API must treat it as gone
    let response = server.get_auth(&path, &alice.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Membership Tests
// ============================================================================

async fn create_community(server: &TestServer, owner: &TestUser, name: &str) -> CommunityData {
    let response = server
        .post_auth(
            "/api/v1/communities",
            &owner.token,
            &CreateCommunityPayload::named(name),
        )
        .await
        .unwrap();
    let created: Envelope<CommunityData> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    created.data
}

#[tokio::test]
async fn test_join_and_duplicate_join_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();
    let bob = seed_user(&server, "bob").await.unwrap();
    let community = create_community(&server, &alice, "Join Club").await;
    let members_path = format!("/api/v1/communities/{}/members", community.id);

    let response = server
        .post_auth_empty(&members_path, &bob.token)
        .await
        .unwrap();
    let joined: Envelope<MemberData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(joined.data.role, "member");

    // Second join while the membership is active conflicts
    let response = server
        .post_auth_empty(&members_path, &bob.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_last_admin_cannot_leave() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();
    let bob = seed_user(&server, "bob").await.unwrap();
    let community = create_community(&server, &alice, "Admin Club").await;
    let leave_path = format!("/api/v1/communities/{}/members/@me", community.id);

    // Alice is the sole admin (owner); leaving must be blocked
    let response = server.delete_auth(&leave_path, &alice.token).await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "LAST_ADMIN");

    // The membership must be untouched: alice can still act as admin
    let response = server
        .post_auth(
            &format!("/api/v1/communities/{}/notifications", community.id),
            &alice.token,
            &CreateNotificationPayload {
                title: "still here".to_string(),
                content: "the leave was blocked".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // A regular member can leave freely
    server
        .post_auth_empty(
            &format!("/api/v1/communities/{}/members", community.id),
            &bob.token,
        )
        .await
        .unwrap();
    let response = server.delete_auth(&leave_path, &bob.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_role_change_is_admin_gated() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();
    let bob = seed_user(&server, "bob").await.unwrap();
    let carol = seed_user(&server, "carol").await.unwrap();
    let community = create_community(&server, &alice, "Role Club").await;
    let members_path = format!("/api/v1/communities/{}/members", community.id);

    for user in [&bob, &carol] {
        server.post_auth_empty(&members_path, &user.token).await.unwrap();
    }

    // A regular member cannot promote anyone
    let response = server
        .patch_auth(
            &format!("{}/{}", members_path, carol.user.id),
            &bob.token,
            &UpdateRolePayload {
                role: "admin".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner can
    let response = server
        .patch_auth(
            &format!("{}/{}", members_path, carol.user.id),
            &alice.token,
            &UpdateRolePayload {
                role: "admin".to_string(),
            },
        )
        .await
        .unwrap();
    let updated: Envelope<MemberData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.data.role, "admin");

    // With a second admin present, alice may now leave
    let response = server
        .delete_auth(
            &format!("/api/v1/communities/{}/members/@me", community.id),
            &alice.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Round & Attendance Tests
// ============================================================================

async fn create_round(
    server: &TestServer,
    admin: &TestUser,
    community_id: &str,
    payload: &CreateRoundPayload,
) -> RoundData {
    let response = server
        .post_auth(
            &format!("/api/v1/communities/{community_id}/rounds"),
            &admin.token,
            payload,
        )
        .await
        .unwrap();
    let created: Envelope<RoundData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    created.data
}

#[tokio::test]
async fn test_duplicate_attendance_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();
    let community = create_community(&server, &alice, "Attendance Club").await;
    let round = create_round(&server, &alice, &community.id, &CreateRoundPayload::open_now()).await;
    let path = format!("/api/v1/rounds/{}/attendances", round.id);

    let response = server
        .post_auth(
            &path,
            &alice.token,
            &MarkAttendancePayload {
                status: "present".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Marking again before the round ends conflicts
    let response = server
        .post_auth(
            &path,
            &alice.token,
            &MarkAttendancePayload {
                status: "late".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Exactly one active record for (round, user)
    let response = server.get_auth(&path, &alice.token).await.unwrap();
    let listed: Envelope<Vec<AttendanceData>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.data.len(), 1);
    assert_eq!(listed.data[0].status, "present");
}

#[tokio::test]
async fn test_attendance_outside_window_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();
    let community = create_community(&server, &alice, "Closed Round Club").await;
    let round = create_round(
        &server,
        &alice,
        &community.id,
        &CreateRoundPayload::already_over(),
    )
    .await;

    let response = server
        .post_auth(
            &format!("/api/v1/rounds/{}/attendances", round.id),
            &alice.token,
            &MarkAttendancePayload {
                status: "present".to_string(),
            },
        )
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "ROUND_CLOSED");
}

#[tokio::test]
async fn test_round_sequence_numbers_increment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();
    let community = create_community(&server, &alice, "Sequence Club").await;

    let first = create_round(&server, &alice, &community.id, &CreateRoundPayload::open_now()).await;
    let second = create_round(&server, &alice, &community.id, &CreateRoundPayload::open_now()).await;
    assert_eq!(first.sequence_no, 1);
    assert_eq!(second.sequence_no, 2);
}

// ============================================================================
// Cursor Pagination Tests
// ============================================================================

#[tokio::test]
async fn test_round_pagination_walk() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();
    let community = create_community(&server, &alice, "Paging Club").await;

    for _ in 0..12 {
        create_round(&server, &alice, &community.id, &CreateRoundPayload::open_now()).await;
    }

    let base = format!("/api/v1/communities/{}/rounds", community.id);
    let mut seen = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let path = match &cursor {
            Some(c) => format!("{base}?limit=5&cursor={c}"),
            None => format!("{base}?limit=5"),
        };
        let response = server.get_auth(&path, &alice.token).await.unwrap();
        let page: PageEnvelope<RoundData> = assert_json(response, StatusCode::OK).await.unwrap();

        assert!(page.count <= 5);
        seen.extend(page.data.iter().map(|r| r.id.clone()));

        if !page.pagination.has_more {
            assert!(page.pagination.next_cursor.is_none());
            break;
        }
        cursor = page.pagination.next_cursor.clone();
        assert!(cursor.is_some());
    }

    assert_eq!(seen.len(), 12, "walk covers every round exactly once");
    let mut deduped = seen.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 12, "no duplicates across pages");
}

#[tokio::test]
async fn test_pagination_limit_is_clamped() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();
    let community = create_community(&server, &alice, "Clamp Club").await;
    let base = format!("/api/v1/communities/{}/rounds", community.id);

    // Above the maximum: accepted but clamped to 50 (no error)
    let response = server
        .get_auth(&format!("{base}?limit=500"), &alice.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Below the minimum: clamped to 1
    let response = server
        .get_auth(&format!("{base}?limit=0"), &alice.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_malformed_cursor_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();
    let community = create_community(&server, &alice, "Bad Cursor Club").await;

    let response = server
        .get_auth(
            &format!(
                "/api/v1/communities/{}/rounds?cursor=not-a-cursor",
                community.id
            ),
            &alice.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Goal Tests
// ============================================================================

#[tokio::test]
async fn test_goal_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/goals",
            &alice.token,
            &CreateGoalPayload {
                title: "Read chapter 4".to_string(),
                community_id: None,
            },
        )
        .await
        .unwrap();
    let created: Envelope<GoalData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!created.data.is_team);
    assert!(!created.data.is_completed);

    let path = format!("/api/v1/goals/{}", created.data.id);

    // Toggle completion
    let response = server
        .post_auth_empty(&format!("{path}/complete"), &alice.token)
        .await
        .unwrap();
    let toggled: Envelope<GoalData> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(toggled.data.is_completed);

    // Another user cannot see the personal goal
    let bob = seed_user(&server, "bob").await.unwrap();
    let response = server.get_auth(&path, &bob.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Soft delete, then read as absent
    let response = server.delete_auth(&path, &alice.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    let response = server.get_auth(&path, &alice.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_team_goal_requires_membership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();
    let bob = seed_user(&server, "bob").await.unwrap();
    let community = create_community(&server, &alice, "Goal Club").await;

    // Bob is not a member of the community
    let response = server
        .post_auth(
            "/api/v1/goals",
            &bob.token,
            &CreateGoalPayload {
                title: "Team sprint".to_string(),
                community_id: Some(community.id.clone()),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner can create a team goal
    let response = server
        .post_auth(
            "/api/v1/goals",
            &alice.token,
            &CreateGoalPayload {
                title: "Team sprint".to_string(),
                community_id: Some(community.id.clone()),
            },
        )
        .await
        .unwrap();
    let created: Envelope<GoalData> = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(created.data.is_team);
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_pinned_notification_exclusivity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();
    let community = create_community(&server, &alice, "Pin Club").await;
    let base = format!("/api/v1/communities/{}/notifications", community.id);

    let mut ids = Vec::new();
    for title in ["first", "second"] {
        let response = server
            .post_auth(
                &base,
                &alice.token,
                &CreateNotificationPayload {
                    title: title.to_string(),
                    content: "content".to_string(),
                },
            )
            .await
            .unwrap();
        let created: Envelope<NotificationData> =
            assert_json(response, StatusCode::CREATED).await.unwrap();
        ids.push(created.data.id);
    }

    // Pin A, then pin B; A must end up unpinned
    for id in &ids {
        let response = server
            .post_auth_empty(&format!("/api/v1/notifications/{id}/pin"), &alice.token)
            .await
            .unwrap();
        let pinned: Envelope<NotificationData> =
            assert_json(response, StatusCode::OK).await.unwrap();
        assert!(pinned.data.is_pinned);
    }

    let response = server.get_auth(&base, &alice.token).await.unwrap();
    let listed: PageEnvelope<NotificationData> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let pinned: Vec<_> = listed.data.iter().filter(|n| n.is_pinned).collect();
    assert_eq!(pinned.len(), 1, "at most one pinned notification");
    assert_eq!(pinned[0].id, ids[1]);
}

#[tokio::test]
async fn test_notification_creation_requires_admin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let alice = seed_user(&server, "alice").await.unwrap();
    let bob = seed_user(&server, "bob").await.unwrap();
    let community = create_community(&server, &alice, "Notify Club").await;
    let base = format!("/api/v1/communities/{}/notifications", community.id);

    server
        .post_auth_empty(
            &format!("/api/v1/communities/{}/members", community.id),
            &bob.token,
        )
        .await
        .unwrap();

    let response = server
        .post_auth(
            &base,
            &bob.token,
            &CreateNotificationPayload {
                title: "not allowed".to_string(),
                content: "bob is only a member".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}
