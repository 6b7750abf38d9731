//! Resolver Integration Tests
//!
//! Each test starts its own mock users endpoint on a local port and drives
//! the resolvers through real HTTP requests.
//!
//! Run with: cargo test -p integration-tests --test resolver_tests

use std::sync::Arc;

use axum::http::StatusCode;
use collab_client::{CollabClient, HttpUserDirectory, RoomContext, StaticRoomMembers, UserResolver};
use collab_common::{AppSettings, ClientConfig, CollabConfig};
use collab_core::{DirectoryError, RoomId, UserDirectory, UserInfo};
use integration_tests::{
    alice, ids, sample_users, DirectoryBehavior, MockDirectory, RecordedRequest, TEST_PUBLIC_KEY,
};

fn resolver_for(server: &MockDirectory) -> UserResolver {
    let directory = HttpUserDirectory::new(&server.directory_config()).expect("directory");
    UserResolver::new(Arc::new(directory))
}

fn default_user(id: &str) -> UserInfo {
    UserInfo::new(format!("User {id}"), "/assets/favicon.ico")
}

// ============================================================================
// HTTP Directory Tests
// ============================================================================

#[tokio::test]
async fn test_directory_request_shape() {
    let server = MockDirectory::serving(sample_users()).await.unwrap();
    let config = collab_common::DirectoryConfig {
        auth_token: Some("token-123".to_string()),
        ..server.directory_config()
    };
    let directory = HttpUserDirectory::new(&config).unwrap();

    let users = directory.find_users(&ids(&["a1", "b2"])).await.unwrap();
    assert_eq!(users.len(), 2);

    assert_eq!(
        server.requests(),
        vec![RecordedRequest {
            raw_query: Some("ids=a1,b2".to_string()),
            ids: Some("a1,b2".to_string()),
            content_type: Some("application/json".to_string()),
            authorization: Some("Bearer token-123".to_string()),
        }]
    );
}

#[tokio::test]
async fn test_directory_encodes_each_id() {
    let server = MockDirectory::serving(sample_users()).await.unwrap();
    let directory = HttpUserDirectory::new(&server.directory_config()).unwrap();

    directory.find_users(&ids(&["a1", "x,y", "b 2"])).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].raw_query.as_deref(), Some("ids=a1,x%2Cy,b%202"));
    assert_eq!(requests[0].ids.as_deref(), Some("a1,x,y,b 2"));
}

#[tokio::test]
async fn test_directory_reports_status() {
    let server = MockDirectory::start(DirectoryBehavior::Status(StatusCode::SERVICE_UNAVAILABLE))
        .await
        .unwrap();
    let directory = HttpUserDirectory::new(&server.directory_config()).unwrap();

    let err = directory.find_users(&ids(&["a1"])).await.unwrap_err();
    assert!(matches!(err, DirectoryError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_directory_reports_malformed_body() {
    let server = MockDirectory::start(DirectoryBehavior::RawBody("{\"users\": []}"))
        .await
        .unwrap();
    let directory = HttpUserDirectory::new(&server.directory_config()).unwrap();

    let err = directory.find_users(&ids(&["a1"])).await.unwrap_err();
    assert!(matches!(err, DirectoryError::Decode(_)));
}

// ============================================================================
// User Resolution Tests
// ============================================================================

#[tokio::test]
async fn test_resolve_users_example() {
    let server = MockDirectory::serving(vec![alice()]).await.unwrap();
    let resolver = resolver_for(&server);

    let result = resolver.resolve_users(&ids(&["a1", "b2"])).await;
    assert_eq!(
        result,
        vec![UserInfo::new("Alice", "/a.png"), default_user("b2")]
    );
}

#[tokio::test]
async fn test_resolve_users_order_and_length() {
    let server = MockDirectory::serving(sample_users()).await.unwrap();
    let resolver = resolver_for(&server);

    let requested = ids(&["c3", "x9", "a1", "c3", "b2"]);
    let result = resolver.resolve_users(&requested).await;

    assert_eq!(result.len(), requested.len());
    assert_eq!(
        result,
        vec![
            UserInfo::new("Carol", "/c.png"),
            default_user("x9"),
            UserInfo::new("Alice", "/a.png"),
            UserInfo::new("Carol", "/c.png"),
            UserInfo::new("Bob", "/b.png"),
        ]
    );
    // One request per call, duplicates passed through as given
    assert_eq!(server.requests().len(), 1);
    assert_eq!(
        server.requests()[0].ids.as_deref(),
        Some("c3,x9,a1,c3,b2")
    );
}

#[tokio::test]
async fn test_resolve_users_server_error_defaults_everything() {
    for status in [StatusCode::INTERNAL_SERVER_ERROR, StatusCode::NOT_FOUND] {
        let server = MockDirectory::start(DirectoryBehavior::Status(status))
            .await
            .unwrap();
        let resolver = resolver_for(&server);

        let result = resolver.resolve_users(&ids(&["a1", "b2"])).await;
        assert_eq!(result, vec![default_user("a1"), default_user("b2")]);
    }
}

#[tokio::test]
async fn test_resolve_users_malformed_body_defaults_everything() {
    let server = MockDirectory::start(DirectoryBehavior::RawBody("not json"))
        .await
        .unwrap();
    let resolver = resolver_for(&server);

    let result = resolver.resolve_users(&ids(&["a1"])).await;
    assert_eq!(result, vec![default_user("a1")]);
}

#[tokio::test]
async fn test_resolve_users_empty_input_sends_nothing() {
    let server = MockDirectory::serving(sample_users()).await.unwrap();
    let resolver = resolver_for(&server);

    assert!(resolver.resolve_users(&[]).await.is_empty());
    assert!(server.requests().is_empty());
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn test_client_from_config_end_to_end() {
    let server = MockDirectory::serving(sample_users()).await.unwrap();
    let config = CollabConfig {
        app: AppSettings::default(),
        client: ClientConfig {
            public_api_key: TEST_PUBLIC_KEY.to_string(),
        },
        directory: collab_common::DirectoryConfig {
            default_avatar: "/img/anon.png".to_string(),
            ..server.directory_config()
        },
    };

    let room = RoomId::new("whiteboard").unwrap();
    let members = StaticRoomMembers::new().with_room(room.clone(), ids(&["a1", "b2", "A11"]));
    let client = CollabClient::from_config(&config, Arc::new(members)).unwrap();
    let ctx: RoomContext = RoomContext::new(Arc::new(client));

    let users = ctx.resolve_users(&ids(&["b2", "zz"])).await;
    assert_eq!(
        users,
        vec![
            UserInfo::new("Bob", "/b.png"),
            UserInfo::new("User zz", "/img/anon.png"),
        ]
    );

    let suggestions = ctx.resolve_mention_suggestions("a1", &room).await;
    assert_eq!(
        suggestions,
        vec![Some("a1".to_string()), None, Some("A11".to_string())]
    );

    let everyone = ctx.resolve_mention_suggestions("", &room).await;
    assert_eq!(
        everyone,
        vec![
            Some("a1".to_string()),
            Some("b2".to_string()),
            Some("A11".to_string())
        ]
    );
}
