mod common;

use std::path::PathBuf;
use std::time::Duration;

use async_ethereum::{Client, ConnectionMeta, Endpoint, Error, TransportError};
use common::{echo, ipc_node, IpcNode, Reply};
use futures_util::future::join_all;
use serde_json::{json, Value};

async fn client_for(node: &IpcNode) -> Client {
    let meta = ConnectionMeta::new(&node.uri())
        .timeout(Duration::from_millis(300))
        .reconnect_delay(Duration::from_millis(10));
    Client::connect(meta).await.unwrap()
}

#[tokio::test]
async fn connects_eagerly() {
    let dir = tempfile::tempdir().unwrap();
    let node = ipc_node(dir.path(), |_, req| Reply::Line(echo(req)));

    let client = async_ethereum::connect(&node.uri()).await.unwrap();
    node.wait_for_connections(1).await;
    assert_eq!(client.endpoint(), Some(&Endpoint::Ipc { path: node.path.clone() }));
}

#[tokio::test]
async fn missing_socket_fails_to_connect() {
    let dir = tempfile::tempdir().unwrap();
    let uri = format!("unix://{}", dir.path().join("nobody.ipc").display());

    let err = async_ethereum::connect(&uri).await.err().unwrap();
    assert!(matches!(err, Error::Transport(TransportError::Io(_))), "{err:?}");
}

#[tokio::test]
async fn one_connection_serves_many_calls() {
    let dir = tempfile::tempdir().unwrap();
    let node = ipc_node(dir.path(), |_, req| Reply::Line(echo(req)));
    let client = client_for(&node).await;

    for n in 0..3 {
        let result = client.request("test_echo", vec![json!(n)]).await.unwrap();
        assert_eq!(result, json!(n));
    }

    assert_eq!(node.accepted(), 1);
    let ids: Vec<Value> = node.requests.lock().unwrap().iter().map(|r| r["id"].clone()).collect();
    assert_eq!(ids, vec![json!(1), json!(2), json!(3)]);
}

#[tokio::test]
async fn dropped_connection_is_replaced_and_call_replayed() {
    let dir = tempfile::tempdir().unwrap();
    let node = ipc_node(dir.path(), |conn, req| match conn {
        0 => Reply::Hangup,
        _ => Reply::Line(echo(req)),
    });
    let client = client_for(&node).await;

    let result = client.request("test_echo", vec![json!("again")]).await.unwrap();
    assert_eq!(result, json!("again"));
    assert_eq!(node.accepted(), 2);

    // The same request went out on both connections.
    {
        let requests = node.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
    }

    // Ids keep counting on the new connection.
    client.request("test_echo", vec![json!(0)]).await.unwrap();
    assert_eq!(node.requests.lock().unwrap()[2]["id"], json!(2));
    assert_eq!(client.next_id(), 3);
}

#[tokio::test]
async fn call_is_replayed_only_once() {
    let dir = tempfile::tempdir().unwrap();
    let node = ipc_node(dir.path(), |_, _| Reply::Hangup);
    let client = client_for(&node).await;

    let err = client.request("test_echo", vec![json!(1)]).await.unwrap_err();
    assert!(matches!(err, Error::Transport(TransportError::NoData)), "{err:?}");
    assert_eq!(node.accepted(), 2);
    assert_eq!(client.next_id(), 1);
}

#[tokio::test]
async fn gives_up_after_reconnect_attempts() {
    let dir = tempfile::tempdir().unwrap();
    let node = ipc_node(dir.path(), |_, _| Reply::Hangup);
    let client = client_for(&node).await;
    std::fs::remove_file(&node.path).unwrap();

    let err = client.request("test_echo", vec![json!(1)]).await.unwrap_err();
    assert!(matches!(err, Error::Transport(TransportError::NoData)), "{err:?}");
    assert_eq!(node.accepted(), 1);
}

/// Restarts the node on the same socket path after `after`.
fn restart_later(dir: PathBuf, after: Duration) -> tokio::task::JoinHandle<IpcNode> {
    tokio::spawn(async move {
        tokio::time::sleep(after).await;
        ipc_node(&dir, |_, req| Reply::Line(echo(req)))
    })
}

async fn client_with_delay(node: &IpcNode, delay: Duration) -> Client {
    let meta = ConnectionMeta::new(&node.uri())
        .timeout(Duration::from_millis(300))
        .reconnect_delay(delay);
    Client::connect(meta).await.unwrap()
}

#[tokio::test]
async fn third_reconnect_attempt_can_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let node = ipc_node(dir.path(), |_, _| Reply::Hangup);
    let client = client_with_delay(&node, Duration::from_millis(200)).await;
    std::fs::remove_file(&node.path).unwrap();

    // attempts run at ~0, ~200 and ~400ms; the node is back at ~300ms
    let restarted = restart_later(dir.path().to_path_buf(), Duration::from_millis(300));

    let result = client.request("test_echo", vec![json!("late")]).await.unwrap();
    assert_eq!(result, json!("late"));

    let restarted = restarted.await.unwrap();
    assert_eq!(restarted.accepted(), 1);
    assert_eq!(restarted.requests.lock().unwrap().len(), 1);
    assert_eq!(node.requests.lock().unwrap().len(), 1);
    assert_eq!(client.next_id(), 2);
}

#[tokio::test]
async fn no_fourth_reconnect_attempt() {
    let dir = tempfile::tempdir().unwrap();
    let node = ipc_node(dir.path(), |_, _| Reply::Hangup);
    let client = client_with_delay(&node, Duration::from_millis(200)).await;
    std::fs::remove_file(&node.path).unwrap();

    // a fourth attempt would land at ~600ms and find the node back
    let restarted = restart_later(dir.path().to_path_buf(), Duration::from_millis(500));

    let started = tokio::time::Instant::now();
    let err = client.request("test_echo", vec![json!(1)]).await.unwrap_err();
    let elapsed = started.elapsed();
    assert!(matches!(err, Error::Transport(TransportError::NoData)), "{err:?}");
    // three attempts sleep twice
    assert!(elapsed >= Duration::from_millis(400), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(600), "{elapsed:?}");

    let restarted = restarted.await.unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(restarted.accepted(), 0);
}

#[tokio::test]
async fn read_timeout_drops_the_connection() {
    let dir = tempfile::tempdir().unwrap();
    let node = ipc_node(dir.path(), |conn, req| match conn {
        0 => Reply::Silent,
        _ => Reply::Line(echo(req)),
    });
    let client = client_for(&node).await;

    let err = client.request("test_echo", vec![json!(1)]).await.unwrap_err();
    assert!(matches!(err, Error::Transport(TransportError::Timeout(_))), "{err:?}");

    let result = client.request("test_echo", vec![json!(2)]).await.unwrap();
    assert_eq!(result, json!(2));
    assert_eq!(node.accepted(), 2);
}

#[tokio::test]
async fn unreadable_response_keeps_the_connection() {
    let dir = tempfile::tempdir().unwrap();
    let node = ipc_node(dir.path(), |_, req| {
        if req["params"][0] == json!("junk") {
            Reply::Line("garbage".to_string())
        } else {
            Reply::Line(echo(req))
        }
    });
    let client = client_for(&node).await;

    let err = client.request("test_echo", vec![json!("junk")]).await.unwrap_err();
    assert!(matches!(err, Error::BadJson(_)), "{err:?}");

    assert_eq!(client.request("test_echo", vec![json!("ok")]).await.unwrap(), json!("ok"));
    assert_eq!(node.accepted(), 1);
}

#[tokio::test]
async fn concurrent_calls_get_their_own_responses() {
    let dir = tempfile::tempdir().unwrap();
    let node = ipc_node(dir.path(), |_, req| Reply::Delayed(Duration::from_millis(5), echo(req)));
    let meta = ConnectionMeta::new(&node.uri()).timeout(Duration::from_secs(5));
    let client = Client::connect(meta).await.unwrap();

    let calls = (0..16).map(|n| {
        let client = client.clone();
        async move { (n, client.request("test_echo", vec![json!(n)]).await) }
    });

    for (n, result) in join_all(calls).await {
        assert_eq!(result.unwrap(), json!(n));
    }
    assert_eq!(node.accepted(), 1);
    assert_eq!(node.requests.lock().unwrap().len(), 16);
}

#[tokio::test]
async fn socket_path_with_space() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("my dir");
    std::fs::create_dir(&sub).unwrap();
    let node = ipc_node(&sub, |_, req| Reply::Line(echo(req)));

    let client = async_ethereum::connect(&node.uri()).await.unwrap();
    assert_eq!(client.endpoint(), Some(&Endpoint::Ipc { path: node.path.clone() }));
    assert_eq!(client.request("test_echo", vec![json!(3)]).await.unwrap(), json!(3));
}

#[tokio::test]
async fn ipc_scheme_is_an_alias() {
    let dir = tempfile::tempdir().unwrap();
    let node = ipc_node(dir.path(), |_, req| Reply::Line(echo(req)));

    let client = async_ethereum::connect(&format!("ipc://{}", node.path.display()))
        .await
        .unwrap();
    assert_eq!(
        client.endpoint(),
        Some(&Endpoint::Ipc {
            path: PathBuf::from(&node.path)
        })
    );
    assert_eq!(client.request("test_echo", vec![json!(7)]).await.unwrap(), json!(7));
}
