#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, UnixListener};

pub enum HttpReply {
    Respond(u16, String),
    Stall,
}

/// What the HTTP node saw: `Content-Type` header and parsed body.
pub type Seen = Arc<Mutex<Vec<(String, Value)>>>;

pub struct HttpNode {
    pub uri: String,
    pub seen: Seen,
}

/// A one-route HTTP server answering every POST the same way.
pub async fn http_node(reply: HttpReply) -> HttpNode {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    let seen: Seen = Arc::default();
    let reply = Arc::new(reply);

    let log = seen.clone();
    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                return;
            };
            let log = log.clone();
            let reply = reply.clone();
            tokio::spawn(async move {
                let mut reader = BufReader::new(stream);
                let mut content_type = String::new();
                let mut content_length = 0usize;
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
                        return;
                    }
                    let line = line.trim_end();
                    if line.is_empty() {
                        break;
                    }
                    if let Some((name, value)) = line.split_once(':') {
                        match name.to_ascii_lowercase().as_str() {
                            "content-type" => content_type = value.trim().to_string(),
                            "content-length" => content_length = value.trim().parse().unwrap_or(0),
                            _ => {}
                        }
                    }
                }
                let mut body = vec![0u8; content_length];
                reader.read_exact(&mut body).await.unwrap();
                let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
                log.lock().unwrap().push((content_type, body));

                match reply.as_ref() {
                    HttpReply::Stall => std::future::pending::<()>().await,
                    HttpReply::Respond(status, body) => {
                        let response = format!(
                            "HTTP/1.1 {status} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                            body.len()
                        );
                        let mut stream = reader.into_inner();
                        stream.write_all(response.as_bytes()).await.unwrap();
                        stream.shutdown().await.ok();
                    }
                }
            });
        }
    });

    HttpNode { uri, seen }
}

pub enum Reply {
    Line(String),
    Delayed(Duration, String),
    Hangup,
    Silent,
}

/// Echoes `params[0]` back as the result.
pub fn echo(request: &Value) -> String {
    json!({"jsonrpc": "2.0", "id": request["id"], "result": request["params"][0]}).to_string()
}

pub struct IpcNode {
    pub path: PathBuf,
    pub accepted: Arc<AtomicUsize>,
    pub requests: Arc<Mutex<Vec<Value>>>,
}

impl IpcNode {
    pub fn uri(&self) -> String {
        format!("unix://{}", self.path.display())
    }

    pub fn accepted(&self) -> usize {
        self.accepted.load(Ordering::SeqCst)
    }

    pub async fn wait_for_connections(&self, n: usize) {
        for _ in 0..100 {
            if self.accepted() >= n {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("expected {n} connections, saw {}", self.accepted());
    }
}

/// A node on a Unix socket. `behaviour` gets the connection index (from 0)
/// and each request, and decides how to answer.
pub fn ipc_node<F>(dir: &Path, behaviour: F) -> IpcNode
where
    F: Fn(usize, &Value) -> Reply + Send + Sync + 'static,
{
    let path = dir.join("geth.ipc");
    let listener = UnixListener::bind(&path).unwrap();
    let accepted = Arc::new(AtomicUsize::new(0));
    let requests: Arc<Mutex<Vec<Value>>> = Arc::default();
    let behaviour = Arc::new(behaviour);

    let counter = accepted.clone();
    let log = requests.clone();
    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                return;
            };
            let index = counter.fetch_add(1, Ordering::SeqCst);
            let behaviour = behaviour.clone();
            let log = log.clone();
            tokio::spawn(async move {
                let mut reader = BufReader::new(stream);
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).await.unwrap_or(0) == 0 {
                        return;
                    }
                    let request: Value = serde_json::from_str(&line).unwrap();
                    log.lock().unwrap().push(request.clone());
                    let reply = match behaviour(index, &request) {
                        Reply::Line(line) => line,
                        Reply::Delayed(delay, line) => {
                            tokio::time::sleep(delay).await;
                            line
                        }
                        Reply::Hangup => return,
                        Reply::Silent => std::future::pending().await,
                    };
                    let stream = reader.get_mut();
                    stream.write_all(reply.as_bytes()).await.unwrap();
                    stream.write_all(b"\n").await.unwrap();
                }
            });
        }
    });

    IpcNode {
        path,
        accepted,
        requests,
    }
}
