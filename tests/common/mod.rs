//! In-process stand-in for the Nexus script API.
//!
//! Scripts are stored but never executed; running the delete-assets script
//! matches against an in-memory repository listing instead.

use std::collections::BTreeMap;
use std::process::{Command, Output, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};

pub const DELETE_ASSETS: &str = "nexus3-cli-repository-delete-assets";

const BASIC_AUTH: &str = "Basic YWRtaW46YWRtaW4xMjM=";

#[derive(Default)]
pub struct NexusState {
    pub scripts: BTreeMap<String, String>,
    pub repos: BTreeMap<String, Vec<String>>,
    pub runs: Vec<Value>,
    /// Answer delete-assets runs without a `result` field.
    pub omit_result: bool,
}

type Shared = Arc<Mutex<NexusState>>;

pub struct FakeNexus {
    pub base_url: String,
    state: Shared,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for FakeNexus {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl FakeNexus {
    pub fn with_state<T>(&self, f: impl FnOnce(&mut NexusState) -> T) -> T {
        let mut st = self.state.lock().expect("fake nexus state");
        f(&mut st)
    }

    #[allow(dead_code)]
    pub fn runs(&self) -> Vec<Value> {
        self.with_state(|st| st.runs.clone())
    }

    #[allow(dead_code)]
    pub fn assets(&self, repo: &str) -> Vec<String> {
        self.with_state(|st| st.repos.get(repo).cloned().unwrap_or_default())
    }

    #[allow(dead_code)]
    pub fn script(&self, name: &str) -> Option<String> {
        self.with_state(|st| st.scripts.get(name).cloned())
    }
}

pub fn spawn_fake_nexus(repos: &[(&str, &[&str])]) -> Result<FakeNexus> {
    let state: Shared = Arc::new(Mutex::new(NexusState {
        repos: repos
            .iter()
            .map(|(name, assets)| {
                (
                    name.to_string(),
                    assets.iter().map(|a| a.to_string()).collect(),
                )
            })
            .collect(),
        ..NexusState::default()
    }));

    let (addr_tx, addr_rx) = std::sync::mpsc::channel();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let app = router(state.clone());

    let thread = thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("fake nexus runtime");
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind fake nexus");
            let addr = listener.local_addr().expect("fake nexus addr");
            let _ = addr_tx.send(addr);
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("serve fake nexus");
        });
    });

    let addr = addr_rx
        .recv_timeout(std::time::Duration::from_secs(5))
        .context("fake nexus did not start")?;

    Ok(FakeNexus {
        base_url: format!("http://{}", addr),
        state,
        shutdown: Some(shutdown_tx),
        thread: Some(thread),
    })
}

fn router(state: Shared) -> Router {
    Router::new()
        .route(
            "/service/rest/v1/script",
            get(list_scripts).post(create_script),
        )
        .route(
            "/service/rest/v1/script/:name",
            get(get_script).delete(delete_script),
        )
        .route("/service/rest/v1/script/:name/run", post(run_script))
        .with_state(state)
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(BASIC_AUTH)
}

async fn list_scripts(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let st = state.lock().expect("state");
    let scripts: Vec<Value> = st
        .scripts
        .iter()
        .map(|(name, content)| json!({ "name": name, "type": "groovy", "content": content }))
        .collect();
    axum::Json(scripts).into_response()
}

async fn create_script(
    State(state): State<Shared>,
    headers: HeaderMap,
    axum::Json(body): axum::Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let (Some(name), Some(content)) = (body["name"].as_str(), body["content"].as_str()) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let mut st = state.lock().expect("state");
    if st.scripts.contains_key(name) {
        return (StatusCode::BAD_REQUEST, "script already exists").into_response();
    }
    st.scripts.insert(name.to_string(), content.to_string());
    StatusCode::NO_CONTENT.into_response()
}

async fn get_script(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let st = state.lock().expect("state");
    match st.scripts.get(&name) {
        Some(content) => {
            axum::Json(json!({ "name": name, "type": "groovy", "content": content }))
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_script(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let mut st = state.lock().expect("state");
    match st.scripts.remove(&name) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn run_script(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(name): Path<String>,
    body: String,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let mut st = state.lock().expect("state");
    if !st.scripts.contains_key(&name) {
        return StatusCode::NOT_FOUND.into_response();
    }
    if name != DELETE_ASSETS {
        return axum::Json(json!({ "name": name, "result": body })).into_response();
    }

    let payload: Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(_) => return (StatusCode::BAD_REQUEST, "payload is not JSON").into_response(),
    };
    st.runs.push(payload.clone());
    if st.omit_result {
        return axum::Json(json!({ "name": name })).into_response();
    }

    let inner = delete_assets(&mut st, &payload);
    axum::Json(json!({ "name": name, "result": inner.to_string() })).into_response()
}

fn delete_assets(st: &mut NexusState, payload: &Value) -> Value {
    let repo = payload["repoName"].as_str().unwrap_or_default();
    let pattern = payload["assetRegex"].as_str().unwrap_or_default();
    let is_wildcard = payload["isWildcard"].as_bool().unwrap_or(false);
    let dry_run = payload["dryRun"].as_bool().unwrap_or(true);

    let Some(names) = st.repos.get_mut(repo) else {
        return json!({
            "success": false,
            "error": format!("Repository not found: {}", repo),
            "assets": null
        });
    };

    let matches: Box<dyn Fn(&str) -> bool> = if is_wildcard {
        let glob = globset::Glob::new(&pattern.replace('%', "*"))
            .expect("wildcard pattern")
            .compile_matcher();
        Box::new(move |name| glob.is_match(name))
    } else {
        let re = regex::Regex::new(&format!("^(?:{})$", pattern)).expect("regex pattern");
        Box::new(move |name| re.is_match(name))
    };

    let matched: Vec<String> = names.iter().filter(|n| matches(n)).cloned().collect();
    if !dry_run {
        names.retain(|n| !matched.contains(n));
    }

    json!({
        "success": true,
        "error": "",
        "assets": matched.iter().map(|n| format!("/{}/{}", repo, n)).collect::<Vec<_>>()
    })
}

/// Runs the `nexus3` binary against `nexus` with an empty config file and
/// optional stdin.
#[allow(dead_code)]
pub fn run_nexus3(nexus: &FakeNexus, args: &[&str], stdin: Option<&str>) -> Result<Output> {
    run_nexus3_env(nexus, args, stdin, &[])
}

pub fn run_nexus3_env(
    nexus: &FakeNexus,
    args: &[&str],
    stdin: Option<&str>,
    envs: &[(&str, &str)],
) -> Result<Output> {
    let config_dir = tempfile::tempdir().context("create config tempdir")?;

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nexus3"));
    cmd.args(args)
        .env("NEXUS3_CONFIG", config_dir.path().join(".nexus-cli"))
        .env("NEXUS3_URL", &nexus.base_url)
        .env_remove("NEXUS3_USERNAME")
        .env_remove("NEXUS3_PASSWORD")
        .env_remove("NEXUS3_LOG")
        .envs(envs.iter().copied())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .stdin(if stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawn nexus3 {:?}", args))?;
    if let Some(input) = stdin {
        use std::io::Write;
        let mut pipe = child.stdin.take().context("nexus3 stdin")?;
        pipe.write_all(input.as_bytes()).context("write nexus3 stdin")?;
    }
    child
        .wait_with_output()
        .with_context(|| format!("wait for nexus3 {:?}", args))
}

#[allow(dead_code)]
pub fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[allow(dead_code)]
pub fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}
