//! A mock JSON-RPC node that answers a scripted sequence of requests.

use {
    std::{
        fmt::{self, Debug, Formatter},
        net::SocketAddr,
        sync::{
            Arc,
            Mutex,
            atomic::{AtomicBool, Ordering},
        },
    },
    tokio::task::JoinHandle,
};

/// How the request parameters are checked.
#[derive(Clone)]
pub enum Params {
    Any,
    /// The serialized parameters have to contain each of these strings,
    /// ignoring ASCII case.
    Containing(Vec<String>),
}

impl Params {
    pub fn containing(parts: impl IntoIterator<Item = impl ToString>) -> Self {
        Self::Containing(parts.into_iter().map(|part| part.to_string()).collect())
    }

    fn check(&self, params: &serde_json::Value) {
        let Self::Containing(parts) = self else {
            return;
        };
        let params = params.to_string().to_ascii_lowercase();
        for part in parts {
            assert!(
                params.contains(&part.to_ascii_lowercase()),
                "request params {params} do not contain {part}"
            );
        }
    }
}

impl Debug for Params {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Params::Any => f.debug_tuple("Any").finish(),
            Params::Containing(parts) => f.debug_tuple("Containing").field(parts).finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Response {
    Result(serde_json::Value),
    Error { code: i64, message: &'static str },
}

#[derive(Clone, Debug)]
pub struct Expectation {
    pub method: &'static str,
    pub params: Params,
    pub res: Response,
}

/// Drop handle that will verify that the server task didn't panic throughout
/// the test and that all the expectations have been met.
pub struct ServerHandle {
    /// The address that handles requests to this server.
    pub address: SocketAddr,
    /// Handle to shut down the server task on drop.
    handle: JoinHandle<()>,
    /// Expectations that are left over after the test.
    expectations: Arc<Mutex<Vec<Expectation>>>,
    /// Indicates if some assertion failed.
    assert_failed: Arc<AtomicBool>,
}

impl ServerHandle {
    pub fn url(&self) -> url::Url {
        format!("http://{}/", self.address).parse().unwrap()
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        // Don't cause mass hysteria!
        if std::thread::panicking() {
            return;
        }

        // Panics happening in the server task might not cause the test to fail and only
        // show up if some assertion fails in the main task. This accomplishes that.
        assert!(!self.assert_failed.load(Ordering::SeqCst));

        assert!(
            !self.handle.is_finished(),
            "mock node terminated before test ended"
        );
        assert_eq!(
            self.expectations.lock().unwrap().len(),
            0,
            "mock node did not receive enough requests"
        );
        self.handle.abort();
    }
}

/// Set up a mock JSON-RPC node.
pub async fn setup(mut expectations: Vec<Expectation>) -> ServerHandle {
    // Reverse expectations so test can specify them in natural order while allowing
    // us to simply `.pop()` the last element.
    expectations.reverse();

    let expectations = Arc::new(Mutex::new(expectations));
    let failed_assert = Arc::new(AtomicBool::new(false));

    let app = axum::Router::new()
        .route(
            "/",
            axum::routing::post(
                |axum::extract::State(state), axum::extract::Json(req)| async move {
                    axum::response::Json(rpc(state, req))
                },
            ),
        )
        .with_state(State {
            expectations: expectations.clone(),
            failed_assert: failed_assert.clone(),
        });

    let server =
        axum::Server::bind(&"127.0.0.1:0".parse().unwrap()).serve(app.into_make_service());
    let address = server.local_addr();
    let handle = tokio::spawn(async move { server.await.unwrap() });

    ServerHandle {
        handle,
        expectations,
        address,
        assert_failed: failed_assert,
    }
}

#[derive(Clone)]
struct State {
    /// Request handler reads from here which request to expect and what to
    /// respond.
    expectations: Arc<Mutex<Vec<Expectation>>>,
    /// Request handler notifies test about failed assert via this flag.
    failed_assert: Arc<AtomicBool>,
}

/// Runs the given closure and updates a flag if it panics.
fn assert_and_propagate_panics<F, R>(assertions: F, flag: &AtomicBool) -> R
where
    F: FnOnce() -> R + std::panic::UnwindSafe + 'static,
{
    std::panic::catch_unwind(assertions)
        .map_err(|_| {
            flag.store(true, Ordering::SeqCst);
        })
        .expect("ignore this panic; it was caused by the previous panic")
}

fn rpc(state: State, req: serde_json::Value) -> serde_json::Value {
    let expectation = state.expectations.lock().unwrap().pop();

    let assertions = move || {
        let Some(expectation) = expectation else {
            panic!("got another request, but didn't expect any more: {req}");
        };
        assert_eq!(
            req["method"], expectation.method,
            "request has unexpected method"
        );
        expectation.params.check(&req["params"]);

        let id = req["id"].clone();
        match expectation.res {
            Response::Result(result) => serde_json::json!({
                "jsonrpc": "2.0",
                "id": id,
                "result": result,
            }),
            Response::Error { code, message } => serde_json::json!({
                "jsonrpc": "2.0",
                "id": id,
                "error": { "code": code, "message": message },
            }),
        }
    };

    assert_and_propagate_panics(assertions, &state.failed_assert)
}
