use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pokemon_collection::{
    api, auth::password::PasswordHasher, db::migrations::initialize_database, AppState,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

/// テスト用JWT秘密鍵
pub const TEST_JWT_SECRET: &str = "test-secret-for-integration-tests";

/// テストではbcryptの最小コストを使う
pub const TEST_BCRYPT_COST: u32 = 4;

/// 一時ファイルDB上に構築したテスト用アプリケーション
///
/// `TempDir` はDBファイルの寿命と一致させるため保持する
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub state: AppState,
    _temp_dir: TempDir,
}

impl TestApp {
    /// トークン有効期間1時間で構築
    pub async fn new() -> Self {
        Self::with_ttl(chrono::Duration::hours(1)).await
    }

    /// 指定したトークン有効期間で構築
    pub async fn with_ttl(jwt_ttl: chrono::Duration) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let database_url = format!(
            "sqlite:{}",
            temp_dir.path().join("collection.db").display()
        );
        let pool = initialize_database(&database_url)
            .await
            .expect("Failed to initialize test database");

        let state = AppState {
            db_pool: pool.clone(),
            jwt_secret: TEST_JWT_SECRET.to_string(),
            jwt_ttl,
            password_hasher: PasswordHasher::new(TEST_BCRYPT_COST),
        };

        Self {
            router: api::create_router(state.clone()),
            pool,
            state,
            _temp_dir: temp_dir,
        }
    }

    /// リクエストを送信し、ステータスとJSONボディを返す
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        send(self.router.clone(), request).await
    }

    pub async fn signup(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.send(json_request(
            "POST",
            "/api/signup",
            None,
            Some(serde_json::json!({ "username": username, "password": password })),
        ))
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.send(json_request(
            "POST",
            "/api/login",
            None,
            Some(serde_json::json!({ "username": username, "password": password })),
        ))
        .await
    }

    /// サインアップしてログインし、トークンを返す
    pub async fn signup_and_login(&self, username: &str, password: &str) -> String {
        let (status, _) = self.signup(username, password).await;
        assert_eq!(status, StatusCode::CREATED, "signup should succeed");

        let (status, body) = self.login(username, password).await;
        assert_eq!(status, StatusCode::OK, "login should succeed");

        body["token"]
            .as_str()
            .expect("login response should contain token")
            .to_string()
    }

    /// ポケモンを登録し、IDを返す
    pub async fn store_pokemon(&self, token: &str, name: &str) -> i64 {
        let (status, body) = self
            .send(json_request(
                "POST",
                "/api/myPokemons",
                Some(token),
                Some(serde_json::json!({ "name": name })),
            ))
            .await;
        assert_eq!(status, StatusCode::CREATED, "store should succeed");
        body["id"].as_i64().expect("created pokemon should have id")
    }

    /// 所有ポケモン名一覧
    pub async fn list_names(&self, token: &str) -> Vec<String> {
        let (status, body) = self
            .send(json_request("GET", "/api/myPokemons", Some(token), None))
            .await;
        assert_eq!(status, StatusCode::OK);
        body.as_array()
            .expect("list should be an array")
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect()
    }
}

/// JSONリクエストを組み立てる
pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// ルーターにリクエストを送信し、ステータスとJSONボディを返す
pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}
