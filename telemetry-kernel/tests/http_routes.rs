use reqwest::StatusCode;
use serde_json::Value;
use std::sync::atomic::Ordering;
use telemetry_core::RandomSource;
use telemetry_devkit::{init_test_logging, AssetFixture, ConstantSource, SequenceSource};
use telemetry_kernel::{build_router, AppState};
use tokio::net::TcpListener;

/// Sert le routeur sur un port éphémère, renvoie l'URL de base
async fn spawn(state: AppState) -> String {
    init_test_logging();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn body_of(url: &str) -> (StatusCode, String) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn api_returns_five_readings_in_range() {
    let fixture = AssetFixture::complete().unwrap();
    let base = spawn(AppState::new(fixture.root())).await;

    let response = reqwest::get(format!("{base}/api/telemetry")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.headers()["access-control-allow-methods"], "GET");

    let readings: Vec<Value> = response.json().await.unwrap();
    assert_eq!(readings.len(), 5);
    for reading in &readings {
        let cpu = reading["cpuUsage"].as_f64().unwrap();
        let memory = reading["memoryUsage"].as_f64().unwrap();
        assert!((10.0..100.0).contains(&cpu), "cpu {cpu}");
        assert!((20.0..90.0).contains(&memory), "memory {memory}");
        assert!(!reading["timestamp"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn api_uses_injected_source_per_request() {
    let fixture = AssetFixture::complete().unwrap();
    let template = SequenceSource::new([0.0, 0.5]);
    let draws = template.draw_counter();
    let state = AppState::new(fixture.root())
        .with_sources(move || Box::new(template.clone()) as Box<dyn RandomSource>);
    let base = spawn(state).await;

    for _ in 0..2 {
        let readings: Vec<Value> = reqwest::get(format!("{base}/api/telemetry"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(readings.len(), 5);
        for reading in readings {
            assert_eq!(reading["cpuUsage"], 10.0);
            assert_eq!(reading["memoryUsage"], 55.0);
        }
    }
    // 2 requêtes x 5 mesures x (cpu + mémoire)
    assert_eq!(draws.load(Ordering::Relaxed), 20);
}

#[tokio::test]
async fn api_never_reaches_upper_bounds() {
    let fixture = AssetFixture::complete().unwrap();
    let state = AppState::new(fixture.root())
        .with_sources(|| Box::new(ConstantSource(1.0)) as Box<dyn RandomSource>);
    let base = spawn(state).await;

    let readings: Vec<Value> = reqwest::get(format!("{base}/api/telemetry"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    for reading in readings {
        assert!(reading["cpuUsage"].as_f64().unwrap() < 100.0);
        assert!(reading["memoryUsage"].as_f64().unwrap() < 90.0);
    }
}

#[tokio::test]
async fn post_on_api_is_rejected_without_body() {
    let fixture = AssetFixture::complete().unwrap();
    let base = spawn(AppState::new(fixture.root())).await;

    let client = reqwest::Client::new();
    for request in [
        client.post(format!("{base}/api/telemetry")),
        client.put(format!("{base}/api/telemetry")),
        client.delete(format!("{base}/api/telemetry")),
        client.head(format!("{base}/api/telemetry")),
    ] {
        let response = request.send().await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response.text().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn page_aliases_serve_their_file() {
    let fixture = AssetFixture::complete().unwrap();
    let base = spawn(AppState::new(fixture.root())).await;

    let cases = [
        ("/", "index.html"),
        ("/index.html", "index.html"),
        ("/dash.html", "dash.html"),
        ("/dashboard.html", "dash.html"),
        ("/analysis.html", "analysis.html"),
        ("/analytics.html", "analysis.html"),
        ("/how-it-works.html", "how it works.html"),
        ("/how%20it%20works.html", "how it works.html"),
    ];
    for (path, file) in cases {
        let response = reqwest::get(format!("{base}{path}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert_eq!(response.headers()["content-type"], "text/html", "{path}");
        assert_eq!(response.headers()["access-control-allow-origin"], "*", "{path}");
        assert_eq!(response.text().await.unwrap(), AssetFixture::body_for(file), "{path}");
    }
}

#[tokio::test]
async fn static_assets_have_their_content_type() {
    let fixture = AssetFixture::complete().unwrap();
    let base = spawn(AppState::new(fixture.root())).await;

    for (path, file, content_type) in [
        ("/styles.css", "styles.css", "text/css"),
        ("/script.js", "script.js", "application/javascript"),
    ] {
        let response = reqwest::get(format!("{base}{path}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], content_type);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        assert_eq!(response.text().await.unwrap(), AssetFixture::body_for(file));
    }
}

#[tokio::test]
async fn unknown_path_falls_back_to_index() {
    let fixture = AssetFixture::complete().unwrap();
    let base = spawn(AppState::new(fixture.root())).await;

    let (root_status, root_body) = body_of(&format!("{base}/")).await;
    let (status, body) = body_of(&format!("{base}/unknown-path")).await;
    assert_eq!(root_status, StatusCode::OK);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, root_body);

    let (_, nested) = body_of(&format!("{base}/some/deep/path.png")).await;
    assert_eq!(nested, root_body);
}

#[tokio::test]
async fn missing_assets_are_404_with_filename() {
    let fixture = AssetFixture::with_files(&["index.html"]).unwrap();
    let base = spawn(AppState::new(fixture.root())).await;

    for (path, file) in [
        ("/styles.css", "styles.css"),
        ("/script.js", "script.js"),
        ("/dash.html", "dash.html"),
        ("/how-it-works.html", "how it works.html"),
    ] {
        let (status, body) = body_of(&format!("{base}{path}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(body.contains(file), "{path}: {body}");
    }
}

#[tokio::test]
async fn missing_index_breaks_fallback_but_not_the_server() {
    let fixture = AssetFixture::complete().unwrap();
    fixture.remove("index.html").unwrap();
    let base = spawn(AppState::new(fixture.root())).await;

    let (status, body) = body_of(&format!("{base}/nowhere")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "File not found: index.html");

    // le serveur continue de répondre après l'erreur
    let (status, _) = body_of(&format!("{base}/dash.html")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn non_get_on_pages_is_rejected() {
    let fixture = AssetFixture::complete().unwrap();
    let base = spawn(AppState::new(fixture.root())).await;

    let client = reqwest::Client::new();
    for path in ["/", "/dash.html", "/styles.css", "/unknown-path"] {
        let response = client.post(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{path}");

        let response = client.head(format!("{base}{path}")).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "HEAD {path}");
    }
}
