use coros_client::http_client::ReqwestCorosClient;
use coros_client::CorosClient;
use criterion::{Criterion, criterion_group, criterion_main};
use secrecy::SecretString;
use tokio::runtime::Builder;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bench_download_activity(c: &mut Criterion) {
    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");

    let (server, client) = rt.block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/account/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": {"accessToken": "T"}})),
            )
            .mount(&server)
            .await;
        let file_url = format!("{}/export/a1.fit", server.uri());
        Mock::given(method("POST"))
            .and(path("/activity/detail/download"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": {"fileUrl": file_url}})),
            )
            .mount(&server)
            .await;
        let body = vec![7u8; 256 * 1024]; // 256KB payload to exercise the fetch path
        Mock::given(method("GET"))
            .and(path("/export/a1.fit"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
            .mount(&server)
            .await;

        let mut client = ReqwestCorosClient::new(
            &server.uri(),
            "rider@example.com",
            SecretString::new("password".into()),
        );
        client.login().await.expect("login");
        (server, client)
    });
    let _hold_server = server;

    c.bench_function("download_activity_two_step", |b| {
        b.to_async(&rt).iter(|| {
            let client = client.clone();
            async move {
                let (bytes, ext) = client
                    .download_activity("a1", 100, "4")
                    .await
                    .expect("download");
                assert_eq!(ext, "fit");
                assert_eq!(bytes.len(), 256 * 1024);
            }
        })
    });
}

criterion_group!(benches, bench_download_activity);
criterion_main!(benches);
