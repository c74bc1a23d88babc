use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::auth::{AuthConfig, AuthService};
use service::auth::repository::mock::MockAuthRepository;
use service::auth::domain::{RegisterInput, LoginInput};

fn bench_login(c: &mut Criterion) {
    let repo = Arc::new(MockAuthRepository::default());
    let svc = AuthService::new(repo.clone(), AuthConfig::with_secret("secret"));

    // pre-create user outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    let _ = rt.block_on(svc.register(RegisterInput { name: "Bench".into(), email: "bench@example.com".into(), password: "Benchmark1".into() }));

    c.bench_function("auth_login_verify", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.login(LoginInput { email: "bench@example.com".into(), password: "Benchmark1".into() })).unwrap();
        });
    });

    let token = rt
        .block_on(svc.login(LoginInput { email: "bench@example.com".into(), password: "Benchmark1".into() }))
        .unwrap()
        .token;
    c.bench_function("auth_token_verify", |b| {
        b.iter(|| svc.verify(&token).unwrap());
    });
}

criterion_group!(benches, bench_login);
criterion_main!(benches);
