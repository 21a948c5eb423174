use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

static CLI_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn pathway() -> Command {
    let mut cmd = Command::cargo_bin("pathway").expect("failed to locate pathway binary");
    cmd.env_remove("PATHWAY_WORKING_DIR");
    cmd
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let output = pathway()
                .arg("--version")
                .output()
                .expect("failed to run pathway");
            black_box(output);
        });
    });
}

fn bench_cli_resolve(c: &mut Criterion) {
    c.bench_function("cli_resolve", |b| {
        b.iter(|| {
            let output = pathway()
                .args(["resolve", "/srv/www", "site", "../logs", "app.log"])
                .output()
                .expect("failed to run pathway resolve");
            black_box(output);
        });
    });
}

fn bench_cli_write(c: &mut Criterion) {
    c.bench_function("cli_write", |b| {
        b.iter_batched(
            || TempDir::new().expect("failed to create temp dir"),
            |dir| {
                let counter = CLI_COUNTER.fetch_add(1, Ordering::Relaxed);
                let name = format!("cli-write-{counter}.txt");

                let mut cmd = pathway();
                cmd.stdout(Stdio::null()).stderr(Stdio::null());
                let status = cmd
                    .args(["--cwd", dir.path().to_str().unwrap(), "--quiet"])
                    .args(["write", &name, "bench payload"])
                    .status()
                    .expect("failed to execute pathway write");

                black_box(status.success());
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_cli_ls(c: &mut Criterion) {
    c.bench_function("cli_ls", |b| {
        b.iter_batched(
            || {
                let dir = TempDir::new().expect("failed to create temp dir");
                for i in 0..50 {
                    std::fs::write(dir.path().join(format!("cli-ls-{i}")), "x")
                        .expect("failed to create bench file");
                }
                dir
            },
            |dir| {
                let output = pathway()
                    .args(["--cwd", dir.path().to_str().unwrap()])
                    .args(["ls", "--format", "json"])
                    .output()
                    .expect("failed to execute pathway ls");

                black_box(output);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    cli_benches,
    bench_cli_startup,
    bench_cli_resolve,
    bench_cli_write,
    bench_cli_ls
);
criterion_main!(cli_benches);
