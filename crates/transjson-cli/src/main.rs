#![forbid(unsafe_code)]

//! Thin entrypoint delegating to [`transjson_cli::run`].

#[tokio::main]
async fn main() {
    let exit_code = transjson_cli::run().await;
    std::process::exit(exit_code);
}
