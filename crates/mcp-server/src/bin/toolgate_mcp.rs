use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match toolgate_mcp::main_entry().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
