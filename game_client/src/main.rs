fn main() -> std::io::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(game_client::run_with_config());

    // A pending stdin read parks a blocking thread that cannot be cancelled;
    // waiting for it would hang exit until the next line of input.
    runtime.shutdown_background();
    result
}
