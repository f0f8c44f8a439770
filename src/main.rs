fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(tottepost::core::app::run());
    // The stdin reader may still be parked on a blocking read
    runtime.shutdown_background();
    result
}
