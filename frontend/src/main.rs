use spending_dashboard::AppConfig;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let config = AppConfig::load();

    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level())
            .build(),
    );

    tracing::info!(api = %config.api_base_url, page_size = config.page_size, "starting dashboard");
    spending_dashboard::run_app(config);
}
