fn main() -> anyhow::Result<()> {
    photokik_app::platform::run_app()
}
